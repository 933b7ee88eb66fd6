use eframe::egui::{InputState, Pos2};
use ultraviolet::Vec2;

/// Canvas-relative world coordinates of a screen point.
pub fn screen_to_world(origin: Pos2, screen: Pos2) -> Vec2 {
    Vec2::new(screen.x - origin.x, screen.y - origin.y)
}

/// The parts of the pointer state the sling gesture cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub pos: Option<Pos2>,
}

impl PointerSample {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            down: input.pointer.primary_down(),
            pos: input.pointer.latest_pos(),
        }
    }
}

impl super::Renderer {
    pub fn apply_pointer(&mut self, sample: PointerSample, origin: Pos2) {
        if let Some(pos) = sample.pos {
            self.pointer = Some(screen_to_world(origin, pos));
        }
        let Some(pointer) = self.pointer else {
            return;
        };

        if sample.pressed {
            self.sim.press(pointer);
        }
        if sample.released {
            self.sim.release(pointer);
        } else if !sample.down && self.sim.grabbed().is_some() {
            // button came up somewhere we never heard about
            self.sim.cancel_grab();
        }
    }

    /// Sling line from the grabbed body to the pointer, in world coordinates.
    pub fn sling_preview(&self) -> Option<(Vec2, Vec2)> {
        self.pointer.and_then(|p| self.sim.sling_preview(p))
    }
}
