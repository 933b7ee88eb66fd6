// simulation/sling.rs
// Press-drag-release gesture: grab a body and fling it with a one-shot impulse

use super::Simulation;
use ultraviolet::Vec2;

/// Impulse for a body at `anchor` released at `release`.
///
/// Points from the release point back toward the body (a slingshot) and
/// grows linearly with the drag distance.
pub fn sling_impulse(anchor: Vec2, release: Vec2, divisor: f32) -> Vec2 {
    let dx = anchor.x - release.x;
    let dy = anchor.y - release.y;
    let f = dx.hypot(dy) / divisor;
    let t = dy.atan2(dx);
    let (sin, cos) = t.sin_cos();
    Vec2::new(f * cos, f * sin)
}

impl Simulation {
    /// Index of the first body whose grab zone contains `pointer`.
    ///
    /// The zone is `radius * grab_radius_factor` compared against the squared
    /// distance, so it is wider than the drawn circle.
    pub fn hit_test(&self, pointer: Vec2) -> Option<usize> {
        let factor = self.config.grab_radius_factor;
        self.bodies
            .iter()
            .position(|b| (b.pos - pointer).mag_sq() <= b.radius() * factor)
    }

    /// Pointer went down. Starts a grab unless one is already active.
    pub fn press(&mut self, pointer: Vec2) -> Option<usize> {
        if self.grabbed.is_some() {
            return None;
        }
        self.grabbed = self.hit_test(pointer);
        if let Some(index) = self.grabbed {
            log::debug!("grabbed body {} at ({:.1}, {:.1})", index, pointer.x, pointer.y);
        }
        self.grabbed
    }

    /// Pointer went up. Applies the sling impulse to the grabbed body's
    /// staged velocity and ends the grab.
    pub fn release(&mut self, pointer: Vec2) -> Option<Vec2> {
        let index = self.grabbed.take()?;
        let body = &mut self.bodies[index];
        let impulse = sling_impulse(body.pos, pointer, self.config.impulse_divisor);
        body.apply_impulse(impulse);
        log::debug!(
            "released body {} with impulse ({:.4}, {:.4})",
            index,
            impulse.x,
            impulse.y
        );
        Some(impulse)
    }

    /// Drop the grab without flinging anything.
    pub fn cancel_grab(&mut self) {
        if let Some(index) = self.grabbed.take() {
            log::debug!("grab on body {} cancelled", index);
        }
    }

    /// Line from the grabbed body to the live pointer, if a grab is active.
    pub fn sling_preview(&self, pointer: Vec2) -> Option<(Vec2, Vec2)> {
        self.grabbed.map(|index| (self.bodies[index].pos, pointer))
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }
}
