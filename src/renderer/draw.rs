use crate::profile_scope;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use palette::{Hsluv, IntoColor, Srgb, Srgba};
use ultraviolet::Vec2;

const FORCE_COLOR: Color32 = Color32::from_rgb(0, 255, 0);
const VELOCITY_COLOR: Color32 = Color32::BLACK;
const SLING_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
/// Half-width of the base of the vector triangles.
const ARROW_HALF_BASE: f32 = 5.0;
/// Lightness added to a grabbed body's fill, in HSLuv units.
const HIGHLIGHT_LIGHTNESS: f32 = 30.0;

pub fn world_to_screen(origin: Pos2, world: Vec2) -> Pos2 {
    Pos2::new(origin.x + world.x, origin.y + world.y)
}

/// Thin triangle from a horizontal base centered on `pos` to `tip`.
pub fn vector_triangle(pos: Vec2, tip: Vec2) -> [Vec2; 3] {
    [
        Vec2::new(pos.x - ARROW_HALF_BASE, pos.y),
        tip,
        Vec2::new(pos.x + ARROW_HALF_BASE, pos.y),
    ]
}

/// Same hue, lighter.
pub fn highlight(color: [u8; 4]) -> [u8; 4] {
    let srgb = Srgb::new(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    );
    let mut c: Hsluv = srgb.into_color();
    c.l = (c.l + HIGHLIGHT_LIGHTNESS).min(100.0);
    let rgba: Srgba = c.into_color();
    [
        (rgba.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgba.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgba.blue.clamp(0.0, 1.0) * 255.0) as u8,
        color[3],
    ]
}

fn color32(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

impl super::Renderer {
    pub fn draw(&self, painter: &Painter, origin: Pos2) {
        profile_scope!("draw_particles");
        let sim = &self.sim;
        let to_screen = |v: Vec2| world_to_screen(origin, v);
        let triangle = |pos: Vec2, tip: Vec2, color: Color32| {
            let points = vector_triangle(pos, tip).map(to_screen).to_vec();
            Shape::convex_polygon(points, color, Stroke::new(1.0, color))
        };

        // --- Vector Overlays ---
        for body in &sim.bodies {
            let force_tip = body.pos + body.force().to_cartesian() * sim.config.force_display_scale;
            painter.add(triangle(body.pos, force_tip, FORCE_COLOR));
            let velocity_tip = body.pos + body.vel * sim.config.velocity_display_scale;
            painter.add(triangle(body.pos, velocity_tip, VELOCITY_COLOR));
        }

        for (i, body) in sim.bodies.iter().enumerate() {
            let color = if sim.grabbed() == Some(i) {
                highlight(body.color())
            } else {
                body.color()
            };
            painter.circle_filled(to_screen(body.pos), body.radius(), color32(color));
        }

        if let Some((from, to)) = self.sling_preview() {
            painter.line_segment([to_screen(from), to_screen(to)], Stroke::new(2.0, SLING_COLOR));
        }

        painter.text(
            origin + eframe::egui::vec2(6.0, 6.0),
            Align2::LEFT_TOP,
            format!("frame {}  t = {:.1}", sim.frame, sim.time_elapsed),
            FontId::monospace(12.0),
            Color32::DARK_GRAY,
        );
    }
}
