pub mod draw;
pub mod input;

use crate::profile_scope;
use crate::simulation::Simulation;
use eframe::egui::{self, Color32};
use ultraviolet::Vec2;

pub use draw::{highlight, vector_triangle, world_to_screen};
pub use input::{screen_to_world, PointerSample};

/// The windowed frontend. Owns the simulation and advances it once per
/// repaint, so one egui frame is one simulation frame.
pub struct Renderer {
    sim: Simulation,
    /// Latest pointer position in world coordinates.
    pointer: Option<Vec2>,
}

impl Renderer {
    pub fn new(sim: Simulation) -> Self {
        Self { sim, pointer: None }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// One full frame: pointer input, simulation step, drawing.
    fn run_frame(&mut self, ui: &mut egui::Ui) {
        let origin = ui.max_rect().min;
        let sample = ui.input(PointerSample::from_input);
        self.apply_pointer(sample, origin);

        {
            profile_scope!("simulation_loop");
            self.sim.step();
        }

        self.draw(ui.painter(), origin);
    }
}

impl eframe::App for Renderer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| self.run_frame(ui));

        #[cfg(feature = "profiling")]
        crate::PROFILER.lock().report_every(self.sim.frame);

        ctx.request_repaint();
    }
}
