use crate::init_config::InitConfig;
use crate::renderer::Renderer;
use crate::scenario;
use crate::simulation::Simulation;
use eframe::egui;
use log::LevelFilter;

pub const WINDOW_TITLE: &str = "Physics Simulation";

/// Set up logging with a fixed level. No environment variables are consulted.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init();
}

/// Build the world from the baked-in configuration.
pub fn load_simulation() -> Simulation {
    let parsed = InitConfig::embedded();
    let level = parsed
        .as_ref()
        .map(InitConfig::log_level)
        .unwrap_or(LevelFilter::Info);
    init_logging(level);

    let init = parsed.unwrap_or_else(|err| {
        log::error!("init_config.toml rejected: {err}; using built-in defaults");
        InitConfig::default()
    });
    let bodies = scenario::build_bodies(&init);
    log::info!(
        "world {}x{}, k = {}, dt = {}, {} atoms",
        init.world.width,
        init.world.height,
        init.world.coulomb_k,
        init.world.dt,
        bodies.len()
    );
    Simulation::new(init.world, bodies)
}

pub fn run() -> eframe::Result<()> {
    let simulation = load_simulation();
    let size = [simulation.config.width, simulation.config.height];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_resizable(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(Renderer::new(simulation)))),
    );
    log::info!("window closed");
    result
}
