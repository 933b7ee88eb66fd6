pub mod body;
pub mod config;
pub mod init_config;
pub mod profiler;
pub mod renderer;
pub mod scenario;
pub mod simulation;
pub mod utils;

pub mod app;

pub use simulation::Simulation;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
