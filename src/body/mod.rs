// body/mod.rs
// Re-exports for the body module

mod types;

pub use types::*;

#[cfg(test)]
mod tests;
