//! Device metrics and platform integration for metron.
pub mod config;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod window;

// Re-export winit for WindowEvent and stuff
pub use winit;
