//! Common utilities for physics visualizations
//!
//! This crate provides shared window and GPU setup, plus the egui overlay
//! that the visualizers draw their plots and control panels into.

pub mod error;
pub mod graphics;
pub mod overlay;

pub use error::GraphicsError;
pub use graphics::*;
pub use overlay::*;

/// Background clear color shared by all visualizers
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};
