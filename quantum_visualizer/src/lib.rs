//! Quantum Wavefunction Explorer
//!
//! Plots simplified stationary states of two textbook potentials together
//! with their probability densities:
//!
//! - **Infinite Square Well**: sine modes vanishing at the walls
//! - **Harmonic Oscillator**: Gaussian-weighted Hermite functions for the
//!   lowest three levels, a windowed sine approximation above that
//!
//! [`sampler`] holds the pure numeric core; the other modules are the egui
//! presentation around it.

pub mod sampler;
pub mod config;

pub mod equations_ui;
pub mod explorer;
pub mod plot;

pub use config::ExplorerConfig;
pub use explorer::{Explorer, KeyAction};
pub use sampler::{generate, PotentialKind, QuantumNumber, Sample, Wavefunction};
