//! Swarm Engine
//!
//! Particle swarm search for cheap walks through a [`NetworkModel`](crate::network::NetworkModel).

pub mod convergence_test;
pub mod decode;
pub mod optimizer;
pub mod particle;
#[cfg(feature = "python")]
pub mod py_api;

pub use decode::{decode, decode_component};
pub use optimizer::{OptimizationResult, StopReason, SwarmOptimizer};
pub use particle::Particle;
