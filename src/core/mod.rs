//! Core building blocks: error taxonomy and configuration.

pub mod config;
pub mod error;

pub use config::{NetworkConfig, OptimizerConfig, PsoParams, SearchSpace};
pub use error::{Result, RouteError};
