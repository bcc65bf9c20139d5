//! MeshSwarm Core - Swarm-Optimized Routes for Small Wireless Networks
//!
//! Scatters nodes over a square region and searches for a cheap multi-hop
//! walk between them with particle swarm optimization. Drawing is left to
//! the caller: the crate hands back node positions, routes and a
//! [`Scene`](network::Scene) of points and segments.
//!
//! The search is unconstrained: a route is any walk of `N - 1` node indices,
//! repeats included, with no fixed source or destination.
// Python bindings are behind the `python` feature

pub mod core;
pub mod network;
pub mod swarm;

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub use crate::core::{NetworkConfig, OptimizerConfig, PsoParams, Result, RouteError};
pub use network::{render, NetworkModel, PathCost, Point, Scene, Segment};
pub use swarm::{OptimizationResult, StopReason, SwarmOptimizer};

/// Run a seeded swarm search over `model`.
pub fn route(
    model: &NetworkModel,
    config: OptimizerConfig,
    seed: u64,
) -> Result<OptimizationResult> {
    SwarmOptimizer::new(model, config)?.optimize_seeded(seed)
}

/// Initialize tracing for the library.
#[cfg_attr(feature = "python", pyfunction)]
#[cfg_attr(feature = "python", pyo3(signature = (level=None)))]
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Python module initialization
#[cfg(feature = "python")]
#[pymodule]
fn meshswarm(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<swarm::py_api::PyNetwork>()?;
    m.add_function(wrap_pyfunction!(setup_logging, m)?)?;
    Ok(())
}
