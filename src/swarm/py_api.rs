use super::SwarmOptimizer;
use crate::core::{OptimizerConfig, RouteError};
use crate::network::{render, NetworkModel, Point};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

impl From<RouteError> for PyErr {
    fn from(err: RouteError) -> PyErr {
        match err {
            RouteError::Configuration(_) => PyValueError::new_err(err.to_string()),
            RouteError::IndexRange { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Python handle on a node network and its route search.
#[pyclass(name = "Network")]
pub struct PyNetwork {
    model: NetworkModel,
}

#[pymethods]
impl PyNetwork {
    #[new]
    #[pyo3(signature = (num_nodes=10, max_range=10.0, seed=None))]
    pub fn new(num_nodes: usize, max_range: f64, seed: Option<u64>) -> PyResult<Self> {
        let config = crate::core::NetworkConfig::new(num_nodes, max_range);
        let model = NetworkModel::new(&config, &mut rng_for(seed))?;
        Ok(Self { model })
    }

    /// Build from explicit `(x, y)` pairs
    #[staticmethod]
    pub fn from_positions(positions: Vec<(f64, f64)>, max_range: f64) -> PyResult<Self> {
        let nodes = positions.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        Ok(Self {
            model: NetworkModel::from_positions(nodes, max_range)?,
        })
    }

    pub fn nodes(&self) -> Vec<(f64, f64)> {
        self.model.nodes().iter().map(|p| (p.x, p.y)).collect()
    }

    pub fn distance(&self, i: usize, j: usize) -> PyResult<f64> {
        Ok(self.model.distance(i, j)?)
    }

    pub fn path_cost(&self, path: Vec<usize>) -> PyResult<f64> {
        Ok(self.model.path_cost(&path)?)
    }

    pub fn reliability(&self, path: Vec<usize>) -> PyResult<f64> {
        Ok(self.model.reliability(&path)?)
    }

    /// Search for a low-cost walk and return its node indices
    #[pyo3(signature = (swarm_size=50, max_iterations=100, seed=None, parallel=false))]
    pub fn optimize(
        &self,
        swarm_size: usize,
        max_iterations: usize,
        seed: Option<u64>,
        parallel: bool,
    ) -> PyResult<Vec<usize>> {
        let config = OptimizerConfig {
            parallel,
            ..OptimizerConfig::new(swarm_size, max_iterations)
        };
        let result = SwarmOptimizer::new(&self.model, config)?.optimize(&mut rng_for(seed))?;
        Ok(result.best_path)
    }

    /// Points and segments as JSON, for plotting on the Python side
    #[pyo3(signature = (path=None))]
    pub fn render_json(&self, path: Option<Vec<usize>>) -> PyResult<String> {
        Ok(render(&self.model, path.as_deref())?.to_json())
    }

    pub fn __len__(&self) -> usize {
        self.model.node_count()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "Network(nodes={}, max_range={})",
            self.model.node_count(),
            self.model.max_range()
        )
    }
}
