//! Network Model
//!
//! Fixed set of wireless nodes scattered over a square region, with
//! Euclidean hop distances and path costs.

pub mod render;

use crate::core::{NetworkConfig, Result, RouteError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

pub use render::{render, Scene, Segment};

/// Position of a node in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Anything that can score a discrete path of node indices.
///
/// The swarm optimizer is written against this trait rather than a concrete
/// network so that evaluation can be shared across rayon workers.
pub trait PathCost: Sync {
    fn node_count(&self) -> usize;
    fn path_cost(&self, path: &[usize]) -> Result<f64>;
}

/// Immutable node layout. Node identity is its index.
///
/// Deserialization goes through [`NetworkModel::from_positions`], so a
/// decoded model holds the same invariants as a constructed one.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "NetworkLayout")]
pub struct NetworkModel {
    nodes: Vec<Point>,
    max_range: f64,
}

/// Unchecked wire form of a [`NetworkModel`].
#[derive(Deserialize)]
struct NetworkLayout {
    nodes: Vec<Point>,
    max_range: f64,
}

impl TryFrom<NetworkLayout> for NetworkModel {
    type Error = RouteError;

    fn try_from(layout: NetworkLayout) -> Result<Self> {
        NetworkModel::from_positions(layout.nodes, layout.max_range)
    }
}

impl NetworkModel {
    /// Scatter `config.num_nodes` nodes uniformly over `[0, max_range)^2`.
    pub fn new<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let nodes = (0..config.num_nodes)
            .map(|_| {
                Point::new(
                    rng.gen_range(0.0..config.max_range),
                    rng.gen_range(0.0..config.max_range),
                )
            })
            .collect();

        info!(
            "📡 [NetworkModel] Placed {} nodes in a {}x{} region",
            config.num_nodes, config.max_range, config.max_range
        );

        Ok(NetworkModel {
            nodes,
            max_range: config.max_range,
        })
    }

    pub fn with_seed(num_nodes: usize, max_range: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&NetworkConfig::new(num_nodes, max_range), &mut rng)
    }

    /// Build a network from known positions, each inside `[0, max_range)`.
    pub fn from_positions(nodes: Vec<Point>, max_range: f64) -> Result<Self> {
        NetworkConfig::new(nodes.len(), max_range).validate()?;

        if let Some((idx, p)) = nodes.iter().enumerate().find(|(_, p)| {
            !(p.x.is_finite() && p.y.is_finite())
                || p.x < 0.0
                || p.y < 0.0
                || p.x >= max_range
                || p.y >= max_range
        }) {
            return Err(RouteError::config(format!(
                "node {} at ({}, {}) lies outside [0, {})",
                idx, p.x, p.y, max_range
            )));
        }

        Ok(NetworkModel { nodes, max_range })
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    pub fn node(&self, index: usize) -> Result<&Point> {
        self.nodes.get(index).ok_or(RouteError::IndexRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Euclidean distance between nodes `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64> {
        Ok(self.node(i)?.distance_to(self.node(j)?))
    }

    /// Sum of hop distances along `path`. Single-node and empty paths cost 0.
    ///
    /// Indices are checked, never clamped.
    pub fn path_cost(&self, path: &[usize]) -> Result<f64> {
        if let [only] = path {
            self.node(*only)?;
            return Ok(0.0);
        }
        path.windows(2)
            .map(|hop| self.distance(hop[0], hop[1]))
            .sum()
    }

    /// Domain score of a path: higher is better, the negated cost.
    pub fn reliability(&self, path: &[usize]) -> Result<f64> {
        Ok(-self.path_cost(path)?)
    }
}

impl PathCost for NetworkModel {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn path_cost(&self, path: &[usize]) -> Result<f64> {
        NetworkModel::path_cost(self, path)
    }
}
