use super::error::{Result, RouteError};
use serde::{Deserialize, Serialize};

/// Network layout parameters supplied by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub num_nodes: usize,
    /// Exclusive upper bound for both node coordinates.
    pub max_range: f64,
}

impl NetworkConfig {
    pub fn new(num_nodes: usize, max_range: f64) -> Self {
        NetworkConfig {
            num_nodes,
            max_range,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_nodes < 2 {
            return Err(RouteError::config(format!(
                "num_nodes must be at least 2 (got {})",
                self.num_nodes
            )));
        }
        if !self.max_range.is_finite() || self.max_range <= 0.0 {
            return Err(RouteError::config(format!(
                "max_range must be a positive finite number (got {})",
                self.max_range
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::new(10, 10.0)
    }
}

/// PSO hyperparameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PsoParams {
    /// Inertia weight (w)
    pub inertia: f64,
    /// Attraction toward the particle's own best (c1)
    pub cognitive: f64,
    /// Attraction toward the swarm's best (c2)
    pub social: f64,
}

impl PsoParams {
    pub fn new(inertia: f64, cognitive: f64, social: f64) -> Self {
        PsoParams {
            inertia,
            cognitive,
            social,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::config(format!(
                    "{} must be a non-negative finite number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for PsoParams {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}

/// Swarm optimizer settings.
///
/// `dimension_count`, `lower_bound` and `upper_bound` default to values derived
/// from the network size (N-1, 0 and N-1) when left as `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub swarm_size: usize,
    pub max_iterations: usize,
    pub dimension_count: Option<usize>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub params: PsoParams,
    /// Initial velocities are drawn from `±velocity_init * (upper - lower)`.
    pub velocity_init: f64,
    /// Optional cap on |v|, as a fraction of `upper - lower`.
    pub velocity_clamp: Option<f64>,
    /// Stop once an improving global best moved by no more than this distance.
    pub min_step: Option<f64>,
    /// Stop once an improving global best gained no more than this much cost.
    pub min_func: Option<f64>,
    /// Evaluate particles on the rayon pool.
    pub parallel: bool,
}

impl OptimizerConfig {
    pub fn new(swarm_size: usize, max_iterations: usize) -> Self {
        OptimizerConfig {
            swarm_size,
            max_iterations,
            ..Self::default()
        }
    }

    /// Validate against a network of `node_count` nodes and fill in derived defaults.
    pub fn resolve(&self, node_count: usize) -> Result<SearchSpace> {
        if node_count < 2 {
            return Err(RouteError::config(format!(
                "a route search needs at least 2 nodes (got {})",
                node_count
            )));
        }
        if self.swarm_size < 1 {
            return Err(RouteError::config("swarm_size must be at least 1"));
        }

        let dimensions = self.dimension_count.unwrap_or(node_count - 1);
        if dimensions < 1 {
            return Err(RouteError::config("dimension_count must be at least 1"));
        }

        let lower = self.lower_bound.unwrap_or(0.0);
        let upper = self.upper_bound.unwrap_or((node_count - 1) as f64);
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(RouteError::config(format!(
                "invalid search bounds [{}, {}]",
                lower, upper
            )));
        }

        if !samplable_width(upper - lower) {
            return Err(RouteError::config(format!(
                "search bounds [{}, {}] are too wide to sample",
                lower, upper
            )));
        }

        self.params.validate()?;
        non_negative("velocity_init", Some(self.velocity_init))?;
        let reach = self.velocity_init * (upper - lower);
        if !samplable_width(2.0 * reach) {
            return Err(RouteError::config(format!(
                "velocity_init {} gives an initial velocity range too wide to sample",
                self.velocity_init
            )));
        }
        non_negative("min_step", self.min_step)?;
        non_negative("min_func", self.min_func)?;
        if let Some(clamp) = self.velocity_clamp {
            if !clamp.is_finite() || clamp <= 0.0 {
                return Err(RouteError::config(format!(
                    "velocity_clamp must be a positive finite number (got {})",
                    clamp
                )));
            }
        }

        Ok(SearchSpace {
            dimensions,
            lower,
            upper,
            node_count,
        })
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            swarm_size: 50,
            max_iterations: 100,
            dimension_count: None,
            lower_bound: None,
            upper_bound: None,
            params: PsoParams::default(),
            velocity_init: 0.1,
            velocity_clamp: None,
            min_step: None,
            min_func: None,
            parallel: false,
        }
    }
}

fn non_negative(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(RouteError::config(format!(
            "{} must be a non-negative finite number (got {})",
            name, v
        ))),
        _ => Ok(()),
    }
}

// The uniform sampler rescales the width slightly, so keep headroom below f64::MAX.
fn samplable_width(width: f64) -> bool {
    (2.0 * width).is_finite()
}

/// Resolved, validated bounds of the continuous search space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchSpace {
    pub dimensions: usize,
    pub lower: f64,
    pub upper: f64,
    /// Size of the network the decoded indices must address.
    pub node_count: usize,
}

impl SearchSpace {
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}
