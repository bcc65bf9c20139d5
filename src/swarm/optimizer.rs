//! Swarm Optimizer
//!
//! Global-best particle swarm search over continuous candidate vectors.
//! Each candidate is decoded to a walk of node indices and scored by a
//! [`PathCost`] implementation; the swarm minimizes that cost.

use super::decode::decode;
use super::particle::Particle;
use crate::core::{OptimizerConfig, Result, SearchSpace};
use crate::network::PathCost;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    MaxIterations,
    /// The improving global best moved less than `min_step`.
    MinStep,
    /// The improving global best gained less than `min_func`.
    MinFunc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Global best decoded to node indices
    pub best_path: Vec<usize>,
    pub best_position: Vec<f64>,
    pub best_cost: f64,
    /// Update steps performed (0 when only the initial swarm was scored)
    pub iterations: usize,
    /// Global-best cost after initialization and after each iteration
    pub cost_history: Vec<f64>,
    pub stop_reason: StopReason,
}

/// PSO driver bound to one cost function.
///
/// The optimizer itself holds only validated settings; all swarm state lives
/// inside a single [`SwarmOptimizer::optimize`] call.
pub struct SwarmOptimizer<'a, C: PathCost + ?Sized> {
    cost: &'a C,
    config: OptimizerConfig,
    space: SearchSpace,
}

impl<'a, C: PathCost + ?Sized> SwarmOptimizer<'a, C> {
    pub fn new(cost: &'a C, config: OptimizerConfig) -> Result<Self> {
        let space = config.resolve(cost.node_count())?;
        info!(
            "🐝 [SwarmOptimizer] Initialized (swarm={}, iters={}, dims={}, bounds=[{}, {}])",
            config.swarm_size, config.max_iterations, space.dimensions, space.lower, space.upper
        );
        Ok(SwarmOptimizer {
            cost,
            config,
            space,
        })
    }

    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    pub fn optimize_seeded(&self, seed: u64) -> Result<OptimizationResult> {
        self.optimize(&mut StdRng::seed_from_u64(seed))
    }

    /// Run the swarm for up to `max_iterations` update steps.
    ///
    /// All random draws happen on the calling thread in a fixed order, so a
    /// given RNG state yields the same result with or without `parallel`.
    pub fn optimize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<OptimizationResult> {
        let cfg = &self.config;
        let space = &self.space;

        let mut particles: Vec<Particle> = (0..cfg.swarm_size)
            .map(|_| Particle::spawn(space, cfg.velocity_init, rng))
            .collect();

        let costs = self.evaluate(&particles)?;
        let mut best_idx = 0;
        for (i, (particle, &cost)) in particles.iter_mut().zip(&costs).enumerate() {
            particle.update_personal_best(cost);
            if cost < costs[best_idx] {
                best_idx = i;
            }
        }
        let mut best_position = particles[best_idx].best_position.clone();
        let mut best_cost = particles[best_idx].best_cost;
        let mut cost_history = vec![best_cost];
        let mut stop_reason = StopReason::MaxIterations;
        let mut iterations = 0;

        debug!("[SwarmOptimizer] Initial swarm best cost {:.4}", best_cost);

        for iteration in 0..cfg.max_iterations {
            // best_position is only replaced after every particle has moved
            for particle in particles.iter_mut() {
                particle.step(&best_position, &cfg.params, space, cfg.velocity_clamp, rng);
            }

            let costs = self.evaluate(&particles)?;

            let mut improved: Option<usize> = None;
            let mut candidate_cost = best_cost;
            for (i, (particle, &cost)) in particles.iter_mut().zip(&costs).enumerate() {
                particle.update_personal_best(cost);
                if particle.best_cost < candidate_cost {
                    candidate_cost = particle.best_cost;
                    improved = Some(i);
                }
            }

            iterations = iteration + 1;

            let Some(i) = improved else {
                cost_history.push(best_cost);
                continue;
            };

            let moved = euclidean(&particles[i].best_position, &best_position);
            let gain = best_cost - candidate_cost;
            best_position.clone_from(&particles[i].best_position);
            best_cost = candidate_cost;
            cost_history.push(best_cost);

            debug!(
                "[SwarmOptimizer] iter {}: best cost {:.4} (gain {:.3e}, step {:.3e}, mean speed {:.3e})",
                iterations,
                best_cost,
                gain,
                moved,
                mean_speed(&particles)
            );

            if matches!(cfg.min_func, Some(min) if gain <= min) {
                stop_reason = StopReason::MinFunc;
                break;
            }
            if matches!(cfg.min_step, Some(min) if moved <= min) {
                stop_reason = StopReason::MinStep;
                break;
            }
        }

        let best_path = decode(&best_position, space.node_count);
        info!(
            "🏁 [SwarmOptimizer] Done after {} iterations ({:?}): cost={:.4} path={:?}",
            iterations, stop_reason, best_cost, best_path
        );

        Ok(OptimizationResult {
            best_path,
            best_position,
            best_cost,
            iterations,
            cost_history,
            stop_reason,
        })
    }

    fn evaluate(&self, particles: &[Particle]) -> Result<Vec<f64>> {
        let node_count = self.space.node_count;
        let score = |p: &Particle| self.cost.path_cost(&decode(&p.position, node_count));

        if self.config.parallel {
            particles.par_iter().map(score).collect()
        } else {
            particles.iter().map(score).collect()
        }
    }
}

fn mean_speed(particles: &[Particle]) -> f64 {
    if particles.is_empty() {
        return 0.0;
    }
    particles.iter().map(Particle::velocity_magnitude).sum::<f64>() / particles.len() as f64
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
