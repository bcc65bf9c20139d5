//! Particle state for the route swarm.

use crate::core::{PsoParams, SearchSpace};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Particle in the swarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Current candidate vector
    pub position: Vec<f64>,
    /// Velocity vector
    pub velocity: Vec<f64>,
    /// Personal best position
    pub best_position: Vec<f64>,
    /// Cost at `best_position`
    pub best_cost: f64,
}

impl Particle {
    /// Uniform position in bounds, velocity within `±velocity_init * span`.
    pub fn spawn<R: Rng + ?Sized>(space: &SearchSpace, velocity_init: f64, rng: &mut R) -> Self {
        let reach = velocity_init * space.span();
        let position: Vec<f64> = (0..space.dimensions)
            .map(|_| uniform(rng, space.lower, space.upper))
            .collect();
        let velocity = (0..space.dimensions)
            .map(|_| uniform(rng, -reach, reach))
            .collect();

        Particle {
            best_position: position.clone(),
            position,
            velocity,
            best_cost: f64::INFINITY,
        }
    }

    /// Record `cost` of the current position; keeps the old best on ties.
    pub fn update_personal_best(&mut self, cost: f64) -> bool {
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }

    /// `v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)`, then `x += v` clamped to bounds.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        global_best: &[f64],
        params: &PsoParams,
        space: &SearchSpace,
        velocity_clamp: Option<f64>,
        rng: &mut R,
    ) {
        let v_max = velocity_clamp.map(|c| c * space.span());

        for i in 0..self.position.len() {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();

            let cognitive = params.cognitive * r1 * (self.best_position[i] - self.position[i]);
            let social = params.social * r2 * (global_best[i] - self.position[i]);

            let mut v = params.inertia * self.velocity[i] + cognitive + social;
            if let Some(v_max) = v_max {
                v = v.clamp(-v_max, v_max);
            }
            self.velocity[i] = v;

            self.position[i] = (self.position[i] + v).clamp(space.lower, space.upper);
        }
    }

    /// Mean absolute velocity component
    pub fn velocity_magnitude(&self) -> f64 {
        if self.velocity.is_empty() {
            return 0.0;
        }
        self.velocity.iter().map(|v| v.abs()).sum::<f64>() / self.velocity.len() as f64
    }
}

// Zero-width bounds collapse to their lower end.
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space() -> SearchSpace {
        SearchSpace {
            dimensions: 4,
            lower: 0.0,
            upper: 4.0,
            node_count: 5,
        }
    }

    #[test]
    fn spawn_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = Particle::spawn(&space(), 0.1, &mut rng);
            assert_eq!(p.position.len(), 4);
            assert!(p.position.iter().all(|&x| (0.0..=4.0).contains(&x)));
            assert!(p.velocity.iter().all(|&v| v.abs() <= 0.4));
            assert_eq!(p.best_position, p.position);
            assert!(p.best_cost.is_infinite());
        }
    }

    #[test]
    fn zero_velocity_init_gives_still_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::spawn(&space(), 0.0, &mut rng);
        assert!(p.velocity.iter().all(|&v| v == 0.0));
        assert_eq!(p.velocity_magnitude(), 0.0);
    }

    #[test]
    fn personal_best_requires_strict_improvement() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Particle::spawn(&space(), 0.1, &mut rng);
        assert!(p.update_personal_best(3.0));
        let kept = p.best_position.clone();

        p.position = vec![1.0; 4];
        assert!(!p.update_personal_best(3.0));
        assert_eq!(p.best_position, kept);

        assert!(p.update_personal_best(2.0));
        assert_eq!(p.best_position, vec![1.0; 4]);
        assert_eq!(p.best_cost, 2.0);
    }

    #[test]
    fn step_keeps_position_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut p = Particle::spawn(&space(), 0.1, &mut rng);
        p.velocity = vec![50.0, -50.0, 50.0, -50.0];
        let params = PsoParams::new(1.0, 0.0, 0.0);

        p.step(&[0.0; 4], &params, &space(), None, &mut rng);

        assert_eq!(p.position, vec![4.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn velocity_clamp_caps_each_component() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut p = Particle::spawn(&space(), 0.1, &mut rng);
        p.velocity = vec![3.0, -3.0, 1.5, -0.8];
        let params = PsoParams::new(1.0, 0.0, 0.0);

        p.step(&[0.0; 4], &params, &space(), Some(0.25), &mut rng);

        assert!(p.velocity.iter().all(|&v| v.abs() <= 1.0));
        assert_eq!(p.velocity[3], -0.8);
    }

    #[test]
    fn particle_at_both_bests_with_no_inertia_stays_put() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::spawn(&space(), 0.1, &mut rng);
        let here = p.position.clone();
        p.best_position = here.clone();
        let params = PsoParams::new(0.0, 0.5, 0.5);

        p.step(&here, &params, &space(), None, &mut rng);

        assert_eq!(p.position, here);
        assert!(p.velocity.iter().all(|&v| v == 0.0));
    }
}
