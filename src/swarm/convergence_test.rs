//! End-to-end route search scenarios.
//!
//! Quality sweep: cargo test --release route_quality_sweep -- --nocapture --ignored

#[cfg(test)]
mod tests {
    use crate::core::{NetworkConfig, OptimizerConfig, RouteError};
    use crate::network::{render, NetworkModel, Point};
    use crate::swarm::{decode, StopReason, SwarmOptimizer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn seeded_run(seed: u64) -> (Vec<usize>, f64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let net = NetworkModel::new(&NetworkConfig::new(5, 10.0), &mut rng).unwrap();
        let opt = SwarmOptimizer::new(&net, OptimizerConfig::new(10, 20)).unwrap();
        let result = opt.optimize(&mut rng).unwrap();
        (result.best_path, result.best_cost)
    }

    #[test]
    fn same_seed_same_route() {
        let first = seeded_run(2718);
        let second = seeded_run(2718);
        assert_eq!(first, second);
        assert_eq!(first.0.len(), 4);
    }

    #[test]
    fn pythagorean_pair() {
        let net =
            NetworkModel::from_positions(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)], 10.0)
                .unwrap();
        assert!((net.distance(0, 1).unwrap() - 5.0).abs() < 1e-12);
        assert!((net.path_cost(&[0, 1]).unwrap() - 5.0).abs() < 1e-12);

        // One search dimension means a one-stop walk, which costs nothing.
        let opt = SwarmOptimizer::new(&net, OptimizerConfig::new(10, 20)).unwrap();
        assert_eq!(opt.space().dimensions, 1);
        let result = opt.optimize_seeded(1).unwrap();
        assert_eq!(result.best_cost, 0.0);
        assert!(result.best_path == vec![0] || result.best_path == vec![1]);
    }

    #[test]
    fn error_scenarios() {
        assert!(matches!(
            NetworkModel::with_seed(1, 10.0, 0),
            Err(RouteError::Configuration(_))
        ));
        let net = NetworkModel::with_seed(3, 10.0, 0).unwrap();
        assert!(matches!(
            net.distance(0, 5),
            Err(RouteError::IndexRange { index: 5, len: 3 })
        ));
    }

    #[test]
    fn optimized_route_renders() {
        let net = NetworkModel::with_seed(8, 12.0, 31).unwrap();
        let result = SwarmOptimizer::new(&net, OptimizerConfig::default())
            .unwrap()
            .optimize_seeded(31)
            .unwrap();
        let scene = render(&net, Some(&result.best_path)).unwrap();
        assert_eq!(scene.points.len(), 8);
        assert_eq!(scene.segments.len(), result.best_path.len() - 1);
    }

    #[test]
    fn search_beats_the_initial_swarm_or_matches_it() {
        let net = NetworkModel::with_seed(15, 20.0, 4).unwrap();
        let result = SwarmOptimizer::new(&net, OptimizerConfig::default())
            .unwrap()
            .optimize_seeded(4)
            .unwrap();
        assert!(result.best_cost <= result.cost_history[0]);
        assert_eq!(result.stop_reason, StopReason::MaxIterations);
        assert_eq!(decode(&result.best_position, 15), result.best_path);
    }

    /// Sweeps network sizes and seeds and reports how close the swarm gets to
    /// the zero-cost walk (staying on one node), which is the true optimum of
    /// the unconstrained search.
    #[test]
    #[ignore]
    fn route_quality_sweep() {
        let sep = "=".repeat(80);
        println!("\n{}", sep);
        println!("  ROUTE QUALITY SWEEP (swarm=50, iters=100)");
        println!("{}\n", sep);

        for n in [5usize, 10, 15, 20] {
            let t0 = Instant::now();
            let mut zero_hits = 0;
            let mut total = 0.0;
            for seed in 0..20u64 {
                let net = NetworkModel::with_seed(n, 10.0, seed).unwrap();
                let result = SwarmOptimizer::new(&net, OptimizerConfig::default())
                    .unwrap()
                    .optimize_seeded(seed)
                    .unwrap();
                if result.best_cost == 0.0 {
                    zero_hits += 1;
                }
                total += result.best_cost;
            }
            println!(
                "  N={:>2}  mean cost {:>7.3}  zero-cost walks {:>2}/20  ({:?})",
                n,
                total / 20.0,
                zero_hits,
                t0.elapsed()
            );
        }
        println!("\n{}", sep);
    }
}
