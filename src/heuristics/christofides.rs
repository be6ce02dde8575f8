//! Christofides-style tour construction.
//!
//! MST (Kruskal) → odd-degree vertices → greedy randomized matching →
//! Eulerian circuit → shortcut. The matching step is greedy, so the classical
//! 3/2 bound does not hold; different seeds can give different lengths on the
//! same instance.

use super::shortcut::shortcut;
use super::TourHeuristic;
use crate::error::Result;
use crate::graph::euler::eulerian_walk;
use crate::graph::matching::{greedy_matching, odd_vertices};
use crate::graph::mst::kruskal;
use crate::graph::Weight;
use crate::instance::{Instance, Point};
use crate::solution::Solution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Configuration for the Christofides solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Seed for the odd-vertex shuffle
    pub seed: u64,
    /// Independent runs with seeds `seed, seed + 1, ...`; the shortest tour wins
    pub runs: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { seed: 42, runs: 1 }
    }
}

pub struct ChristofidesSolver {
    pub config: SolverConfig,
}

impl ChristofidesSolver {
    pub fn new() -> Self {
        ChristofidesSolver {
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(config: SolverConfig) -> Self {
        ChristofidesSolver { config }
    }

    /// Run the whole pipeline once with the given seed.
    pub fn solve_with_seed(&self, instance: &Instance, seed: u64) -> Result<Solution> {
        let start = std::time::Instant::now();
        let n = instance.dimension();

        if n == 0 {
            log::warn!("instance {} has no points, returning an empty tour", instance.name);
            let mut solution = Solution::from_tour(instance, Vec::new(), 0, 0, self.name());
            solution.seed = seed;
            return Ok(solution);
        }

        let graph = &instance.graph;
        let tree = kruskal(graph);

        let odd = odd_vertices(&tree, n);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let matching = greedy_matching(graph, &odd, &mut rng)?;

        let walk = eulerian_walk(n, &tree.edges, &matching)?;
        let tour = shortcut(&walk, graph);

        let mut solution = Solution::from_tour(
            instance,
            tour.vertices,
            tour.length,
            tour.open_length,
            self.name(),
        );
        solution.mst_weight = tree.total_weight();
        solution.matching_weight = matching.iter().map(|e| e.weight).sum::<Weight>();
        solution.odd_vertices = odd.len();
        solution.seed = seed;
        solution.computation_time = start.elapsed().as_secs_f64();

        log::debug!("seed {}: tour length {}", seed, solution.length);

        Ok(solution)
    }
}

impl Default for ChristofidesSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TourHeuristic for ChristofidesSolver {
    fn solve(&self, instance: &Instance) -> Result<Solution> {
        let start = std::time::Instant::now();
        let runs = self.config.runs.max(1);

        log::info!(
            "solving {} (n={}) with {} run(s) from seed {}",
            instance.name,
            instance.dimension(),
            runs,
            self.config.seed
        );

        let mut best = self.solve_with_seed(instance, self.config.seed)?;
        for r in 1..runs {
            let seed = self.config.seed.wrapping_add(r as u64);
            let candidate = self.solve_with_seed(instance, seed)?;
            if candidate.length < best.length {
                best = candidate;
            }
        }

        best.computation_time = start.elapsed().as_secs_f64();
        log::info!("best tour length {} (seed {})", best.length, best.seed);

        Ok(best)
    }

    fn name(&self) -> &str {
        "Christofides"
    }
}

/// Solve `points` once and return the closed tour (indices) and its length.
///
/// An empty point set gives an empty tour of length 0; a single point gives
/// `[0, 0]`.
pub fn compute_tour(points: &[Point], seed: u64) -> Result<(Vec<usize>, u64)> {
    let instance = Instance::new("", points.to_vec());
    let solution = ChristofidesSolver::new().solve_with_seed(&instance, seed)?;
    Ok((solution.tour, solution.length))
}
