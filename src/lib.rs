//! Christofides-style Euclidean TSP solver
//!
//! Computes an approximate tour through a set of 2D points:
//!
//! - rounded Euclidean distance graph
//! - Kruskal minimum spanning tree with union-find
//! - greedy, seeded pairing of odd-degree vertices
//! - Eulerian circuit over MST + matching
//! - shortcutting into a Hamiltonian cycle
//!
//! The matching is greedy rather than a minimum-weight perfect matching, so
//! tours are not guaranteed to be within 3/2 of optimal.
//!
//! # Example
//!
//! ```no_run
//! use christofides_tsp::instance::Instance;
//! use christofides_tsp::heuristics::{ChristofidesSolver, SolverConfig, TourHeuristic};
//!
//! let instance = Instance::from_file("cities.txt").unwrap();
//! let solver = ChristofidesSolver::with_config(SolverConfig { seed: 7, runs: 4 });
//! let solution = solver.solve(&instance).unwrap();
//!
//! println!("Tour length: {}", solution.length);
//! ```

pub mod error;
pub mod graph;
pub mod heuristics;
pub mod instance;
pub mod solution;

pub use error::{Result, TspError};
pub use heuristics::christofides::compute_tour;
pub use instance::{Instance, Point};
pub use solution::Solution;
