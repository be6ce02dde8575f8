//! Heuristics module for Euclidean TSP.
//!
//! This module exports the Christofides pipeline and the nearest-neighbour
//! baseline used for comparison.

pub mod christofides;
pub mod nearest_neighbor;
pub mod shortcut;

pub use christofides::*;
pub use nearest_neighbor::*;
pub use shortcut::*;

use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;

pub trait TourHeuristic {
    fn solve(&self, instance: &Instance) -> Result<Solution>;
    fn name(&self) -> &str;
}
