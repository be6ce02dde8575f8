//! Odd-degree vertex detection and greedy pairing.
//!
//! The pairing is a randomized nearest-neighbour approximation of a
//! minimum-weight perfect matching, not the exact blossom algorithm, so the
//! resulting tour carries no 1.5-approximation guarantee.

use super::mst::SpanningTree;
use super::{DistanceGraph, Edge, Weight};
use crate::error::{Result, TspError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Vertices of odd degree in `tree`, in ascending order.
pub fn odd_vertices(tree: &SpanningTree, n: usize) -> Vec<usize> {
    tree.degrees(n)
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| d % 2 == 1)
        .map(|(v, _)| v)
        .collect()
}

/// Greedily pair up `odd` after a seeded shuffle.
///
/// Repeatedly pops the last vertex `v` and pairs it with the remaining vertex
/// `u` of smallest `weight(v, u)`; the first one in scan order wins ties.
/// Returned edges are oriented `(v, u)`.
pub fn greedy_matching(
    graph: &DistanceGraph,
    odd: &[usize],
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Edge>> {
    if odd.len() % 2 != 0 {
        return Err(TspError::OddVertexCount(odd.len()));
    }

    let mut remaining = odd.to_vec();
    remaining.shuffle(rng);

    let mut pairs = Vec::with_capacity(remaining.len() / 2);

    while let Some(v) = remaining.pop() {
        let mut closest = None;
        let mut best = Weight::MAX;

        for (pos, &u) in remaining.iter().enumerate() {
            let w = graph.weight(v, u);
            if closest.is_none() || w < best {
                best = w;
                closest = Some(pos);
            }
        }

        let pos = closest.ok_or(TspError::OddVertexCount(odd.len()))?;
        let u = remaining.remove(pos);
        pairs.push(Edge::new(v, u, best));
    }

    log::debug!(
        "matching: {} odd vertices, {} pairs, weight {}",
        odd.len(),
        pairs.len(),
        pairs.iter().map(|e| e.weight).sum::<Weight>()
    );

    Ok(pairs)
}
