//! Johnson's algorithm: one Bellman-Ford pass from a virtual source yields a
//! potential per vertex (or proves a negative cycle), the potentials reweigh
//! every arc non-negatively, and a Dijkstra run per source on the reweighted
//! graph produces distances that are corrected back to the original weights.

use crate::all_pairs::DiGraph;
use crate::utils::NumIndexVec;
use crate::Vertex;
use fixedbitset::FixedBitSet;
use num_traits::bounds::Bounded;
use num_traits::{NumOps, Zero};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// All-pairs result. A row holds the distances from one source vertex;
/// `None` marks an unreachable target.
pub struct DistanceMatrix<W> {
    rows: Vec<Vec<Option<W>>>,
}

impl<W> DistanceMatrix<W> {
    pub fn num_nodes(&self) -> Vertex {
        self.rows.len() as Vertex
    }

    pub fn row(&self, source: Vertex) -> &[Option<W>] {
        &self.rows[source as usize]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<W>]> {
        self.rows.iter().map(|row| row.as_slice())
    }
}

/// Bellman-Ford from a virtual source with a zero-weight arc to every real
/// vertex. The virtual source stays a logical overlay: its potential is the
/// constant zero and its arcs are relaxed each round without ever being
/// inserted into the graph.
///
/// Returns `false` if a relaxation still succeeds on the final round, i.e.
/// the graph contains a negative-weight cycle; `pot` holds the finalized
/// potentials otherwise.
pub fn vertex_potentials<W>(graph: &DiGraph<W>, pot: &mut NumIndexVec<W>) -> bool
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    let inf = W::max_value();
    pot.fill(inf);

    // V real vertices plus the virtual one: V rounds to converge, one more
    // that only answers whether anything still changes.
    let rounds = graph.num_nodes() as usize + 1;
    let mut changed = false;
    for _ in 0..rounds {
        changed = false;
        for v in 0..graph.num_nodes() {
            if pot[v] > W::zero() {
                pot[v] = W::zero();
                changed = true;
            }
        }
        for arc in graph.iter_arcs() {
            // guard before adding: arithmetic on the sentinel overflows
            if pot[arc.from] < inf && pot[arc.from] + arc.w < pot[arc.to] {
                pot[arc.to] = pot[arc.from] + arc.w;
                changed = true;
            }
        }
    }

    debug_assert!(
        changed || pot.iter().all(|p| *p < inf),
        "virtual source reaches every vertex, potentials must be finite"
    );

    !changed
}

/// Rewrites every arc weight in place as `w + pot[from] - pot[to]`. The
/// potentials satisfy the triangle inequality on every arc, so no weight is
/// negative afterwards.
pub fn reweigh<W>(graph: &mut DiGraph<W>, pot: &NumIndexVec<W>)
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    for arc in graph.iter_arcs_mut() {
        arc.w = pot[arc.from] - pot[arc.to] + arc.w;
    }
}

/// Binary-heap Dijkstra over non-negative arc weights. `dist` is reset to the
/// unreachable sentinel and filled with the shortest reweighted distance from
/// `source` to every vertex. Stale heap entries are skipped when popped
/// instead of being removed eagerly.
pub fn dijkstra<W>(graph: &DiGraph<W>, source: Vertex, dist: &mut NumIndexVec<W>)
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    dist.fill(W::max_value());
    dist[source] = W::zero();

    let mut settled = FixedBitSet::with_capacity(graph.num_nodes() as usize);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((W::zero(), source)));

    while let Some(Reverse((weight, from))) = heap.pop() {
        if settled.contains(from as usize) || dist[from] < weight {
            continue;
        }
        settled.insert(from as usize);

        for arc in graph.iter_outgoing_arcs(from) {
            let candidate = weight + arc.w;
            if candidate < dist[arc.to] {
                dist[arc.to] = candidate;
                heap.push(Reverse((candidate, arc.to)));
            }
        }
    }
}

fn source_row<W>(graph: &DiGraph<W>, pot: &NumIndexVec<W>, source: Vertex) -> Vec<Option<W>>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    let mut dist = num_index_vec![W::zero(); graph.num_nodes()];
    dijkstra(graph, source, &mut dist);

    (0..graph.num_nodes())
        .map(|to| {
            if dist[to] < W::max_value() {
                // undo the reweighing on the finite entries
                Some(dist[to] - pot[source] + pot[to])
            } else {
                None
            }
        })
        .collect()
}

/// Runs the full pipeline on an owned graph, consuming it (the reweighing
/// mutates the arc weights). Returns `None` if a negative cycle exists; no
/// distances are produced in that case.
#[cfg(not(feature = "parallel"))]
pub fn solve<W>(mut graph: DiGraph<W>) -> Option<DistanceMatrix<W>>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord,
{
    let mut pot = num_index_vec![W::zero(); graph.num_nodes()];
    if !vertex_potentials(&graph, &mut pot) {
        return None;
    }
    reweigh(&mut graph, &pot);

    let rows = (0..graph.num_nodes())
        .map(|source| source_row(&graph, &pot, source))
        .collect();
    Some(DistanceMatrix { rows })
}

/// Runs the full pipeline on an owned graph, consuming it (the reweighing
/// mutates the arc weights). Returns `None` if a negative cycle exists; no
/// distances are produced in that case.
///
/// The per-source runs only read the graph and the potentials, so they fan
/// out across the rayon pool; the printed matrix is identical to the
/// sequential build.
#[cfg(feature = "parallel")]
pub fn solve<W>(mut graph: DiGraph<W>) -> Option<DistanceMatrix<W>>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd + Ord + Send + Sync,
{
    use rayon::prelude::*;

    let mut pot = num_index_vec![W::zero(); graph.num_nodes()];
    if !vertex_potentials(&graph, &mut pot) {
        return None;
    }
    reweigh(&mut graph, &pot);

    let rows = (0..graph.num_nodes())
        .into_par_iter()
        .map(|source| source_row(&graph, &pot, source))
        .collect();
    Some(DistanceMatrix { rows })
}
