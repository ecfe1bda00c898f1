//! Compute the `k` lowest-cost paths between two states of a directed,
//! non-negatively weighted graph using [Eppstein's
//! algorithm](https://en.wikipedia.org/wiki/K_shortest_path_routing#Eppstein's_algorithm),
//! via sidetracks and persistent path-heaps.
//!
//! Where [`super::yen`] finds `k` shortest *loopless* paths by repeated
//! single-source relaxation (`O(k * n * (m + n log n))`), this module
//! finds the `k` shortest paths allowing repeated states, in
//! `O(m + n log n + k log k)`: one reverse shortest-path-tree
//! computation, plus `O(k log k)` best-first heap work regardless of
//! graph size. Pick this one once `k` or the graph gets large and
//! loopless-ness is not required; pick [`super::yen`] when it is, or when
//! all you have is a successor closure rather than an explicit [`Graph`].
//!
//! The algorithm in one pass: build the shortest-path tree (SPT) toward
//! `dest` ([`spt`]); every other out-arc of every state is a *sidetrack*,
//! whose *telescoped* weight is its extra cost over the shortest path
//! ([`sidetracks`]); fold each state's cheapest sidetrack into its
//! SPT-parent's persistent balanced min-heap, giving every state a
//! min-heap of every sidetrack reachable on its way to `dest`
//! ([`path_heap`]); then best-first search the implicit graph of
//! positions in these heaps, where popping the next frontier entry in
//! cost order corresponds exactly to emitting the next-cheapest path
//! ([`engine`]).

mod engine;
mod error;
mod graph;
mod path_heap;
mod sidetracks;
mod spt;
mod visitor;

use std::ops::{Add, Sub};

pub use error::Error;
pub use graph::{Arc, Graph, StateId};
pub use visitor::{BestPathsVisitor, Path, PathCollector};

/// Enumerate the `k` lowest-cost `source -> dest` paths of `graph` in
/// ascending cost order, reporting each through `visitor`.
///
/// Returns the number of paths actually emitted, which is `min(k, number
/// of distinct source -> dest paths)`. Paths may revisit states (this is
/// Eppstein's algorithm, not a loopless variant); if that many distinct
/// paths do not exist, fewer than `k` are emitted and `Ok` still carries
/// however many were found.
///
/// # Errors
///
/// Returns [`Error::InvalidK`], [`Error::EmptyGraph`],
/// [`Error::SourceOutOfRange`] or [`Error::DestOutOfRange`] if the
/// corresponding precondition is violated, before any work is done and
/// before `visitor` is called at all. Returns [`Error::Allocation`] if
/// the path-heap arena fails to grow mid-enumeration; any paths already
/// delivered to `visitor` before that point remain valid.
///
/// # Example
///
/// ```
/// use kshortest::prelude::{best_paths, Arc, Graph, PathCollector};
///
/// let g = Graph::new(vec![
///     vec![Arc { source: 0, dest: 1, weight: 1, data: () }],
///     vec![Arc { source: 1, dest: 2, weight: 2, data: () }],
///     vec![],
/// ]);
/// let mut collector = PathCollector::default();
/// let emitted = best_paths(&g, 0, 2, 5, &mut collector).unwrap();
/// assert_eq!(emitted, 1);
/// assert_eq!(collector.paths[0].cost, 3);
/// ```
pub fn best_paths<C, D, V>(
    graph: &Graph<C, D>,
    source: StateId,
    dest: StateId,
    k: usize,
    visitor: &mut V,
) -> Result<usize, Error>
where
    C: Copy + Ord + Add<Output = C> + Sub<Output = C> + num_traits::Zero,
    D: Copy,
    V: BestPathsVisitor<C, D>,
{
    if k == 0 {
        return Err(Error::InvalidK);
    }
    if graph.n() == 0 {
        return Err(Error::EmptyGraph);
    }
    if source >= graph.n() {
        return Err(Error::SourceOutOfRange {
            source,
            n: graph.n(),
        });
    }
    if dest >= graph.n() {
        return Err(Error::DestOutOfRange { dest, n: graph.n() });
    }

    let spt = spt::ShortestPathTree::compute(graph, dest, num_traits::Zero::zero());

    let mut children: Vec<Vec<StateId>> = vec![Vec::new(); graph.n()];
    let mut parent: Vec<Option<StateId>> = vec![None; graph.n()];
    for v in 0..graph.n() {
        if v == dest {
            continue;
        }
        if let Some(arc_index) = spt.spt_arc[v] {
            let p = graph.arcs(v)[arc_index].dest;
            children[p].push(v);
            parent[v] = Some(p);
        }
    }

    let sidetracks = sidetracks::build(graph, &spt);

    let mut arena = path_heap::PathHeapArena::new();
    let path_graph = path_heap::build(graph, dest, &children, &parent, &sidetracks, &mut arena)?;

    let ctx = engine::Context {
        graph,
        spt,
        sidetracks,
        arena,
        path_graph,
    };

    Ok(engine::run(&ctx, source, dest, k, visitor))
}
