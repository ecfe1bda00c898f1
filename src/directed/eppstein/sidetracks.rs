//! Sidetrack graph builder and per-vertex arc-heap.
//!
//! A sidetrack is any out-arc of a reachable state that is not its
//! shortest-path-tree arc. Its *telescoped* weight `w + dist[dest] -
//! dist[source]` is always non-negative and is what the path-heap and
//! frontier order on; the original weight is recovered from `graph`
//! itself when a path is reported, since [`super::graph::Arc`] is never
//! mutated in place to hold a telescoped value.
//!
//! States unreachable from `dest` never get an entry here: their
//! sidetracks would never be touched by the enumerator (nothing ever
//! cross-edges into an unreachable state, since sidetracks landing on one
//! are excluded below), so there is nothing to gain by building them.

use std::ops::{Add, Sub};

use super::graph::{Graph, StateId};
use super::spt::ShortestPathTree;

/// One sidetrack out of some state, as seen by the per-vertex arc-heap:
/// the index of the underlying arc in `graph.arcs(state)`, plus its
/// telescoped weight.
#[derive(Clone, Copy, Debug)]
pub(super) struct SidetrackRef<C> {
    pub(super) arc_index: usize,
    pub(super) telescoped: C,
}

/// `H_out(v)` split into its minimum (`root`) and the heap-ordered
/// remainder (`heap`). Heap-building a flat array and then reinterpreting
/// its tail as its own 0-indexed heap does not actually keep the tail
/// heap-ordered, so `root` and `heap` are built independently instead.
pub(super) struct StateSidetracks<C> {
    pub(super) root: Option<SidetrackRef<C>>,
    pub(super) heap: Vec<SidetrackRef<C>>,
}

impl<C> StateSidetracks<C> {
    const fn empty() -> Self {
        Self {
            root: None,
            heap: Vec::new(),
        }
    }
}

/// Build the per-state sidetrack tables for every state reachable to
/// `dest`.
pub(super) fn build<C, D>(
    graph: &Graph<C, D>,
    spt: &ShortestPathTree<C>,
) -> Vec<StateSidetracks<C>>
where
    C: Copy + Ord + Add<Output = C> + Sub<Output = C>,
{
    let n = graph.n();
    let mut tables = Vec::with_capacity(n);
    for v in 0..n {
        let Some(dist_v) = spt.dist[v] else {
            tables.push(StateSidetracks::empty());
            continue;
        };
        let mut refs: Vec<SidetrackRef<C>> = graph
            .arcs(v)
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != spt.spt_arc[v])
            .filter_map(|(i, arc)| {
                let dist_dest = spt.dist[arc.dest]?;
                Some(SidetrackRef {
                    arc_index: i,
                    telescoped: arc.weight + dist_dest - dist_v,
                })
            })
            .collect();

        if refs.is_empty() {
            tables.push(StateSidetracks::empty());
            continue;
        }

        let min_pos = refs
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| r.telescoped)
            .map(|(i, _)| i)
            .expect("refs is non-empty");
        let root = refs.swap_remove(min_pos);
        heap_build(&mut refs);
        tables.push(StateSidetracks {
            root: Some(root),
            heap: refs,
        });
    }
    tables
}

/// Build `entries` into a 0-indexed binary min-heap (on `telescoped`) in
/// place, children of `i` at `2i + 1` and `2i + 2`.
fn heap_build<C: Ord>(entries: &mut [SidetrackRef<C>]) {
    if entries.len() < 2 {
        return;
    }
    for start in (0..entries.len() / 2).rev() {
        sift_down(entries, start);
    }
}

fn sift_down<C: Ord>(entries: &mut [SidetrackRef<C>], mut i: usize) {
    let len = entries.len();
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut smallest = i;
        if left < len && entries[left].telescoped < entries[smallest].telescoped {
            smallest = left;
        }
        if right < len && entries[right].telescoped < entries[smallest].telescoped {
            smallest = right;
        }
        if smallest == i {
            return;
        }
        entries.swap(i, smallest);
        i = smallest;
    }
}
