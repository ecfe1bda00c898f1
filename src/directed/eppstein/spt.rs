//! Single-destination shortest-path tree, computed by running Dijkstra
//! backwards from `dest` over the graph's reverse adjacency.
//!
//! Unlike [`super::super::dijkstra`], which is generic over an opaque
//! successor closure, this solver needs to recover *which literal out-arc*
//! of each state realizes its shortest path to `dest` (the sidetrack
//! builder in [`super::sidetracks`] needs that arc index to exclude it), so
//! it works directly against [`Graph`] and keeps arc indices throughout
//! rather than going through a closure.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

use super::graph::{Graph, StateId};

/// Shortest-path tree toward a single destination.
///
/// For every state `v` with `dist[v].is_some()`, `spt_arc[v]` is either
/// `None` (only possible for `v == dest`, the tree's root) or the index,
/// within `graph.arcs(v)`, of the out-arc that is the first step of a
/// cheapest `v -> dest` path. States with no path to `dest` carry `dist[v]
/// == None` and `spt_arc[v] == None`.
pub(super) struct ShortestPathTree<C> {
    pub(super) dist: Vec<Option<C>>,
    pub(super) spt_arc: Vec<Option<usize>>,
}

impl<C> ShortestPathTree<C>
where
    C: Copy + Ord + Add<Output = C>,
{
    /// Compute the shortest-path tree rooted at `dest` by running Dijkstra
    /// over the reverse adjacency of `graph`, starting at `dest`.
    pub(super) fn compute<D>(graph: &Graph<C, D>, dest: StateId, zero: C) -> Self {
        let n = graph.n();
        // reverse_adj[t] holds (v, arc_index, weight) for every arc
        // graph.arcs(v)[arc_index] whose dest is t.
        let mut reverse_adj: Vec<Vec<(StateId, usize, C)>> = vec![Vec::new(); n];
        for v in 0..n {
            for (i, arc) in graph.arcs(v).iter().enumerate() {
                reverse_adj[arc.dest].push((v, i, arc.weight));
            }
        }

        let mut dist: Vec<Option<C>> = vec![None; n];
        let mut spt_arc: Vec<Option<usize>> = vec![None; n];
        let mut to_see = BinaryHeap::new();
        dist[dest] = Some(zero);
        to_see.push(SmallestHolder {
            cost: zero,
            state: dest,
        });
        while let Some(SmallestHolder { cost, state }) = to_see.pop() {
            if dist[state].is_some_and(|d| cost > d) {
                continue;
            }
            for &(v, arc_index, weight) in &reverse_adj[state] {
                let new_cost = cost + weight;
                if dist[v].is_none_or(|d| new_cost < d) {
                    dist[v] = Some(new_cost);
                    spt_arc[v] = Some(arc_index);
                    to_see.push(SmallestHolder {
                        cost: new_cost,
                        state: v,
                    });
                }
            }
        }
        Self { dist, spt_arc }
    }
}

struct SmallestHolder<C> {
    cost: C,
    state: StateId,
}

impl<C: PartialEq> PartialEq for SmallestHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<C: PartialEq> Eq for SmallestHolder<C> {}

impl<C: Ord> PartialOrd for SmallestHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for SmallestHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directed::eppstein::graph::Arc;

    fn arc(source: StateId, dest: StateId, weight: i64) -> Arc<i64, ()> {
        Arc {
            source,
            dest,
            weight,
            data: (),
        }
    }

    #[test]
    fn linear_chain() {
        let g = Graph::new(vec![vec![arc(0, 1, 1)], vec![arc(1, 2, 2)], vec![]]);
        let spt = ShortestPathTree::compute(&g, 2, 0);
        assert_eq!(spt.dist, vec![Some(3), Some(2), Some(0)]);
        assert_eq!(spt.spt_arc, vec![Some(0), Some(0), None]);
    }

    #[test]
    fn unreachable_state() {
        let g = Graph::new(vec![vec![arc(0, 1, 1)], vec![], vec![]]);
        let spt = ShortestPathTree::compute(&g, 2, 0);
        assert_eq!(spt.dist, vec![None, None, Some(0)]);
    }

    #[test]
    fn picks_cheapest_parallel_arc() {
        let g = Graph::new(vec![vec![arc(0, 1, 5), arc(0, 1, 2)], vec![]]);
        let spt = ShortestPathTree::compute(&g, 1, 0);
        assert_eq!(spt.dist[0], Some(2));
        assert_eq!(spt.spt_arc[0], Some(1));
    }
}
