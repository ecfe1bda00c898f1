//! The best-first enumerator over Eppstein's implicit "path graph": a
//! global min-heap of frontier path-prefixes, popped in non-decreasing
//! cost order and expanded lazily, one state's worth of successors at a
//! time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::{Add, Sub};

use super::graph::{Arc, Graph, StateId};
use super::path_heap::{NodeId, PathHeapArena};
use super::sidetracks::StateSidetracks;
use super::spt::ShortestPathTree;
use super::visitor::BestPathsVisitor;

/// Which slot of the path graph a [`FrontierEntry`] denotes: a position in
/// the tree-heap `H_T`, or an index into the owning state's `H_out` tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeapPos {
    Tree,
    Out(usize),
}

struct FrontierEntry<C> {
    node: NodeId,
    pos: HeapPos,
    /// Index into `retired` of the entry this one was spawned from, or
    /// `None` for the seed entry.
    last: Option<usize>,
    /// `true` if the hop from `last` to this entry is a cross-edge, i.e.
    /// its sidetrack arc contributes to the reconstructed path; `false`
    /// for a local tree-heap/`H_out` move, which contributes no arc of
    /// its own.
    is_cross: bool,
    weight: C,
    /// Monotonic insertion order, used only to break ties between equal
    /// `weight` entries deterministically (tie order among
    /// equal-cost entries is otherwise unspecified).
    seq: u64,
}

impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<C: PartialEq> Eq for FrontierEntry<C> {}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap; reverse so the smallest weight (and,
        // on ties, the earliest-inserted entry) pops first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// All per-invocation state the k-best enumerator needs once the
/// shortest-path tree, sidetrack tables and path-heap have been built.
/// Owned entirely on the stack of one `best_paths` call — no statics.
pub(super) struct Context<'g, C, D> {
    pub(super) graph: &'g Graph<C, D>,
    pub(super) spt: ShortestPathTree<C>,
    pub(super) sidetracks: Vec<StateSidetracks<C>>,
    pub(super) arena: PathHeapArena<C>,
    pub(super) path_graph: Vec<Option<NodeId>>,
}

impl<C, D> Context<'_, C, D>
where
    C: Copy + Ord + Add<Output = C> + Sub<Output = C>,
    D: Copy,
{
    fn node_weight(&self, node: NodeId, pos: HeapPos) -> C {
        match pos {
            HeapPos::Tree => self.arena.get(node).weight,
            HeapPos::Out(i) => self.sidetracks[self.arena.get(node).owner_state].heap[i].telescoped,
        }
    }

    /// The literal arc this frontier entry currently selects.
    fn cut_arc(&self, node: NodeId, pos: HeapPos) -> Arc<C, D> {
        let owner = self.arena.get(node).owner_state;
        let arc_index = match pos {
            HeapPos::Tree => {
                self.sidetracks[owner]
                    .root
                    .expect("a published tree-heap node always owns a sidetrack root")
                    .arc_index
            }
            HeapPos::Out(i) => self.sidetracks[owner].heap[i].arc_index,
        };
        self.graph.arcs(owner)[arc_index]
    }

    /// Push every successor of `parent_idx` (an index into `retired`)
    /// onto `frontier`.
    fn spawn_successors(
        &self,
        parent_idx: usize,
        retired: &[FrontierEntry<C>],
        frontier: &mut BinaryHeap<FrontierEntry<C>>,
        next_seq: &mut u64,
    ) {
        let parent = &retired[parent_idx];
        let node = self.arena.get(parent.node);
        // `parent.weight` is the accumulated path-graph cost. A local move
        // (left/right child in the same tree-heap, or a sibling in the same
        // `H_out` array) *replaces* the candidate at the current slot with a
        // different one, so its accumulated cost is `parent.weight` plus the
        // delta between the successor's slot and the current one. A cross
        // edge instead *adds* an entirely separate sidetrack on top of
        // everything accumulated so far, so its accumulated cost is
        // `parent.weight` plus the successor's own telescoped weight
        // outright, with no subtraction.
        let parent_slot_weight = self.node_weight(parent.node, parent.pos);
        let mut push_local = |node_id: NodeId, pos: HeapPos| {
            let weight = parent.weight + (self.node_weight(node_id, pos) - parent_slot_weight);
            frontier.push(FrontierEntry {
                node: node_id,
                pos,
                last: Some(parent_idx),
                is_cross: false,
                weight,
                seq: *next_seq,
            });
            *next_seq += 1;
        };

        match parent.pos {
            HeapPos::Tree => {
                if let Some(left) = node.left {
                    push_local(left, HeapPos::Tree);
                }
                if let Some(right) = node.right {
                    push_local(right, HeapPos::Tree);
                }
                if !self.sidetracks[node.owner_state].heap.is_empty() {
                    push_local(parent.node, HeapPos::Out(0));
                }
            }
            HeapPos::Out(i) => {
                let heap = &self.sidetracks[node.owner_state].heap;
                for child in [2 * i + 1, 2 * i + 2] {
                    if child < heap.len() {
                        push_local(parent.node, HeapPos::Out(child));
                    }
                }
            }
        }

        let selected_dest = self.cut_arc(parent.node, parent.pos).dest;
        if let Some(cross_node) = self.path_graph[selected_dest] {
            let weight = parent.weight + self.arena.get(cross_node).weight;
            frontier.push(FrontierEntry {
                node: cross_node,
                pos: HeapPos::Tree,
                last: Some(parent_idx),
                is_cross: true,
                weight,
                seq: *next_seq,
            });
            *next_seq += 1;
        }
    }
}

/// Walk `SPT` arcs from `from` to `to`, reporting each through `visitor`
/// unless `SIDETRACKS_ONLY` suppresses best-arc reporting.
fn stitch<C, D, V>(
    ctx: &Context<C, D>,
    visitor: &mut V,
    from: StateId,
    to: StateId,
) where
    C: Copy,
    D: Copy,
    V: BestPathsVisitor<C, D>,
{
    let mut v = from;
    while v != to {
        let arc_index = ctx.spt.spt_arc[v]
            .expect("every state strictly between source and dest on a valid path has an SPT arc");
        let arc = ctx.graph.arcs(v)[arc_index];
        if !V::SIDETRACKS_ONLY {
            visitor.visit_best_arc(arc);
        }
        v = arc.dest;
    }
}

/// Reconstruct and report one emitted path.
fn emit_path<C, D, V>(
    ctx: &Context<C, D>,
    visitor: &mut V,
    source: StateId,
    dest: StateId,
    rank: usize,
    cost: C,
    retired: &[FrontierEntry<C>],
    top_idx: usize,
) where
    C: Copy,
    D: Copy,
    V: BestPathsVisitor<C, D>,
{
    // Walk `last` pointers collecting cross-edge sidetracks, newest first.
    // `top`'s own sidetrack is always the most recent one. Walking
    // further back, the hop from a retired entry into its `last` parent
    // contributes the *parent's* arc, but only when that hop is a cross
    // edge (a local tree-heap/`H_out` move just picks a different
    // candidate at the same path-graph position, it doesn't accumulate
    // one).
    let mut newest_first = vec![ctx.cut_arc(retired[top_idx].node, retired[top_idx].pos)];
    let mut idx = top_idx;
    while let Some(parent_idx) = retired[idx].last {
        if retired[idx].is_cross {
            let parent = &retired[parent_idx];
            newest_first.push(ctx.cut_arc(parent.node, parent.pos));
        }
        idx = parent_idx;
    }

    visitor.start_path(rank, cost);
    let mut endpoint = source;
    for sidetrack in newest_first.into_iter().rev() {
        stitch(ctx, visitor, endpoint, sidetrack.source);
        visitor.visit_sidetrack_arc(sidetrack);
        endpoint = sidetrack.dest;
    }
    stitch(ctx, visitor, endpoint, dest);
    visitor.end_path();
}

/// Drive the best-first search, emitting up to `k` paths through
/// `visitor` in non-decreasing cost order. Returns the number of paths
/// emitted.
pub(super) fn run<C, D, V>(
    ctx: &Context<C, D>,
    source: StateId,
    dest: StateId,
    k: usize,
    visitor: &mut V,
) -> usize
where
    C: Copy + Ord + Add<Output = C> + Sub<Output = C>,
    D: Copy,
    V: BestPathsVisitor<C, D>,
{
    let Some(dist_source) = ctx.spt.dist[source] else {
        return 0;
    };

    let mut rank = 1;
    visitor.start_path(rank, dist_source);
    stitch(ctx, visitor, source, dest);
    visitor.end_path();

    let Some(root) = ctx.path_graph[source] else {
        return 1;
    };
    if rank >= k {
        return 1;
    }

    let mut retired: Vec<FrontierEntry<C>> = Vec::with_capacity(k + 1);
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();
    let mut next_seq = 0u64;
    let seed_weight = ctx.arena.get(root).weight;
    frontier.push(FrontierEntry {
        node: root,
        pos: HeapPos::Tree,
        last: None,
        is_cross: true,
        weight: seed_weight,
        seq: next_seq,
    });
    next_seq += 1;

    while rank < k {
        let Some(top) = frontier.pop() else {
            break;
        };
        rank += 1;
        let cost = dist_source + top.weight;
        retired.push(top);
        let top_idx = retired.len() - 1;
        emit_path(ctx, visitor, source, dest, rank, cost, &retired, top_idx);
        ctx.spawn_successors(top_idx, &retired, &mut frontier, &mut next_seq);
    }

    rank
}
