//! The persistent balanced tree-heap `H_T`: one node per state
//! reachable to `dest`, each inheriting the tree-heap of its
//! shortest-path-tree parent and path-copying in its own sidetrack.
//!
//! Nodes are addressed by [`NodeId`], an index into a block-chained arena,
//! rather than by raw pointer, and are never mutated after being
//! published: persistence falls out of always allocating a fresh node
//! along the spine that changes and sharing every untouched subtree by
//! index.
//!
//! A node does not carry its own sidetrack arc: it carries only the id of
//! the state whose sidetrack it represents (`owner_state`) plus that
//! sidetrack's telescoped weight, cached at publication so heap-order
//! comparisons during insertion never need to revisit the sidetrack
//! table.

use std::ops::{Add, Sub};

use super::graph::{Graph, StateId};
use super::sidetracks::StateSidetracks;
use crate::directed::eppstein::error::Error;

/// Index into [`PathHeapArena`]; `NodeId`s from one arena are meaningless
/// against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct NodeId(usize);

#[derive(Clone, Copy)]
pub(super) struct PathHeapNode<C> {
    pub(super) owner_state: StateId,
    pub(super) weight: C,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) n_descend: usize,
}

const BLOCK_SIZE: usize = 1024;

/// Bump allocator for [`PathHeapNode`], chained in fixed-size blocks so
/// that growth never has to move already-published nodes (which would
/// invalidate every `NodeId` referencing them). The whole arena, and
/// every node in it, is released when the owning [`super::engine::Context`]
/// is dropped at the end of one `best_paths` invocation; nothing is ever
/// freed node-by-node.
pub(super) struct PathHeapArena<C> {
    blocks: Vec<Vec<PathHeapNode<C>>>,
    len: usize,
}

impl<C: Copy> PathHeapArena<C> {
    pub(super) fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    pub(super) fn get(&self, id: NodeId) -> &PathHeapNode<C> {
        &self.blocks[id.0 / BLOCK_SIZE][id.0 % BLOCK_SIZE]
    }

    fn push(&mut self, node: PathHeapNode<C>) -> Result<NodeId, Error> {
        let block_index = self.len / BLOCK_SIZE;
        if block_index == self.blocks.len() {
            let mut block = Vec::new();
            block.try_reserve(BLOCK_SIZE).map_err(Error::Allocation)?;
            self.blocks.push(block);
        }
        self.blocks[block_index].push(node);
        let id = NodeId(self.len);
        self.len += 1;
        Ok(id)
    }

    fn n_descend_of(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| self.get(id).n_descend)
    }

    /// Path-copy-insert `(state, weight)` into the tree rooted at
    /// `existing` (or create a one-node tree if `existing` is `None`).
    /// Returns the root of the new tree; every subtree of `existing` that
    /// the insertion does not touch is shared by index rather than
    /// copied.
    fn insert(
        &mut self,
        existing: Option<NodeId>,
        state: StateId,
        weight: C,
    ) -> Result<NodeId, Error>
    where
        C: Ord,
    {
        let Some(root_id) = existing else {
            return self.push(PathHeapNode {
                owner_state: state,
                weight,
                left: None,
                right: None,
                n_descend: 0,
            });
        };
        let root = *self.get(root_id);
        let left_n = self.n_descend_of(root.left);
        let right_n = self.n_descend_of(root.right);
        let go_left = root.left.is_none() || (root.right.is_some() && right_n > left_n);
        let n_descend = root.n_descend + 1;

        if weight < root.weight {
            // The inserted value becomes the new root; the old root is
            // recursively reinserted into the (old) root's own children.
            let (left, right) = if go_left {
                (Some(self.insert(root.left, root.owner_state, root.weight)?), root.right)
            } else {
                (root.left, Some(self.insert(root.right, root.owner_state, root.weight)?))
            };
            self.push(PathHeapNode {
                owner_state: state,
                weight,
                left,
                right,
                n_descend,
            })
        } else {
            // Ties keep the incumbent as parent: the inserted value
            // descends into the copied root's chosen subtree.
            let (left, right) = if go_left {
                (Some(self.insert(root.left, state, weight)?), root.right)
            } else {
                (root.left, Some(self.insert(root.right, state, weight)?))
            };
            self.push(PathHeapNode {
                owner_state: root.owner_state,
                weight: root.weight,
                left,
                right,
                n_descend,
            })
        }
    }
}

/// Run the reverse DFS over the shortest-path tree (rooted at `dest`) and
/// build `H_T(v)` for every reachable `v`.
///
/// `children[p]` must list every state whose SPT arc's dest is `p` (i.e.
/// the SPT edges reversed); `parent[v]` is the inverse of that relation
/// (`None` for `dest`, which is the tree's own implicit root). Both are
/// precomputed once by the caller so this pass stays linear in the number
/// of reachable states and arcs.
pub(super) fn build<C, D>(
    graph: &Graph<C, D>,
    dest: StateId,
    children: &[Vec<StateId>],
    parent: &[Option<StateId>],
    sidetracks: &[StateSidetracks<C>],
    arena: &mut PathHeapArena<C>,
) -> Result<Vec<Option<NodeId>>, Error>
where
    C: Copy + Ord + Add<Output = C> + Sub<Output = C>,
{
    let n = graph.n();
    let mut path_graph: Vec<Option<NodeId>> = vec![None; n];
    let mut stack = vec![dest];
    while let Some(v) = stack.pop() {
        // By reverse-DFS order, `v`'s parent (if any) was pushed and
        // popped earlier, so its tree-heap is already published.
        let parent_heap = parent[v].and_then(|p| path_graph[p]);
        path_graph[v] = match sidetracks[v].root {
            None => parent_heap,
            Some(root) => Some(arena.insert(parent_heap, v, root.telescoped)?),
        };
        stack.extend(children[v].iter().copied());
    }
    Ok(path_graph)
}
