//! Algorithms for directed graphs.

pub mod dijkstra;
pub mod eppstein;
pub mod yen;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

/// An [`IndexMap`] keyed with the non-cryptographic `FxHash` hasher, used
/// throughout this module for the parent/visited tables built while
/// relaxing a graph: insertion order gives each node a stable dense index
/// that doubles as a handle into the map, and `FxHash` avoids the
/// DoS-resistance overhead `IndexMap`'s default hasher carries, which
/// buys nothing for internally-generated graph traversal keys.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let path = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node
        })
    })
    .collect::<Vec<&N>>();

    path.into_iter().rev().cloned().collect()
}
