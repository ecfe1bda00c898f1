#![deny(missing_docs)]

//! K-shortest-paths search over directed, non-negatively weighted graphs.
//!
//! The headline algorithm is [`directed::eppstein`], an implementation of
//! Eppstein's k-shortest-paths algorithm via sidetracks and persistent
//! path-heaps: given a graph, a source state, a destination state and an
//! integer `k`, it enumerates the `k` lowest-cost source→dest paths in
//! ascending cost order. Unlike repeated-relaxation approaches, its cost is
//! dominated by one shortest-path-tree computation plus `O(k log k)` heap
//! work, which makes it the better choice once `k` or the graph gets large.
//!
//! [`directed::dijkstra`] and [`directed::yen`] remain available as the
//! single-shortest-path and loopless-k-shortest-paths building blocks this
//! crate grew from.

pub extern crate num_traits;

pub mod directed;

pub use directed::eppstein;

/// Convenience re-exports of the crate's public algorithms.
pub mod prelude {
    pub use crate::directed::dijkstra::{build_path, dijkstra, dijkstra_all, dijkstra_partial};
    pub use crate::directed::eppstein::{
        best_paths, Arc, BestPathsVisitor, Error, Graph, Path, PathCollector,
    };
    pub use crate::directed::yen::yen;
}
