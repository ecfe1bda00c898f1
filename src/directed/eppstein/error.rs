//! Failure conditions surfaced by [`super::best_paths`].

use std::collections::TryReserveError;

/// Errors returned by [`super::best_paths`].
///
/// Internal consistency violations (a broken heap-order invariant, a
/// dangling arena index) are programmer bugs rather than caller-triggerable
/// failures and are reported with `debug_assert!` instead of a variant here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `k` was zero; at least one path must be requested.
    #[error("k must be at least 1")]
    InvalidK,
    /// The graph has no states at all.
    #[error("graph has no states")]
    EmptyGraph,
    /// `source` is not a valid state id for this graph.
    #[error("source state {source} is out of range for a graph with {n} states")]
    SourceOutOfRange {
        /// The offending source id.
        source: usize,
        /// Number of states in the graph.
        n: usize,
    },
    /// `dest` is not a valid state id for this graph.
    #[error("destination state {dest} is out of range for a graph with {n} states")]
    DestOutOfRange {
        /// The offending destination id.
        dest: usize,
        /// Number of states in the graph.
        n: usize,
    },
    /// The path-heap arena failed to grow to accommodate more nodes.
    #[error("failed to grow the path-heap arena: {0}")]
    Allocation(#[from] TryReserveError),
}
