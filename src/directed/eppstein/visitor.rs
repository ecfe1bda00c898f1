//! The visitor interface through which [`super::best_paths`] reports each
//! emitted path, plus a ready-made [`PathCollector`] for
//! callers who would rather get a `Vec<Path<C, D>>` back than implement a
//! visitor themselves — the same convenience [`super::super::yen::yen`]
//! gives its own callers by returning a concrete `Vec` rather than driving
//! a callback.
//!
//! Callbacks are plain, infallible calls, not `Result`-returning: the
//! engine supports no mid-enumeration cancellation (a caller cannot abort
//! by dropping the visitor and returning from its callback), so there is
//! nothing for a callback to usefully fail or bail out with.

use super::graph::Arc;

/// Callbacks invoked, in order, as `best_paths` emits each path:
/// `start_path`, then `visit_best_arc`/`visit_sidetrack_arc` once per arc
/// in source-to-dest order, then `end_path`.
pub trait BestPathsVisitor<C, D> {
    /// If `true`, `visit_best_arc` is never called: only the sidetrack
    /// arcs of each path are reported, which is enough to recover the
    /// full path (the shortest-path-tree arcs between them are
    /// deterministic) but cheaper when the caller only wants the
    /// sidetrack signature.
    const SIDETRACKS_ONLY: bool = false;

    /// Called once per emitted path, before any arc of it, with its
    /// 1-based rank and its total cost (the sum of the *original* weights
    /// of its arcs).
    fn start_path(&mut self, rank: usize, cost: C);

    /// Report a shortest-path-tree arc along the path. Not called at all
    /// when `SIDETRACKS_ONLY` is `true`.
    fn visit_best_arc(&mut self, arc: Arc<C, D>);

    /// Report a sidetrack arc along the path, with its original
    /// (untelescoped) weight.
    ///
    /// The default forwards to [`Self::visit_best_arc`]: a caller that
    /// does not care about the tree/sidetrack distinction can implement
    /// just one method.
    fn visit_sidetrack_arc(&mut self, arc: Arc<C, D>) {
        self.visit_best_arc(arc);
    }

    /// Called once per emitted path, after its last arc.
    fn end_path(&mut self) {}
}

/// One path emitted by [`super::best_paths`]: its arcs in source-to-dest
/// order, and its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<C, D> {
    /// The path's arcs, from `source` to `dest`.
    pub arcs: Vec<Arc<C, D>>,
    /// The sum of the original weights of `arcs`.
    pub cost: C,
}

/// A [`BestPathsVisitor`] that simply records every emitted path as a
/// [`Path`], in emission (ascending cost) order.
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
/// best_paths(&g, 0, 2, 5, &mut collector).unwrap();
/// assert_eq!(collector.paths.len(), 1);
/// assert_eq!(collector.paths[0].cost, 3);
/// ```
#[derive(Debug)]
pub struct PathCollector<C, D> {
    /// Every path emitted so far, in ascending-cost (emission) order.
    pub paths: Vec<Path<C, D>>,
    current_arcs: Vec<Arc<C, D>>,
    current_cost: Option<C>,
}

impl<C, D> Default for PathCollector<C, D> {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            current_arcs: Vec::new(),
            current_cost: None,
        }
    }
}

impl<C: Copy, D: Copy> BestPathsVisitor<C, D> for PathCollector<C, D> {
    fn start_path(&mut self, _rank: usize, cost: C) {
        self.current_arcs.clear();
        self.current_cost = Some(cost);
    }

    fn visit_best_arc(&mut self, arc: Arc<C, D>) {
        self.current_arcs.push(arc);
    }

    fn end_path(&mut self) {
        self.paths.push(Path {
            arcs: std::mem::take(&mut self.current_arcs),
            cost: self
                .current_cost
                .take()
                .expect("end_path is always preceded by start_path"),
        });
    }
}
