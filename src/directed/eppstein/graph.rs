//! Immutable directed graph view consumed by the Eppstein k-best engine.

/// Dense state identifier, in `[0, graph.n())`.
pub type StateId = usize;

/// A directed arc `source -> dest` carrying a non-negative `weight` and an
/// opaque `data` tag the caller can use to recover application-level
/// identity (e.g. a road segment id) when a path is reported.
///
/// Arcs are immutable once built: the engine never mutates `weight` in
/// place to telescope/untelescope it around a callback, it keeps telescoped
/// costs in a parallel table instead (see [`super::sidetracks`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arc<C, D> {
    /// The state this arc leaves from.
    pub source: StateId,
    /// The state this arc leads to.
    pub dest: StateId,
    /// The (original, untelescoped) cost of traversing this arc.
    pub weight: C,
    /// Opaque, caller-defined payload.
    pub data: D,
}

/// An immutable directed graph of `N` dense states, each carrying an
/// ordered list of outgoing arcs.
///
/// State ids are the index into `states`: state `v`'s out-arcs are
/// `graph.arcs(v)`.
#[derive(Clone, Debug)]
pub struct Graph<C, D> {
    states: Vec<Vec<Arc<C, D>>>,
}

impl<C, D> Graph<C, D> {
    /// Build a graph from one out-arc list per state.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if an arc's `source` field does not match
    /// the index of the state list it is stored in.
    #[must_use]
    pub fn new(states: Vec<Vec<Arc<C, D>>>) -> Self {
        for (v, out) in states.iter().enumerate() {
            for arc in out {
                debug_assert_eq!(arc.source, v, "arc stored under the wrong source state");
            }
        }
        Self { states }
    }

    /// Number of states in the graph.
    #[must_use]
    pub fn n(&self) -> usize {
        self.states.len()
    }

    /// Out-arcs of state `v`, in the order they were supplied.
    #[must_use]
    pub fn arcs(&self, v: StateId) -> &[Arc<C, D>] {
        &self.states[v]
    }

    /// Build the reverse graph: an arc `(s, t, w, d)` becomes `(t, s, w, d)`.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        C: Copy,
        D: Copy,
    {
        let mut rev = vec![Vec::new(); self.n()];
        for out in &self.states {
            for arc in out {
                rev[arc.dest].push(Arc {
                    source: arc.dest,
                    dest: arc.source,
                    weight: arc.weight,
                    data: arc.data,
                });
            }
        }
        Self { states: rev }
    }
}
