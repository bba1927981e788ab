//! The set of edges crossing the sweep line, ordered bottom to top.

use std::cmp::Ordering;

use tracing::warn;

use super::tree::{Comparator, OrderedTree};
use crate::{Edge, LineSegment, EPSILON_LEN};

/// Orders edges by the height at which they cross the vertical line `x = current_x`.
///
/// Heights within [`EPSILON_LEN`] tie. Tied edges meet at the sweep line, so
/// they are ordered as they lie next to that point: by ascending slope when
/// both continue to the right, and by descending slope when either of them
/// ends there. Remaining ties go by descending edge index, then triangle id.
/// Two distinct edges therefore never compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOrder {
    current_x: f64,
}

impl SweepOrder {
    /// Creates an ordering at the given sweep position.
    pub fn at(current_x: f64) -> Self {
        Self { current_x }
    }

    /// Returns the sweep position.
    #[inline]
    pub fn current_x(&self) -> f64 {
        self.current_x
    }
}

impl Comparator<Edge> for SweepOrder {
    fn compare(&self, a: &Edge, b: &Edge) -> Ordering {
        if a.same_as(b) {
            return Ordering::Equal;
        }
        let ya = a.segment().calc_y(self.current_x);
        let yb = b.segment().calc_y(self.current_x);
        if (ya - yb).abs() > EPSILON_LEN {
            return ya.total_cmp(&yb);
        }
        let ends_here = |e: &Edge| e.segment().end().x <= self.current_x + EPSILON_LEN;
        let by_slope = a.segment().slope().total_cmp(&b.segment().slope());
        let by_slope = if ends_here(a) || ends_here(b) {
            by_slope.reverse()
        } else {
            by_slope
        };
        by_slope
            .then_with(|| b.index().cmp(&a.index()))
            .then_with(|| a.triangle().cmp(&b.triangle()))
    }
}

/// Edges currently intersected by the sweep line.
///
/// Vertical edges are never stored. Moving the sweep line with
/// [`advance_to`](Self::advance_to) does not reorder stored edges; callers
/// must take out any pair whose relative order changes across the move and
/// reinsert it afterwards.
#[derive(Debug, Clone)]
pub struct ActiveEdges {
    tree: OrderedTree<Edge>,
    order: SweepOrder,
}

impl Default for ActiveEdges {
    fn default() -> Self {
        Self {
            tree: OrderedTree::new(),
            order: SweepOrder::at(f64::NEG_INFINITY),
        }
    }
}

impl ActiveEdges {
    /// Creates an empty set with the sweep line at negative infinity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sweep position.
    #[inline]
    pub fn current_x(&self) -> f64 {
        self.order.current_x()
    }

    /// Moves the sweep line.
    pub fn advance_to(&mut self, x: f64) {
        self.order = SweepOrder::at(x);
    }

    /// Returns the number of stored edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Inserts an edge. Vertical edges are ignored and `false` is returned.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if edge.segment().is_vertical() {
            return false;
        }
        self.tree.insert(edge, &self.order);
        true
    }

    /// Removes an edge, returning whether it was found.
    ///
    /// If the search misses an edge that is stored, the stored order no
    /// longer matches the sweep position; this is logged as a structural
    /// inconsistency and the set is rebuilt without the edge.
    pub fn remove(&mut self, edge: &Edge) -> bool {
        if self.tree.remove(edge, &self.order).is_some() {
            return true;
        }
        let found = self.tree.iter().any(|e| e.same_as(edge));
        warn!(
            triangle = ?edge.triangle(),
            index = edge.index(),
            x = self.current_x(),
            stored = found,
            "structural inconsistency: edge missing from the active set"
        );
        if found {
            let kept: Vec<Edge> = self.tree.iter().filter(|e| !e.same_as(edge)).copied().collect();
            self.tree.clear();
            for e in kept {
                self.tree.insert(e, &self.order);
            }
        }
        found
    }

    /// Returns `true` if the edge is stored.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.tree.find(edge, &self.order).is_some()
    }

    /// Returns the nearest stored edge above `edge`.
    pub fn edge_above(&self, edge: &Edge) -> Option<&Edge> {
        self.tree.above(edge, &self.order)
    }

    /// Returns the nearest stored edge below `edge`.
    pub fn edge_below(&self, edge: &Edge) -> Option<&Edge> {
        self.tree.below(edge, &self.order)
    }

    /// Iterates over the stored edges from bottom to top.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.tree.iter()
    }

    /// Returns the stored segments from bottom to top.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.tree.iter().map(|e| *e.segment()).collect()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }
}
