//! Pending sweep events, ordered left to right.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use crate::{Edge, Point, TriangleId, EPSILON_LEN};

/// What happens to an edge at an event point.
///
/// At a shared point, ends are handled before crossings and crossings before
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    End,
    Crossing,
    Start,
}

/// A point where the sweep must stop.
#[derive(Debug, Clone, Copy)]
pub struct VertexEvent {
    pub point: Point,
    pub kind: EventKind,
    pub edge: Edge,
    /// The second edge of a [`EventKind::Crossing`] event.
    pub other: Option<Edge>,
}

impl VertexEvent {
    /// The left endpoint of an edge.
    pub fn start(edge: Edge) -> Self {
        Self {
            point: edge.segment().start(),
            kind: EventKind::Start,
            edge,
            other: None,
        }
    }

    /// The right endpoint of an edge.
    pub fn end(edge: Edge) -> Self {
        Self {
            point: edge.segment().end(),
            kind: EventKind::End,
            edge,
            other: None,
        }
    }

    /// A proper crossing of two edges at `point`.
    pub fn crossing(point: Point, edge: Edge, other: Edge) -> Self {
        Self {
            point,
            kind: EventKind::Crossing,
            edge,
            other: Some(other),
        }
    }

    /// Returns `true` if the event refers to the given edge.
    pub fn involves(&self, edge: &Edge) -> bool {
        self.edge.same_as(edge) || self.other.is_some_and(|o| o.same_as(edge))
    }

    /// Returns `true` if the event refers to an edge of the given triangle.
    pub fn involves_triangle(&self, id: TriangleId) -> bool {
        self.edge.triangle() == id || self.other.is_some_and(|o| o.triangle() == id)
    }
}

#[derive(Debug, Clone, Copy)]
struct EventKey {
    x: f64,
    y: f64,
    kind: EventKind,
}

impl EventKey {
    fn of(point: &Point, kind: EventKind) -> Self {
        Self {
            x: point.x,
            y: point.y,
            kind,
        }
    }
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EventKey {}

impl PartialOrd for EventKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

/// Min-ordered queue of sweep events keyed by point, then kind.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: BTreeMap<EventKey, Vec<VertexEvent>>,
    len: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued events.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.len = 0;
    }

    /// Queues an event.
    pub fn push(&mut self, event: VertexEvent) {
        self.events
            .entry(EventKey::of(&event.point, event.kind))
            .or_default()
            .push(event);
        self.len += 1;
    }

    /// Removes the next event point together with every queued event whose
    /// x lies within [`EPSILON_LEN`] of it.
    ///
    /// Events at one sweep position are therefore always handled in a single
    /// group. Returns the leading point and the events, in queue order.
    pub fn pop_group(&mut self) -> Option<(Point, Vec<VertexEvent>)> {
        let (key, mut group) = self.events.pop_first()?;
        let anchor = Point::new(key.x, key.y);
        while let Some(entry) = self.events.first_entry() {
            if entry.key().x - anchor.x > EPSILON_LEN {
                break;
            }
            group.extend(entry.remove());
        }
        self.len -= group.len();
        Some((anchor, group))
    }

    /// Removes the events of `kind` that refer to `edge`.
    ///
    /// Start and end events are looked up at the matching endpoint; a miss
    /// there is logged as a structural inconsistency. Returns the number of
    /// events removed.
    pub fn remove_edge_events(&mut self, edge: &Edge, kind: EventKind) -> usize {
        let point = match kind {
            EventKind::Start => edge.segment().start(),
            EventKind::End => edge.segment().end(),
            EventKind::Crossing => {
                return self.remove_matching(|key, event| {
                    key.kind == EventKind::Crossing && event.involves(edge)
                });
            }
        };
        let key = EventKey::of(&point, kind);
        let Some(bucket) = self.events.get_mut(&key) else {
            warn!(
                triangle = ?edge.triangle(),
                index = edge.index(),
                ?kind,
                "structural inconsistency: no queued event for edge"
            );
            return 0;
        };
        let before = bucket.len();
        bucket.retain(|event| !event.involves(edge));
        let removed = before - bucket.len();
        if bucket.is_empty() {
            self.events.remove(&key);
        }
        self.len -= removed;
        removed
    }

    /// Removes every crossing event that refers to the given triangle.
    ///
    /// Returns the number of events removed.
    pub fn remove_crossings(&mut self, id: TriangleId) -> usize {
        self.remove_matching(|key, event| {
            key.kind == EventKind::Crossing && event.involves_triangle(id)
        })
    }

    fn remove_matching(&mut self, matches: impl Fn(&EventKey, &VertexEvent) -> bool) -> usize {
        let mut removed = 0;
        self.events.retain(|key, bucket| {
            let before = bucket.len();
            bucket.retain(|event| !matches(key, event));
            removed += before - bucket.len();
            !bucket.is_empty()
        });
        self.len -= removed;
        removed
    }

    /// Returns `true` if a crossing of these two edges is already queued.
    pub fn has_crossing(&self, a: &Edge, b: &Edge) -> bool {
        self.events
            .iter()
            .filter(|(key, _)| key.kind == EventKind::Crossing)
            .flat_map(|(_, bucket)| bucket)
            .any(|event| event.involves(a) && event.involves(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Triangle, TriangleArena};

    fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
        Triangle::new(
            Point::new(a[0], a[1]),
            Point::new(b[0], b[1]),
            Point::new(c[0], c[1]),
        )
        .unwrap()
    }

    fn edges_of(arena: &mut TriangleArena, t: Triangle) -> [Edge; 3] {
        let id = arena.insert(t, None);
        arena.edges(id).unwrap()
    }

    #[test]
    fn pops_left_to_right() {
        let mut arena = TriangleArena::new();
        let edges = edges_of(&mut arena, make_triangle([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]));
        let mut queue = EventQueue::new();
        for edge in edges {
            queue.push(VertexEvent::start(edge));
            queue.push(VertexEvent::end(edge));
        }
        assert_eq!(queue.len(), 6);

        let mut xs = Vec::new();
        while let Some((point, group)) = queue.pop_group() {
            xs.push((point.x, group.len()));
        }
        // Two starts at the origin, an end and a start at the apex, two ends
        // at the far corner.
        assert_eq!(xs, vec![(0.0, 2), (2.0, 2), (4.0, 2)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ends_come_before_starts_at_a_shared_point() {
        let mut arena = TriangleArena::new();
        let edges = edges_of(&mut arena, make_triangle([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]));
        let mut queue = EventQueue::new();
        // Edge 0 ends at the apex where edge 1 starts.
        queue.push(VertexEvent::start(edges[1]));
        queue.push(VertexEvent::end(edges[0]));

        let (_, group) = queue.pop_group().unwrap();
        let kinds: Vec<EventKind> = group.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::End, EventKind::Start]);
    }

    #[test]
    fn nearby_points_are_grouped() {
        let mut arena = TriangleArena::new();
        let a = edges_of(&mut arena, make_triangle([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]));
        let b = edges_of(&mut arena, make_triangle([1e-6, 0.0], [4.0, 1.0], [2.0, 3.0]));
        let mut queue = EventQueue::new();
        queue.push(VertexEvent::start(a[0]));
        queue.push(VertexEvent::start(b[0]));

        let (point, group) = queue.pop_group().unwrap();
        assert_eq!(point, Point::new(0.0, 0.0));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn removal_by_edge_and_by_triangle() {
        let mut arena = TriangleArena::new();
        let a = edges_of(&mut arena, make_triangle([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]));
        let b = edges_of(&mut arena, make_triangle([0.0, 2.0], [4.0, 2.0], [2.0, -1.0]));
        let mut queue = EventQueue::new();
        queue.push(VertexEvent::start(a[0]));
        queue.push(VertexEvent::end(a[0]));
        queue.push(VertexEvent::crossing(Point::new(1.0, 1.5), a[0], b[0]));

        assert!(queue.has_crossing(&b[0], &a[0]));
        assert_eq!(queue.remove_edge_events(&a[0], EventKind::Start), 1);
        assert_eq!(queue.remove_edge_events(&a[0], EventKind::Start), 0);
        assert_eq!(queue.remove_crossings(b[0].triangle()), 1);
        assert!(!queue.has_crossing(&a[0], &b[0]));
        assert_eq!(queue.len(), 1);
        let (point, _) = queue.pop_group().unwrap();
        assert_eq!(point, a[0].segment().end());
    }

    #[test]
    fn one_group_per_sweep_position() {
        let mut arena = TriangleArena::new();
        let a = edges_of(&mut arena, make_triangle([1.0, 0.0], [4.0, 0.0], [2.0, 3.0]));
        let b = edges_of(&mut arena, make_triangle([1.0, 3.0], [4.0, 4.0], [2.0, 5.0]));
        let c = edges_of(&mut arena, make_triangle([1.0 + 1e-6, 0.0], [4.0, -1.0], [3.0, -2.0]));
        let mut queue = EventQueue::new();
        // Keys at (1, 3) sort between (1, 0) and (1 + 1e-6, 0).
        queue.push(VertexEvent::start(a[2]));
        queue.push(VertexEvent::start(b[2]));
        queue.push(VertexEvent::start(c[2]));
        queue.push(VertexEvent::end(a[2]));

        let (point, group) = queue.pop_group().unwrap();
        assert_eq!(point, Point::new(1.0, 0.0));
        assert_eq!(group.len(), 3);
        assert!(group.iter().all(|e| e.kind == EventKind::Start));
        assert_eq!(queue.len(), 1);
    }
}
