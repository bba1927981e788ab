//! Resumable plane sweep that removes overlaps from a set of triangles.

use slotmap::SecondaryMap;
use tracing::{debug, trace, warn};

use super::active::ActiveEdges;
use super::event::{EventKind, EventQueue, VertexEvent};
use crate::{
    clip, ClipOutcome, Edge, GeometryError, GeometrySink, Point, RenderTriangle,
    SegmentIntersection, Triangle, TriangleArena, TriangleId, EPSILON_LEN,
};

/// Whether a sweep has work left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStatus {
    /// Events or overlap checks are still pending.
    Running,
    /// The sweep has finished; the live triangles no longer overlap.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    /// Start and end events are queued.
    Queued,
    /// In the active set with its end event queued.
    Active,
    /// Left of the sweep line, or vertical.
    Swept,
}

#[derive(Debug, Clone)]
struct Progress {
    edges: [EdgeState; 3],
    /// Scheduling order, used to break ties between triangles entering at the same x.
    order: u64,
}

enum Resolution {
    Keep,
    Retire(TriangleId),
    Replace(TriangleId, Vec<Triangle>),
}

/// Plane-sweep overlap resolver.
///
/// Triangles are added up front, then [`step`](Self::step) is called until it
/// reports [`SweepStatus::Idle`]. Each step either handles one group of
/// event points or resumes overlap checks left over from the previous
/// step, so a driver can stop between any two steps and inspect or draw the
/// intermediate state.
///
/// ```
/// use tri_sweep::{PlaneSweep, Point};
///
/// let mut sweep = PlaneSweep::new();
/// sweep.add_points(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0))?;
/// sweep.add_points(Point::new(2.0, -1.0), Point::new(2.0, 5.0), Point::new(5.0, 2.0))?;
/// sweep.run();
/// assert!((sweep.total_area() - 15.25).abs() < 1e-6);
/// # Ok::<(), tri_sweep::GeometryError>(())
/// ```
#[derive(Debug, Default)]
pub struct PlaneSweep {
    arena: TriangleArena,
    progress: SecondaryMap<TriangleId, Progress>,
    queue: EventQueue,
    active: ActiveEdges,
    /// Triangles on the sweep line still awaiting an overlap check.
    pending: Vec<TriangleId>,
    started: bool,
    steps: usize,
    next_order: u64,
    next_render_index: u32,
}

impl PlaneSweep {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver over the given triangles.
    pub fn from_triangles(triangles: impl IntoIterator<Item = Triangle>) -> Self {
        let mut sweep = Self::new();
        for triangle in triangles {
            sweep.add_triangle(triangle);
        }
        sweep
    }

    /// Adds a triangle and returns its identifier.
    ///
    /// Triangles get consecutive render indices in the order they are added.
    /// A triangle added after the sweep has started only takes part right of
    /// the sweep line.
    pub fn add_triangle(&mut self, triangle: Triangle) -> TriangleId {
        let render_index = self.next_render_index;
        self.next_render_index += 1;
        let id = self.arena.insert(triangle, Some(render_index));
        self.schedule(id);
        id
    }

    /// Builds a triangle from three points and adds it.
    pub fn add_points(&mut self, a: Point, b: Point, c: Point) -> Result<TriangleId, GeometryError> {
        let triangle = Triangle::new(a, b, c)?;
        Ok(self.add_triangle(triangle))
    }

    /// Adds a batch of triangles, skipping degenerate ones.
    ///
    /// Returns the number of triangles added.
    pub fn add_batch(&mut self, triangles: impl IntoIterator<Item = [Point; 3]>) -> usize {
        let mut added = 0;
        for points in triangles {
            match Triangle::from_points(points) {
                Ok(triangle) => {
                    self.add_triangle(triangle);
                    added += 1;
                }
                Err(err) => warn!(%err, "skipping degenerate triangle"),
            }
        }
        added
    }

    /// Returns whether work is left.
    pub fn status(&self) -> SweepStatus {
        if self.pending.is_empty() && self.queue.is_empty() {
            SweepStatus::Idle
        } else {
            SweepStatus::Running
        }
    }

    /// Returns the sweep position, or `None` before the first event.
    pub fn current_x(&self) -> Option<f64> {
        self.started.then(|| self.active.current_x())
    }

    /// Number of steps that did work so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Performs one unit of work.
    pub fn step(&mut self) -> SweepStatus {
        if !self.pending.is_empty() {
            let batch = std::mem::take(&mut self.pending);
            trace!(triangles = batch.len(), "resuming overlap checks");
            self.steps += 1;
            self.check_entering(batch);
            return self.status();
        }

        let Some((point, group)) = self.queue.pop_group() else {
            return SweepStatus::Idle;
        };
        self.started = true;
        self.steps += 1;

        // Ending edges leave under the old position.
        for event in group.iter().filter(|e| e.kind == EventKind::End) {
            let edge = event.edge;
            match self.state_of(&edge) {
                Some(EdgeState::Active) => {
                    self.active.remove(&edge);
                    self.set_state(&edge, EdgeState::Swept);
                    if edge.index() == 2 {
                        trace!(triangle = ?edge.triangle(), "triangle swept");
                    }
                }
                Some(EdgeState::Queued) => self.set_state(&edge, EdgeState::Swept),
                _ => {}
            }
        }

        // Crossing pairs swap order across the move, so they are taken out
        // before advancing and put back after.
        let mut crossing: Vec<Edge> = Vec::new();
        for event in group.iter().filter(|e| e.kind == EventKind::Crossing) {
            for edge in std::iter::once(event.edge).chain(event.other) {
                if self.state_of(&edge) == Some(EdgeState::Active)
                    && !crossing.iter().any(|e| e.same_as(&edge))
                {
                    self.active.remove(&edge);
                    crossing.push(edge);
                }
            }
        }

        self.active.advance_to(point.x);

        let mut entering: Vec<TriangleId> = Vec::new();
        for edge in crossing {
            self.active.insert(edge);
            entering.push(edge.triangle());
        }
        for event in group.iter().filter(|e| e.kind == EventKind::Start) {
            let edge = event.edge;
            if self.state_of(&edge) == Some(EdgeState::Queued) {
                self.active.insert(edge);
                self.set_state(&edge, EdgeState::Active);
                entering.push(edge.triangle());
            }
        }
        entering.sort_unstable();
        entering.dedup();

        debug!(
            x = point.x,
            y = point.y,
            events = group.len(),
            entering = entering.len(),
            active = self.active.len(),
            "sweep step"
        );

        self.check_entering(entering);
        self.status()
    }

    /// Steps until idle and returns the number of steps taken.
    pub fn run(&mut self) -> usize {
        let before = self.steps;
        while self.step() == SweepStatus::Running {}
        self.steps - before
    }

    /// Steps until idle, publishing the state to `sink` after every step.
    pub fn run_with(&mut self, sink: &mut impl GeometrySink) -> usize {
        let before = self.steps;
        loop {
            let status = self.step();
            self.publish(sink);
            if status == SweepStatus::Idle {
                break;
            }
        }
        self.steps - before
    }

    /// Publishes the live triangles and the active edges as one snapshot.
    pub fn publish(&self, sink: &mut impl GeometrySink) {
        let triangles: Vec<RenderTriangle> = self
            .arena
            .iter()
            .map(|(id, triangle)| RenderTriangle {
                triangle: triangle.clone(),
                render_index: self.arena.render_index(id),
            })
            .collect();
        sink.show_triangles(&triangles);
        sink.show_segments(&self.active.segments());
        sink.commit();
    }

    /// Iterates over the live triangles.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.arena.iter().map(|(_, triangle)| triangle)
    }

    /// Consumes the resolver and returns the live triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.arena.into_triangles()
    }

    /// Returns a live triangle.
    pub fn get(&self, id: TriangleId) -> Option<&Triangle> {
        self.arena.get(id)
    }

    /// Returns `true` if the triangle has not been retired.
    pub fn contains(&self, id: TriangleId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the render index of a live triangle.
    pub fn render_index(&self, id: TriangleId) -> Option<u32> {
        self.arena.render_index(id)
    }

    /// Returns `true` once the sweep line has passed the whole triangle.
    pub fn is_swept(&self, id: TriangleId) -> bool {
        self.progress
            .get(id)
            .is_some_and(|p| p.edges[2] == EdgeState::Swept)
    }

    /// Number of live triangles.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Sum of the areas of the live triangles.
    pub fn total_area(&self) -> f64 {
        self.arena.total_area()
    }

    /// The edges currently crossing the sweep line.
    pub fn active_edges(&self) -> &ActiveEdges {
        &self.active
    }

    /// Number of queued events.
    pub fn queued_events(&self) -> usize {
        self.queue.len()
    }

    fn state_of(&self, edge: &Edge) -> Option<EdgeState> {
        self.progress
            .get(edge.triangle())
            .map(|p| p.edges[edge.index()])
    }

    fn set_state(&mut self, edge: &Edge, state: EdgeState) {
        if let Some(progress) = self.progress.get_mut(edge.triangle()) {
            progress.edges[edge.index()] = state;
        }
    }

    /// Registers the edges of a live triangle with the sweep.
    ///
    /// Edges ending at or before the sweep line are already swept, edges
    /// crossing it are activated now, and edges right of it are queued. A
    /// triangle that is already on the sweep line is queued for an overlap
    /// check.
    fn schedule(&mut self, id: TriangleId) {
        let Some(edges) = self.arena.edges(id) else {
            return;
        };
        let current_x = self.current_x();
        let mut states = [EdgeState::Swept; 3];
        for (state, edge) in states.iter_mut().zip(edges) {
            let segment = edge.segment();
            if segment.is_vertical() {
                continue;
            }
            match current_x {
                Some(x) if segment.end().x <= x + EPSILON_LEN => {}
                Some(x) if segment.start().x <= x => {
                    self.active.insert(edge);
                    self.queue.push(VertexEvent::end(edge));
                    *state = EdgeState::Active;
                }
                _ => {
                    self.queue.push(VertexEvent::start(edge));
                    self.queue.push(VertexEvent::end(edge));
                    *state = EdgeState::Queued;
                }
            }
        }
        if states.contains(&EdgeState::Active) {
            self.pending.push(id);
        }
        let order = self.next_order;
        self.next_order += 1;
        self.progress.insert(id, Progress { edges: states, order });
    }

    /// Live triangles other than `id` with an edge on the sweep line whose
    /// bounding box meets that of `id`.
    fn triangles_on_line(&self, id: TriangleId, triangle: &Triangle) -> Vec<TriangleId> {
        let mut found: Vec<TriangleId> = self
            .active
            .edges()
            .map(Edge::triangle)
            .filter(|&other| other != id)
            .collect();
        found.sort_unstable();
        found.dedup();
        found.retain(|&other| {
            self.arena
                .get(other)
                .is_some_and(|t| t.bbox_overlaps(triangle))
        });
        found
    }

    /// Checks each triangle that reached the sweep line against every other
    /// triangle on it.
    ///
    /// Stops at the first structural change and leaves the unchecked
    /// triangles pending for the next step.
    fn check_entering(&mut self, batch: Vec<TriangleId>) {
        let mut remaining = batch.into_iter();
        while let Some(id) = remaining.next() {
            let Some(triangle) = self.arena.get(id) else {
                continue;
            };
            for other in self.triangles_on_line(id, triangle) {
                if self.resolve_pair(id, other) {
                    if self.arena.contains(id) {
                        self.pending.push(id);
                    }
                    self.pending.extend(remaining);
                    return;
                }
            }
        }
    }

    /// Resolves the overlap between two live triangles.
    ///
    /// Returns `true` if a triangle was retired or replaced.
    fn resolve_pair(&mut self, a: TriangleId, b: TriangleId) -> bool {
        let resolution = {
            let (Some(ta), Some(tb)) = (self.arena.get(a), self.arena.get(b)) else {
                warn!(?a, ?b, "structural inconsistency: checking a retired triangle");
                return false;
            };
            if ta.contains_triangle(tb) {
                Resolution::Retire(b)
            } else if tb.contains_triangle(ta) {
                Resolution::Retire(a)
            } else {
                let (subject, clipper) = if self.entered_later(a, ta, b, tb) {
                    ((a, ta), tb)
                } else {
                    ((b, tb), ta)
                };
                let mut pieces = Vec::new();
                let outcome = clip(subject.1, clipper, &mut pieces);
                trace!(subject = ?subject.0, ?outcome, pieces = pieces.len(), "clip");
                match outcome {
                    ClipOutcome::Clipped => Resolution::Replace(subject.0, pieces),
                    ClipOutcome::Inside | ClipOutcome::Coincident => Resolution::Retire(subject.0),
                    ClipOutcome::Outside => Resolution::Keep,
                }
            }
        };

        match resolution {
            Resolution::Keep => {
                self.schedule_crossings(a, b);
                false
            }
            Resolution::Retire(id) => {
                self.retire(id);
                true
            }
            Resolution::Replace(id, pieces) => {
                self.replace(id, pieces);
                true
            }
        }
    }

    /// Returns `true` if triangle `a` entered the sweep after triangle `b`.
    fn entered_later(&self, a: TriangleId, ta: &Triangle, b: TriangleId, tb: &Triangle) -> bool {
        let order = |id| self.progress.get(id).map_or(0, |p| p.order);
        ta.min_x()
            .total_cmp(&tb.min_x())
            .then_with(|| order(a).cmp(&order(b)))
            .is_gt()
    }

    fn active_edges_of(&self, id: TriangleId) -> Vec<Edge> {
        self.arena
            .edges(id)
            .into_iter()
            .flatten()
            .filter(|edge| self.state_of(edge) == Some(EdgeState::Active))
            .collect()
    }

    /// Queues crossing events for active edges of two non-overlapping
    /// triangles that still cross right of the sweep line.
    ///
    /// Such crossings only come from rounding in the clip, but the active
    /// order has to be repaired at them all the same.
    fn schedule_crossings(&mut self, a: TriangleId, b: TriangleId) {
        let limit = self.active.current_x() + EPSILON_LEN;
        for ea in self.active_edges_of(a) {
            for eb in self.active_edges_of(b) {
                let SegmentIntersection::Crossing(point) = ea.segment().intersect(eb.segment())
                else {
                    continue;
                };
                if point.x > limit && !self.queue.has_crossing(&ea, &eb) {
                    trace!(x = point.x, y = point.y, "crossing scheduled");
                    self.queue.push(VertexEvent::crossing(point, ea, eb));
                }
            }
        }
    }

    /// Removes a triangle from the active set, the queue and the arena.
    fn retire(&mut self, id: TriangleId) {
        let (Some(progress), Some(edges)) = (self.progress.remove(id), self.arena.edges(id)) else {
            warn!(?id, "structural inconsistency: retiring an unknown triangle");
            return;
        };
        for (edge, state) in edges.into_iter().zip(progress.edges) {
            match state {
                EdgeState::Queued => {
                    self.queue.remove_edge_events(&edge, EventKind::Start);
                    self.queue.remove_edge_events(&edge, EventKind::End);
                }
                EdgeState::Active => {
                    self.active.remove(&edge);
                    self.queue.remove_edge_events(&edge, EventKind::End);
                }
                EdgeState::Swept => {}
            }
        }
        self.queue.remove_crossings(id);
        self.pending.retain(|&pending| pending != id);
        self.arena.remove(id);
        trace!(?id, "triangle retired");
    }

    /// Retires a triangle and installs the pieces that replace it.
    fn replace(&mut self, id: TriangleId, pieces: Vec<Triangle>) {
        let render_index = self.arena.render_index(id);
        self.retire(id);
        let largest = pieces
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.area().total_cmp(&b.area()))
            .map(|(i, _)| i);
        for (i, piece) in pieces.into_iter().enumerate() {
            let inherited = if Some(i) == largest { render_index } else { None };
            let piece_id = self.arena.insert(piece, inherited);
            self.schedule(piece_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectingSink;
    use approx::assert_relative_eq;

    fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
        Triangle::new(
            Point::new(a[0], a[1]),
            Point::new(b[0], b[1]),
            Point::new(c[0], c[1]),
        )
        .unwrap()
    }

    fn assert_no_overlaps(triangles: &[Triangle]) {
        for (i, a) in triangles.iter().enumerate() {
            for b in &triangles[i + 1..] {
                let mut out = Vec::new();
                assert_eq!(clip(a, b, &mut out), ClipOutcome::Outside, "{a:?} overlaps {b:?}");
                assert_eq!(clip(b, a, &mut out), ClipOutcome::Outside, "{b:?} overlaps {a:?}");
            }
        }
    }

    #[test]
    fn empty_sweep_is_idle() {
        let mut sweep = PlaneSweep::new();
        assert_eq!(sweep.status(), SweepStatus::Idle);
        assert_eq!(sweep.step(), SweepStatus::Idle);
        assert_eq!(sweep.run(), 0);
        assert!(sweep.current_x().is_none());
    }

    #[test]
    fn single_triangle_passes_through() {
        let t = make_triangle([0.0, 0.0], [4.0, 0.0], [2.0, 3.0]);
        let mut sweep = PlaneSweep::new();
        let id = sweep.add_triangle(t.clone());
        assert_eq!(sweep.queued_events(), 6);

        let steps = sweep.run();
        assert_eq!(steps, 3);
        assert_eq!(sweep.get(id), Some(&t));
        assert!(sweep.is_swept(id));
        assert!(sweep.active_edges().is_empty());
        assert_eq!(sweep.queued_events(), 0);
    }

    #[test]
    fn disjoint_triangles_are_unchanged() {
        let a = make_triangle([0.0, 0.0], [2.0, 0.0], [0.0, 2.0]);
        let b = make_triangle([5.0, 5.0], [7.0, 5.0], [5.0, 7.0]);
        let mut sweep = PlaneSweep::from_triangles([a.clone(), b.clone()]);
        sweep.run();

        let mut result = sweep.into_triangles();
        result.sort_by(|x, y| x.min_x().total_cmp(&y.min_x()));
        assert_eq!(result, vec![a, b]);
    }

    #[test]
    fn overlap_is_clipped_away() {
        let mut sweep = PlaneSweep::new();
        let a = sweep
            .add_points(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0))
            .unwrap();
        let b = sweep
            .add_points(Point::new(2.0, -1.0), Point::new(2.0, 5.0), Point::new(5.0, 2.0))
            .unwrap();
        sweep.run();

        // The first triangle is kept whole; the later one loses the overlap.
        assert!(sweep.contains(a));
        assert!(!sweep.contains(b));
        assert_relative_eq!(sweep.total_area(), 8.0 + 9.0 - 1.75, epsilon = 1e-6);

        let triangles: Vec<Triangle> = sweep.triangles().cloned().collect();
        assert_no_overlaps(&triangles);
    }

    #[test]
    fn contained_triangle_is_retired() {
        let outer = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]);
        let inner = make_triangle([1.0, 1.0], [3.0, 1.0], [1.0, 3.0]);
        let mut sweep = PlaneSweep::new();
        let outer_id = sweep.add_triangle(outer.clone());
        let inner_id = sweep.add_triangle(inner);
        sweep.run();

        assert!(sweep.contains(outer_id));
        assert!(!sweep.contains(inner_id));
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep.get(outer_id), Some(&outer));
    }

    #[test]
    fn containing_triangle_added_later_still_wins() {
        let inner = make_triangle([1.0, 1.0], [3.0, 1.0], [1.0, 3.0]);
        let outer = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]);
        let mut sweep = PlaneSweep::from_triangles([inner, outer]);
        sweep.run();

        assert_eq!(sweep.len(), 1);
        assert_relative_eq!(sweep.total_area(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn duplicate_triangle_is_dropped() {
        let t = make_triangle([0.0, 0.0], [4.0, 1.0], [1.0, 3.0]);
        let mut sweep = PlaneSweep::from_triangles([t.clone(), t.clone()]);
        sweep.run();
        assert_eq!(sweep.into_triangles(), vec![t]);
    }

    #[test]
    fn degenerate_batch_entries_are_skipped() {
        let mut sweep = PlaneSweep::new();
        let added = sweep.add_batch([
            [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
        ]);
        assert_eq!(added, 1);
        assert_eq!(sweep.len(), 1);
    }

    #[test]
    fn largest_piece_inherits_render_index() {
        let mut sweep = PlaneSweep::new();
        sweep
            .add_points(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0))
            .unwrap();
        sweep
            .add_points(Point::new(2.0, -1.0), Point::new(2.0, 5.0), Point::new(5.0, 2.0))
            .unwrap();
        let mut sink = CollectingSink::new();
        sweep.run_with(&mut sink);

        let inherited: Vec<_> = sink
            .triangles()
            .iter()
            .filter(|t| t.render_index == Some(1))
            .collect();
        assert_eq!(inherited.len(), 1);
        assert!(sink.commits() > 0);
        assert!(sink.segments().is_empty());
        assert_relative_eq!(sink.area(), 15.25, epsilon = 1e-6);
    }

    #[test]
    fn stepping_can_pause_and_resume() {
        let mut sweep = PlaneSweep::new();
        sweep
            .add_points(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0))
            .unwrap();
        sweep
            .add_points(Point::new(1.0, 1.0), Point::new(6.0, 1.5), Point::new(2.0, 5.0))
            .unwrap();

        assert_eq!(sweep.step(), SweepStatus::Running);
        assert_eq!(sweep.current_x(), Some(0.0));
        let mut sink = CollectingSink::new();
        sweep.publish(&mut sink);
        assert_eq!(sink.segments().len(), sweep.active_edges().len());

        sweep.run();
        assert_eq!(sweep.status(), SweepStatus::Idle);
        let triangles: Vec<Triangle> = sweep.triangles().cloned().collect();
        assert_no_overlaps(&triangles);
    }

    #[test]
    fn edges_ending_on_a_vertical_side_leave_the_active_set() {
        let mut sweep = PlaneSweep::new();
        sweep
            .add_points(Point::new(3.25, 1.0), Point::new(3.75, 5.25), Point::new(9.5, 0.25))
            .unwrap();
        sweep
            .add_points(Point::new(1.5, 4.25), Point::new(5.5, 2.25), Point::new(5.5, 2.75))
            .unwrap();
        sweep.run();

        assert!(sweep.active_edges().is_empty());
        assert_eq!(sweep.queued_events(), 0);
        let triangles: Vec<Triangle> = sweep.triangles().cloned().collect();
        assert_no_overlaps(&triangles);
        assert!(sweep.triangles().all(|t| t.max_x() <= 9.5 + EPSILON_LEN));
    }

    #[test]
    fn overlap_behind_another_triangle_is_found() {
        let bottom = make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 2.0]);
        let band = make_triangle([0.0, 3.0], [10.0, 3.0], [0.0, 4.0]);
        // Enters below both and reaches up through both; on entry only the
        // bottom triangle is its neighbour on the sweep line.
        let spike = make_triangle([1.0, -1.0], [3.0, -1.0], [2.0, 5.0]);
        let input = [bottom, band, spike];

        let mut sweep = PlaneSweep::new();
        let ids: Vec<TriangleId> = input.iter().cloned().map(|t| sweep.add_triangle(t)).collect();
        sweep.run();

        assert!(sweep.contains(ids[0]));
        assert!(sweep.contains(ids[1]));
        assert!(!sweep.contains(ids[2]));
        let triangles: Vec<Triangle> = sweep.triangles().cloned().collect();
        assert_no_overlaps(&triangles);
        let expected = crate::Partition::from_triangles(input).area();
        assert_relative_eq!(sweep.total_area(), expected, epsilon = 1e-6);
        assert!(sweep.active_edges().is_empty());
    }
}
