//! Triangle/triangle clipping.
//!
//! [`clip`] removes the part of a subject triangle covered by a clipper
//! triangle and emits the rest as replacement triangles. Each clipper edge
//! acts as a probe: the subject region still inside the clipper is split
//! along the probe's supporting line, the outer part is kept, and the inner
//! part is handed to the next probe. What survives all three probes is the
//! overlap, which is discarded.

use tracing::trace;

use crate::{
    points_close, polygon_area, Line, LineSide, Point, PointLocation, Triangle, EPSILON_AREA,
};

/// Result of clipping a subject triangle against a clipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// The triangles do not overlap (they may touch). The subject is kept.
    Outside,
    /// The subject lies entirely within the clipper and should be discarded.
    Inside,
    /// The subject was cut; the replacement triangles were emitted.
    Clipped,
    /// Both triangles have the same vertices.
    Coincident,
}

/// Counts proper crossings of the subject's boundary with each clipper edge.
///
/// Entry `i` is the number of subject edges crossing clipper edge `i`
/// (0, 1 or 2 for a triangle subject). Touching and collinear contacts are
/// not counted.
pub fn probe_crossings(subject: &Triangle, clipper: &Triangle) -> [usize; 3] {
    let mut crossings = [0usize; 3];
    for (i, probe) in clipper.edges().iter().enumerate() {
        crossings[i] = subject
            .edges()
            .iter()
            .filter(|edge| edge.intersect(probe).is_crossing())
            .count();
    }
    crossings
}

/// Clips `subject` against `clipper`.
///
/// On [`ClipOutcome::Clipped`] the parts of `subject` outside `clipper` are
/// appended to `out` as triangles; for every other outcome `out` is left
/// untouched. A clipper lying strictly inside the subject reports
/// [`ClipOutcome::Outside`]: check [`Triangle::contains_triangle`] first when
/// that case matters. Replacement triangles are built only from subject vertices,
/// crossing points, and clipper vertices lying inside the subject. Pieces
/// that would be degenerate are dropped.
pub fn clip(subject: &Triangle, clipper: &Triangle, out: &mut Vec<Triangle>) -> ClipOutcome {
    if !subject.bbox_overlaps(clipper) {
        return ClipOutcome::Outside;
    }
    if subject.same_vertices(clipper) {
        return ClipOutcome::Coincident;
    }

    let locations = subject.vertices().map(|v| clipper.contains_point(&v));
    if locations.iter().all(|&l| l != PointLocation::Outside) {
        return ClipOutcome::Inside;
    }
    // A clipper strictly inside the subject never crosses it; callers
    // resolve that case with `contains_triangle`.
    if subject.contains_triangle(clipper) {
        return ClipOutcome::Outside;
    }

    let crossings = probe_crossings(subject, clipper);
    let touches_inside = locations.iter().any(|&l| l != PointLocation::Outside)
        || clipper
            .vertices()
            .iter()
            .any(|v| subject.contains_point(v) != PointLocation::Outside);
    if crossings.iter().all(|&c| c == 0) && !touches_inside {
        return ClipOutcome::Outside;
    }

    let (pieces, overlap) = subtract(subject, clipper);
    let overlap_area = overlap.as_deref().map_or(0.0, polygon_area);
    if overlap_area <= EPSILON_AREA {
        trace!(?crossings, "clip: boundaries touch without overlap");
        return ClipOutcome::Outside;
    }

    let before = out.len();
    for piece in &pieces {
        triangulate_into(piece, out);
    }
    let emitted = out.len() - before;
    trace!(?crossings, pieces = pieces.len(), emitted, overlap_area, "clip: subject cut");

    if emitted == 0 {
        ClipOutcome::Inside
    } else {
        ClipOutcome::Clipped
    }
}

/// Area of the region covered by both triangles.
pub fn overlap_area(a: &Triangle, b: &Triangle) -> f64 {
    if !a.bbox_overlaps(b) {
        return 0.0;
    }
    subtract(a, b).1.as_deref().map_or(0.0, polygon_area)
}

impl Triangle {
    /// Clips this triangle against `clipper`. See [`clip`].
    #[inline]
    pub fn clip_against(&self, clipper: &Triangle, out: &mut Vec<Triangle>) -> ClipOutcome {
        clip(self, clipper, out)
    }
}

/// Splits `subject` into convex pieces outside `clipper` plus the overlap.
///
/// Both are counter-clockwise vertex lists. Each probe cuts along the whole
/// supporting line of its clipper edge, so single crossings landing on the
/// same probe and probes that only graze the subject are handled the same
/// way as a clean two-crossing split.
fn subtract(subject: &Triangle, clipper: &Triangle) -> (Vec<Vec<Point>>, Option<Vec<Point>>) {
    let corners = clipper.ccw_vertices();
    let mut remaining = subject.ccw_vertices().to_vec();
    let mut pieces = Vec::new();

    for i in 0..3 {
        let Some(probe) = Line::through(corners[i], corners[(i + 1) % 3]) else {
            continue;
        };
        // Clipper interior is on the left of its counter-clockwise edges.
        let (inner, outer) = split_convex(&remaining, &probe);
        if let Some(outer) = outer {
            pieces.push(outer);
        }
        match inner {
            Some(inner) => remaining = inner,
            None => return (pieces, None),
        }
    }

    (pieces, Some(remaining))
}

/// Splits a convex polygon by a directed line into its left and right parts.
///
/// Walks the polygon edges, keeping two vertex lists and adding the
/// crossing point to both whenever an edge changes side.
fn split_convex(vertices: &[Point], line: &Line) -> (Option<Vec<Point>>, Option<Vec<Point>>) {
    let sides: Vec<LineSide> = vertices.iter().map(|v| line.classify_point(v)).collect();

    let has_left = sides.contains(&LineSide::Left);
    let has_right = sides.contains(&LineSide::Right);
    match (has_left, has_right) {
        (_, false) => return (Some(vertices.to_vec()), None),
        (false, true) => return (None, Some(vertices.to_vec())),
        (true, true) => {}
    }

    let n = vertices.len();
    let mut left = Vec::with_capacity(n + 1);
    let mut right = Vec::with_capacity(n + 1);

    for i in 0..n {
        let current = vertices[i];
        let current_side = sides[i];
        let next_idx = (i + 1) % n;
        let next = vertices[next_idx];
        let next_side = sides[next_idx];

        match current_side {
            LineSide::Left => left.push(current),
            LineSide::Right => right.push(current),
            LineSide::On => {
                left.push(current);
                right.push(current);
            }
        }

        let crosses = matches!(
            (current_side, next_side),
            (LineSide::Left, LineSide::Right) | (LineSide::Right, LineSide::Left)
        );
        if crosses {
            if let Some((_, crossing)) = line.intersect_segment(current, next) {
                left.push(crossing);
                right.push(crossing);
            }
        }
    }

    (non_degenerate(left), non_degenerate(right))
}

/// Drops repeated points and rejects polygons without area.
fn non_degenerate(mut vertices: Vec<Point>) -> Option<Vec<Point>> {
    vertices.dedup_by(|a, b| points_close(a, b));
    while vertices.len() > 1 && points_close(&vertices[0], &vertices[vertices.len() - 1]) {
        vertices.pop();
    }
    if vertices.len() >= 3 && polygon_area(&vertices) > EPSILON_AREA {
        Some(vertices)
    } else {
        None
    }
}

/// Fan-triangulates a convex polygon, skipping degenerate fan triangles.
fn triangulate_into(polygon: &[Point], out: &mut Vec<Triangle>) {
    let apex = polygon[0];
    for pair in polygon[1..].windows(2) {
        match Triangle::new(apex, pair[0], pair[1]) {
            Ok(triangle) => out.push(triangle),
            Err(err) => trace!(%err, "clip: sliver dropped"),
        }
    }
}
