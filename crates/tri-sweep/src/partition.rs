//! Incremental clip-based normalization into non-overlapping triangles.

use tracing::trace;

use crate::{
    clip, hull_of_edges, separated, ClipOutcome, GeometrySink, LineSegment, Point, RenderTriangle,
    Triangle,
};

/// A set of triangles with pairwise disjoint interiors.
///
/// Each inserted triangle is clipped against the triangles already present
/// and only its uncovered pieces are kept. The convex hull of the set is
/// kept as a broad-phase bound: a triangle separated from the hull is
/// appended without any clipping.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    triangles: Vec<Triangle>,
    hull: Vec<Point>,
}

impl Partition {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a partition by inserting the triangles in order.
    pub fn from_triangles(triangles: impl IntoIterator<Item = Triangle>) -> Self {
        let mut partition = Self::new();
        for triangle in triangles {
            partition.insert(triangle);
        }
        partition
    }

    /// Inserts a triangle and returns the number of pieces added.
    ///
    /// Triangles already present keep their shape, except that a triangle
    /// fully covered by a new piece is dropped in favour of that piece.
    pub fn insert(&mut self, triangle: Triangle) -> usize {
        if separated(&self.hull, &triangle) {
            self.extend_hull(&triangle);
            self.triangles.push(triangle);
            return 1;
        }

        let mut work = vec![triangle];
        let mut kept = Vec::new();
        let mut pieces = Vec::new();
        'pieces: while let Some(piece) = work.pop() {
            let mut i = 0;
            while i < self.triangles.len() {
                if piece.contains_triangle(&self.triangles[i]) {
                    trace!("existing triangle covered by new piece");
                    self.triangles.swap_remove(i);
                    continue;
                }
                pieces.clear();
                match clip(&piece, &self.triangles[i], &mut pieces) {
                    ClipOutcome::Outside => i += 1,
                    ClipOutcome::Inside | ClipOutcome::Coincident => continue 'pieces,
                    ClipOutcome::Clipped => {
                        work.append(&mut pieces);
                        continue 'pieces;
                    }
                }
            }
            kept.push(piece);
        }

        let added = kept.len();
        for piece in &kept {
            self.extend_hull(piece);
        }
        self.triangles.append(&mut kept);
        added
    }

    fn extend_hull(&mut self, triangle: &Triangle) {
        let mut edges = self.outline();
        edges.extend_from_slice(triangle.edges());
        self.hull = hull_of_edges(&edges);
    }

    /// The hull as closed outline segments.
    fn outline(&self) -> Vec<LineSegment> {
        self.hull
            .iter()
            .zip(self.hull.iter().cycle().skip(1))
            .filter_map(|(a, b)| LineSegment::new(*a, *b).ok())
            .collect()
    }

    /// The triangles, in no particular order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Counter-clockwise convex hull of every vertex in the partition.
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    /// Total area, which equals the area of the union of everything inserted.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Publishes the triangles and the hull outline as one snapshot.
    pub fn publish(&self, sink: &mut impl GeometrySink) {
        let triangles: Vec<RenderTriangle> = self
            .triangles
            .iter()
            .map(|t| RenderTriangle {
                triangle: t.clone(),
                render_index: None,
            })
            .collect();
        sink.show_triangles(&triangles);
        sink.show_segments(&self.outline());
        sink.commit();
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

    #[test]
    fn separated_triangles_are_appended() {
        let mut partition = Partition::new();
        assert_eq!(partition.insert(make_triangle([0.0, 0.0], [2.0, 0.0], [0.0, 2.0])), 1);
        assert_eq!(partition.insert(make_triangle([5.0, 5.0], [7.0, 5.0], [5.0, 7.0])), 1);
        assert_eq!(partition.len(), 2);
        assert_relative_eq!(partition.area(), 4.0, epsilon = 1e-12);
        assert_eq!(partition.hull().len(), 5);
    }

    #[test]
    fn overlapping_triangle_keeps_only_uncovered_pieces() {
        let mut partition = Partition::new();
        partition.insert(make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]));
        let added = partition.insert(make_triangle([2.0, -1.0], [2.0, 5.0], [5.0, 2.0]));

        assert!(added >= 2);
        assert_relative_eq!(partition.area(), 8.0 + 9.0 - 1.75, epsilon = 1e-6);
        for (i, a) in partition.triangles().iter().enumerate() {
            for b in &partition.triangles()[i + 1..] {
                let mut out = Vec::new();
                assert_eq!(clip(a, b, &mut out), ClipOutcome::Outside);
            }
        }
    }

    #[test]
    fn covered_triangle_adds_nothing() {
        let mut partition = Partition::new();
        partition.insert(make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0]));
        assert_eq!(partition.insert(make_triangle([1.0, 1.0], [2.0, 1.0], [1.0, 2.0])), 0);
        assert_eq!(partition.insert(make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0])), 0);
        assert_eq!(partition.len(), 1);
    }

    #[test]
    fn covering_triangle_replaces_existing() {
        let mut partition = Partition::new();
        partition.insert(make_triangle([1.0, 1.0], [2.0, 1.0], [1.0, 2.0]));
        assert_eq!(partition.insert(make_triangle([0.0, 0.0], [10.0, 0.0], [0.0, 10.0])), 1);
        assert_eq!(partition.len(), 1);
        assert_relative_eq!(partition.area(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn publish_sends_hull_outline() {
        let partition = Partition::from_triangles([make_triangle([0.0, 0.0], [2.0, 0.0], [0.0, 2.0])]);
        let mut sink = CollectingSink::new();
        partition.publish(&mut sink);
        assert_eq!(sink.triangles().len(), 1);
        assert_eq!(sink.segments().len(), 3);
    }
}
