//! Triangle representation with canonical vertex ordering.

use crate::{cross, point_cmp, points_close, GeometryError, LineSegment, Point, EPSILON_LEN};

/// Tolerance on barycentric coordinates for on-edge classification.
pub const EPSILON_BARY: f64 = 2e-7;

/// Where a point lies relative to a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
    Outside = -1,
    Edge = 0,
    Inside = 1,
}

/// A non-degenerate triangle in the plane.
///
/// Vertices are stored sorted by x (ties by y), so any rotation or
/// permutation of the same three points builds the same triangle. Edges are
/// numbered from that order: edge 0 joins v0 and v1, edge 1 joins v1 and v2,
/// and edge 2 joins v2 and v0. Edge 2 always spans the full x-range.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
    edges: [LineSegment; 3],
}

impl Triangle {
    /// Creates a triangle from three points.
    ///
    /// Fails with [`GeometryError::Degenerate`] if two vertices coincide
    /// within [`EPSILON_LEN`] or if a vertex lies within [`EPSILON_LEN`] of
    /// the line through the other two.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        let mut vertices = [a, b, c];
        vertices.sort_by(point_cmp);
        let [v0, v1, v2] = vertices;

        let edges = [
            LineSegment::new(v0, v1)?,
            LineSegment::new(v1, v2)?,
            LineSegment::new(v2, v0)?,
        ];

        let longest = edges
            .iter()
            .map(LineSegment::length)
            .fold(0.0_f64, f64::max);
        let twice_area = cross(&v0, &v1, &v2).abs();
        if twice_area / longest <= EPSILON_LEN {
            return Err(GeometryError::degenerate("triangle vertices are collinear", v1));
        }

        Ok(Self { vertices, edges })
    }

    /// Creates a triangle from an array of three points.
    #[inline]
    pub fn from_points(points: [Point; 3]) -> Result<Self, GeometryError> {
        let [a, b, c] = points;
        Self::new(a, b, c)
    }

    /// Returns the vertices in canonical order.
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Returns the three edges, indexed as described on [`Triangle`].
    #[inline]
    pub fn edges(&self) -> &[LineSegment; 3] {
        &self.edges
    }

    /// Returns one edge by index (0, 1 or 2).
    #[inline]
    pub fn edge(&self, index: usize) -> &LineSegment {
        &self.edges[index]
    }

    /// Returns the vertices in counter-clockwise order, starting at v0.
    pub fn ccw_vertices(&self) -> [Point; 3] {
        let [a, b, c] = self.vertices;
        if cross(&a, &b, &c) >= 0.0 {
            [a, b, c]
        } else {
            [a, c, b]
        }
    }

    /// Computes the (unsigned) area.
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        cross(a, b, c).abs() / 2.0
    }

    /// Computes the centroid.
    pub fn centroid(&self) -> Point {
        let [a, b, c] = &self.vertices;
        Point::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Smallest x of the triangle (the x of v0).
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.vertices[0].x
    }

    /// Largest x of the triangle (the x of v2).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.vertices[2].x
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bbox(&self) -> (Point, Point) {
        let ys = self.vertices.map(|v| v.y);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (
            Point::new(self.min_x(), min_y),
            Point::new(self.max_x(), max_y),
        )
    }

    /// Returns `true` if the bounding boxes overlap (touching counts).
    pub fn bbox_overlaps(&self, other: &Triangle) -> bool {
        let (a_min, a_max) = self.bbox();
        let (b_min, b_max) = other.bbox();
        a_min.x <= b_max.x + EPSILON_LEN
            && b_min.x <= a_max.x + EPSILON_LEN
            && a_min.y <= b_max.y + EPSILON_LEN
            && b_min.y <= a_max.y + EPSILON_LEN
    }

    /// Returns `true` if both triangles have the same three vertices within tolerance.
    pub fn same_vertices(&self, other: &Triangle) -> bool {
        self.vertices
            .iter()
            .all(|v| other.vertices.iter().any(|w| points_close(v, w)))
    }

    /// Returns a copy scaled by `factor` about the centroid.
    pub fn scaled(&self, factor: f64) -> Result<Triangle, GeometryError> {
        let c = self.centroid();
        let [a, b, d] = self.vertices.map(|v| c + (v - c) * factor);
        Triangle::new(a, b, d)
    }

    /// Classifies a point with [`EPSILON_BARY`].
    #[inline]
    pub fn contains_point(&self, point: &Point) -> PointLocation {
        self.contains_point_with_epsilon(point, EPSILON_BARY)
    }

    /// Classifies a point using barycentric coordinates and a custom tolerance.
    ///
    /// A coordinate within `epsilon` of zero while the others are
    /// non-negative puts the point on an edge; all coordinates strictly
    /// positive put it inside; any coordinate below `-epsilon` puts it
    /// outside.
    pub fn contains_point_with_epsilon(&self, point: &Point, epsilon: f64) -> PointLocation {
        let [a, b, c] = &self.vertices;
        let v0 = b - a;
        let v1 = c - a;
        let v2 = point - a;

        let denom = v0.perp(&v1);
        if denom.abs() <= f64::EPSILON {
            return PointLocation::Outside;
        }

        let beta = v2.perp(&v1) / denom;
        let gamma = v0.perp(&v2) / denom;
        let alpha = 1.0 - beta - gamma;
        let bary = [alpha, beta, gamma];

        if bary.iter().any(|&w| w < -epsilon) {
            PointLocation::Outside
        } else if bary.iter().any(|&w| w <= epsilon) {
            PointLocation::Edge
        } else {
            PointLocation::Inside
        }
    }

    /// Returns `true` if `other` lies within this triangle.
    ///
    /// Every vertex of `other` must be inside or on the boundary, and at
    /// least one strictly inside, so triangles that only share boundary
    /// points never contain each other.
    pub fn contains_triangle(&self, other: &Triangle) -> bool {
        let mut strictly_inside = false;
        for vertex in &other.vertices {
            match self.contains_point(vertex) {
                PointLocation::Outside => return false,
                PointLocation::Inside => strictly_inside = true,
                PointLocation::Edge => {}
            }
        }
        strictly_inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn vertices_sorted_by_x() {
        let t = make_triangle([4.0, 0.0], [0.0, 4.0], [0.0, 0.0]);
        assert_eq!(
            t.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
                Point::new(4.0, 0.0)
            ]
        );
        assert_eq!(t.min_x(), 0.0);
        assert_eq!(t.max_x(), 4.0);
    }

    #[test]
    fn canonical_order_is_rotation_invariant() {
        let p = [
            Point::new(1.0, 2.0),
            Point::new(5.0, -1.0),
            Point::new(3.0, 6.0),
        ];
        let base = Triangle::new(p[0], p[1], p[2]).unwrap();
        for shift in 1..3 {
            let t = Triangle::new(p[shift], p[(shift + 1) % 3], p[(shift + 2) % 3]).unwrap();
            assert_eq!(t.vertices(), base.vertices());
            assert_eq!(t.edges(), base.edges());
        }
        let reversed = Triangle::new(p[2], p[1], p[0]).unwrap();
        assert_eq!(reversed.edges(), base.edges());
    }

    #[test]
    fn edge_two_spans_full_x_range() {
        let t = make_triangle([0.0, 0.0], [2.0, 3.0], [5.0, 1.0]);
        let e2 = t.edge(2);
        assert_eq!(e2.start(), Point::new(0.0, 0.0));
        assert_eq!(e2.end(), Point::new(5.0, 1.0));
    }

    #[test]
    fn coincident_vertices_are_degenerate() {
        let result = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0 + 1e-7, 1.0),
        );
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn collinear_vertices_are_degenerate() {
        let result = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        );
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn area_and_centroid() {
        let t = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
        assert_relative_eq!(t.area(), 8.0);
        let c = t.centroid();
        assert_relative_eq!(c.x, 4.0 / 3.0);
        assert_relative_eq!(c.y, 4.0 / 3.0);
    }

    #[test]
    fn ccw_vertices_have_positive_orientation() {
        let t = make_triangle([0.0, 0.0], [1.0, 3.0], [2.0, 0.0]);
        let [a, b, c] = t.ccw_vertices();
        assert!(cross(&a, &b, &c) > 0.0);
    }

    #[test]
    fn contains_point_classification() {
        let t = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
        assert_eq!(t.contains_point(&Point::new(1.0, 1.0)), PointLocation::Inside);
        assert_eq!(t.contains_point(&Point::new(2.0, 0.0)), PointLocation::Edge);
        assert_eq!(t.contains_point(&Point::new(2.0, 2.0)), PointLocation::Edge);
        assert_eq!(t.contains_point(&Point::new(0.0, 0.0)), PointLocation::Edge);
        assert_eq!(t.contains_point(&Point::new(3.0, 3.0)), PointLocation::Outside);
        assert_eq!(t.contains_point(&Point::new(-0.1, 1.0)), PointLocation::Outside);
    }

    #[test]
    fn contains_triangle_requires_a_strict_interior_vertex() {
        let big = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
        let small = make_triangle([0.5, 0.5], [1.0, 0.5], [0.5, 1.0]);
        assert!(big.contains_triangle(&small));
        assert!(!small.contains_triangle(&big));

        // Shares only boundary points with `big`.
        let inscribed = make_triangle([2.0, 0.0], [2.0, 2.0], [0.0, 2.0]);
        assert!(!big.contains_triangle(&inscribed));

        // Same triangle: every vertex is on the boundary.
        assert!(!big.contains_triangle(&big.clone()));
    }

    #[test]
    fn same_vertices_ignores_input_order() {
        let a = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
        let b = make_triangle([0.0, 4.0], [0.0, 0.0], [4.0, 0.0]);
        let c = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 5.0]);
        assert!(a.same_vertices(&b));
        assert!(!a.same_vertices(&c));
    }

    #[test]
    fn scaled_shrinks_about_centroid() {
        let t = make_triangle([0.0, 0.0], [6.0, 0.0], [0.0, 6.0]);
        let s = t.scaled(0.1).unwrap();
        assert_relative_eq!(s.area(), t.area() * 0.01, epsilon = 1e-12);
        assert!(t.contains_triangle(&s));
    }
}
