//! Canonicalized line segments and segment/segment intersection.

use nalgebra::Vector2;

use crate::{GeometryError, Point, EPSILON_LEN, points_close};

/// Below this |sin(angle)| two segments are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-10;

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// No single intersection point. Also returned for parallel and
    /// coincident segments, which are ambiguous.
    None,
    /// The segments meet at an endpoint of at least one of them.
    Touching(Point),
    /// The segments cross at a point interior to both.
    Crossing(Point),
}

impl SegmentIntersection {
    /// Returns the intersection point, if any.
    #[inline]
    pub fn point(&self) -> Option<Point> {
        match *self {
            SegmentIntersection::None => None,
            SegmentIntersection::Touching(p) | SegmentIntersection::Crossing(p) => Some(p),
        }
    }

    /// Returns `true` for a proper crossing.
    #[inline]
    pub fn is_crossing(&self) -> bool {
        matches!(self, SegmentIntersection::Crossing(_))
    }
}

/// A line segment whose start precedes its end.
///
/// Start comes first in x; when both x values agree within [`EPSILON_LEN`]
/// the lower y comes first. Start and end never coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    /// Creates a canonicalized segment between two points.
    ///
    /// Fails with [`GeometryError::Degenerate`] if the points coincide.
    pub fn new(a: Point, b: Point) -> Result<Self, GeometryError> {
        if points_close(&a, &b) {
            return Err(GeometryError::degenerate("segment endpoints coincide", a));
        }
        let a_first = if (b.x - a.x).abs() <= EPSILON_LEN {
            a.y <= b.y
        } else {
            a.x < b.x
        };
        Ok(if a_first {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        })
    }

    /// Returns the start point (the leftmost endpoint).
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point (the rightmost endpoint).
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the vector from start to end.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` if start and end share an x value within tolerance.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        (self.end.x - self.start.x).abs() <= EPSILON_LEN
    }

    /// Returns dy/dx. Vertical segments report positive infinity.
    pub fn slope(&self) -> f64 {
        if self.is_vertical() {
            f64::INFINITY
        } else {
            let d = self.direction();
            d.y / d.x
        }
    }

    /// Evaluates the y value of the supporting line at `x`.
    ///
    /// Exact at both endpoints. Vertical segments report the start y.
    pub fn calc_y(&self, x: f64) -> f64 {
        if self.is_vertical() || x == self.start.x {
            self.start.y
        } else if x == self.end.x {
            self.end.y
        } else {
            self.start.y + (x - self.start.x) * self.slope()
        }
    }

    /// Returns `true` if the x-ranges of the two segments overlap within tolerance.
    #[inline]
    pub fn x_overlaps(&self, other: &LineSegment) -> bool {
        self.start.x <= other.end.x + EPSILON_LEN && other.start.x <= self.end.x + EPSILON_LEN
    }

    /// Returns `true` if `x` lies strictly between the endpoints' x values.
    #[inline]
    pub fn straddles(&self, x: f64) -> bool {
        self.start.x < x && x < self.end.x
    }

    /// Returns a copy scaled about its midpoint by `factor`.
    ///
    /// Used to probe the supporting line of a short edge.
    pub fn extended(&self, factor: f64) -> LineSegment {
        let mid = nalgebra::center(&self.start, &self.end);
        let half = self.direction() * (factor / 2.0);
        Self {
            start: mid - half,
            end: mid + half,
        }
    }

    /// Intersects two segments.
    ///
    /// Parallel and coincident segments return [`SegmentIntersection::None`];
    /// callers must resolve those with containment tests.
    pub fn intersect(&self, other: &LineSegment) -> SegmentIntersection {
        if !self.x_overlaps(other) {
            return SegmentIntersection::None;
        }

        let r = self.direction();
        let s = other.direction();
        let r_len = r.norm();
        let s_len = s.norm();
        let denom = r.perp(&s);
        if denom.abs() <= PARALLEL_EPSILON * r_len * s_len {
            return SegmentIntersection::None;
        }

        let qp = other.start - self.start;
        let t = qp.perp(&s) / denom;
        let u = qp.perp(&r) / denom;

        let tol_t = EPSILON_LEN / r_len;
        let tol_u = EPSILON_LEN / s_len;
        if t < -tol_t || t > 1.0 + tol_t || u < -tol_u || u > 1.0 + tol_u {
            return SegmentIntersection::None;
        }

        let point = self.start + r * t.clamp(0.0, 1.0);
        let interior_t = t > tol_t && t < 1.0 - tol_t;
        let interior_u = u > tol_u && u < 1.0 - tol_u;
        if interior_t && interior_u {
            SegmentIntersection::Crossing(point)
        } else {
            SegmentIntersection::Touching(point)
        }
    }
}
