//! Directed supporting lines and side classification.

use nalgebra::Vector2;

use crate::{Point, EPSILON_LEN};

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// Point is to the left of the direction of travel.
    Left,
    /// Point is to the right of the direction of travel.
    Right,
    /// Point lies on the line (within tolerance).
    On,
}

/// An infinite directed line through `origin` along a unit `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    origin: Point,
    direction: Vector2<f64>,
}

impl Line {
    /// Creates the directed line from `from` towards `to`.
    ///
    /// Returns `None` if the points coincide within tolerance.
    pub fn through(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        let len = d.norm();
        if len <= EPSILON_LEN {
            return None;
        }
        Some(Self {
            origin: from,
            direction: d / len,
        })
    }

    /// Signed distance from the line, positive on the left.
    #[inline]
    pub fn signed_distance(&self, point: &Point) -> f64 {
        self.direction.perp(&(*point - self.origin))
    }

    /// Classifies a point using [`EPSILON_LEN`].
    #[inline]
    pub fn classify_point(&self, point: &Point) -> LineSide {
        self.classify_point_with_epsilon(point, EPSILON_LEN)
    }

    /// Classifies a point with a custom tolerance.
    pub fn classify_point_with_epsilon(&self, point: &Point, epsilon: f64) -> LineSide {
        let dist = self.signed_distance(point);
        if dist > epsilon {
            LineSide::Left
        } else if dist < -epsilon {
            LineSide::Right
        } else {
            LineSide::On
        }
    }

    /// Intersects the segment `start..end` with the line.
    ///
    /// Returns `Some((t, point))` with `t` in `[0, 1]`, or `None` if the
    /// segment is parallel to the line or misses it.
    pub fn intersect_segment(&self, start: Point, end: Point) -> Option<(f64, Point)> {
        let d_start = self.signed_distance(&start);
        let d_end = self.signed_distance(&end);
        let denom = d_start - d_end;
        if denom.abs() <= f64::EPSILON {
            return None;
        }
        let t = d_start / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some((t, start + (end - start) * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn classify_left_right_on() {
        let line = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        assert_eq!(line.classify_point(&Point::new(0.5, 1.0)), LineSide::Left);
        assert_eq!(line.classify_point(&Point::new(0.5, -1.0)), LineSide::Right);
        assert_eq!(line.classify_point(&Point::new(7.0, 1e-7)), LineSide::On);
    }

    #[test]
    fn coincident_points_have_no_line() {
        assert!(Line::through(Point::new(1.0, 1.0), Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn intersect_segment_crossing() {
        let line = Line::through(Point::new(0.0, 1.0), Point::new(4.0, 1.0)).unwrap();
        let (t, p) = line
            .intersect_segment(Point::new(2.0, 0.0), Point::new(2.0, 4.0))
            .unwrap();
        assert_relative_eq!(t, 0.25, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn intersect_segment_parallel_or_missing() {
        let line = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
        assert!(line
            .intersect_segment(Point::new(0.0, 1.0), Point::new(5.0, 1.0))
            .is_none());
        assert!(line
            .intersect_segment(Point::new(0.0, 1.0), Point::new(0.0, 2.0))
            .is_none());
    }
}
