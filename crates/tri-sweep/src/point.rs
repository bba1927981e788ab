//! Point helpers and length tolerances.

use std::cmp::Ordering;

use nalgebra::Point2;

/// A point in the plane.
pub type Point = Point2<f64>;

/// Points closer than this are considered the same point.
pub const EPSILON_LEN: f64 = 2e-5;

/// Areas at or below this are considered zero.
pub const EPSILON_AREA: f64 = EPSILON_LEN * EPSILON_LEN;

/// Lexicographic order: x first, then y.
///
/// This is an exact order (no tolerance) so it can back ordered containers.
#[inline]
pub fn point_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Returns `true` if the two points coincide within [`EPSILON_LEN`].
#[inline]
pub fn points_close(a: &Point, b: &Point) -> bool {
    (a - b).norm_squared() <= EPSILON_LEN * EPSILON_LEN
}

/// Twice the signed area of the triangle `(o, a, b)`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise).
#[inline]
pub fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Signed area of a simple polygon given in order (positive when CCW).
pub fn polygon_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let origin = vertices[0];
    vertices
        .windows(2)
        .skip(1)
        .map(|w| cross(&origin, &w[0], &w[1]))
        .sum::<f64>()
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_order_is_x_then_y() {
        let a = Point::new(0.0, 5.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 2.0);
        assert_eq!(point_cmp(&a, &b), Ordering::Less);
        assert_eq!(point_cmp(&b, &c), Ordering::Less);
        assert_eq!(point_cmp(&c, &c), Ordering::Equal);
    }

    #[test]
    fn close_points_within_tolerance() {
        let a = Point::new(1.0, 1.0);
        assert!(points_close(&a, &Point::new(1.0 + 1e-6, 1.0)));
        assert!(!points_close(&a, &Point::new(1.0 + 1e-4, 1.0)));
    }

    #[test]
    fn cross_sign_follows_turn_direction() {
        let o = Point::new(0.0, 0.0);
        let a = Point::new(1.0, 0.0);
        assert!(cross(&o, &a, &Point::new(1.0, 1.0)) > 0.0);
        assert!(cross(&o, &a, &Point::new(1.0, -1.0)) < 0.0);
        assert_eq!(cross(&o, &a, &Point::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn polygon_area_of_unit_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!((polygon_area(&square) - 1.0).abs() < 1e-12);
    }
}
