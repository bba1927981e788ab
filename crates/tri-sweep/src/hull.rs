//! Monotone-chain convex hulls and hull/triangle separation.

use crate::{cross, point_cmp, points_close, LineSegment, Point, Triangle, EPSILON_LEN};

/// Builds the convex hull of a point set.
///
/// Points are sorted by x (ties by y) and duplicates within [`EPSILON_LEN`]
/// removed. The first chain is built left to right and the second over the
/// reversed order; each pops while the last three points fail to turn left.
/// The result is counter-clockwise, starts at the lowest-x point, and
/// excludes collinear boundary points. Fewer than three distinct points are
/// returned as they are (sorted).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(point_cmp);
    sorted.dedup_by(|a, b| points_close(a, b));
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower = chain(sorted.iter());
    let mut upper = chain(sorted.iter().rev());

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Builds the convex hull of the endpoints of a set of segments.
pub fn hull_of_edges(edges: &[LineSegment]) -> Vec<Point> {
    let points: Vec<Point> = edges.iter().flat_map(|e| [e.start(), e.end()]).collect();
    convex_hull(&points)
}

/// One monotone chain over points already in sweep order.
fn chain<'a>(points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::new();
    for p in points {
        // The first two points seed the chain without a turn test.
        while stack.len() >= 2 && cross(&stack[stack.len() - 2], &stack[stack.len() - 1], p) <= 0.0
        {
            stack.pop();
        }
        stack.push(*p);
    }
    stack
}

/// Returns `true` if a separating line exists between a convex hull and a triangle.
///
/// Uses the separating-axis test over the edge normals of both shapes.
/// Shapes that only touch count as separated. An empty hull is separated
/// from everything.
pub fn separated(hull: &[Point], triangle: &Triangle) -> bool {
    if hull.is_empty() {
        return true;
    }
    let tri = triangle.ccw_vertices();
    axes(hull)
        .chain(axes(&tri))
        .any(|axis| {
            let (a_min, a_max) = project(hull, &axis);
            let (b_min, b_max) = project(&tri, &axis);
            a_max <= b_min + EPSILON_LEN || b_max <= a_min + EPSILON_LEN
        })
}

/// Unit normals of a polygon's edges.
fn axes(polygon: &[Point]) -> impl Iterator<Item = nalgebra::Vector2<f64>> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .filter_map(|(a, b)| {
            let d = b - a;
            let len = d.norm();
            (len > EPSILON_LEN).then(|| nalgebra::Vector2::new(-d.y, d.x) / len)
        })
}

fn project(polygon: &[Point], axis: &nalgebra::Vector2<f64>) -> (f64, f64) {
    polygon
        .iter()
        .map(|p| p.coords.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(c[0], c[1])).collect()
    }

    fn make_triangle(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> Triangle {
        Triangle::new(
            Point::new(a[0], a[1]),
            Point::new(b[0], b[1]),
            Point::new(c[0], c[1]),
        )
        .unwrap()
    }

    #[test]
    fn square_with_interior_point() {
        let points = pts(&[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [0.0, 2.0], [2.0, 0.0]]);
        let hull = convex_hull(&points);
        assert_eq!(
            hull,
            pts(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]])
        );
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let points = pts(&[[3.0, 1.0], [0.0, 0.0], [1.0, 4.0], [5.0, 2.0], [2.0, 2.0]]);
        let hull = convex_hull(&points);
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert!(cross(&a, &b, &c) > 0.0);
        }
    }

    #[test]
    fn collinear_and_duplicate_points_are_dropped() {
        let points = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 0.0], [1.0, 1.0]]);
        let hull = convex_hull(&points);
        assert_eq!(hull, pts(&[[0.0, 0.0], [2.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn tiny_inputs_pass_through() {
        assert!(convex_hull(&[]).is_empty());
        let two = pts(&[[1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(convex_hull(&two), pts(&[[0.0, 0.0], [1.0, 0.0]]));
    }

    #[test]
    fn hull_of_triangle_edges() {
        let a = make_triangle([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
        let b = make_triangle([1.0, 1.0], [5.0, 5.0], [3.0, 0.5]);
        let edges: Vec<LineSegment> = a.edges().iter().chain(b.edges()).copied().collect();
        let hull = hull_of_edges(&edges);
        assert_eq!(
            hull,
            pts(&[[0.0, 0.0], [4.0, 0.0], [5.0, 5.0], [0.0, 4.0]])
        );
    }

    #[test]
    fn separation_against_hull() {
        let hull = pts(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
        let far = make_triangle([5.0, 5.0], [6.0, 5.0], [5.0, 6.0]);
        let touching = make_triangle([2.0, 0.0], [4.0, 0.0], [2.0, 2.0]);
        let overlapping = make_triangle([1.0, 1.0], [4.0, 1.0], [1.0, 4.0]);
        // Bounding boxes overlap but a diagonal axis separates them.
        let diagonal = make_triangle([3.0, 1.5], [1.5, 3.0], [3.0, 3.0]);

        assert!(separated(&hull, &far));
        assert!(separated(&hull, &touching));
        assert!(!separated(&hull, &overlapping));
        assert!(separated(&hull, &diagonal));
        assert!(separated(&[], &far));
    }
}
