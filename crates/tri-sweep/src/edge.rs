//! Triangle edges as seen by the sweep.

use crate::{LineSegment, Triangle, TriangleId};

/// One side of a specific triangle.
///
/// Holds its own copy of the segment, so ordering an edge never needs the
/// owning triangle; the triangle is only referenced through its id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    segment: LineSegment,
    triangle: TriangleId,
    index: u8,
    /// Index used by geometry sinks. Not interpreted by the core.
    pub render_index: Option<u32>,
}

impl Edge {
    /// Binds a segment to side `index` of `triangle`.
    pub fn new(segment: LineSegment, triangle: TriangleId, index: usize) -> Self {
        debug_assert!(index < 3, "Edge index must be 0, 1 or 2");
        Self {
            segment,
            triangle,
            index: index as u8,
            render_index: None,
        }
    }

    /// Returns the three edges of a triangle, in index order.
    pub fn of_triangle(id: TriangleId, triangle: &Triangle, render_index: Option<u32>) -> [Edge; 3] {
        let edges = triangle.edges();
        [0, 1, 2].map(|i| Edge {
            render_index,
            ..Edge::new(edges[i], id, i)
        })
    }

    /// Returns the segment.
    #[inline]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    /// Returns the owning triangle's id.
    #[inline]
    pub fn triangle(&self) -> TriangleId {
        self.triangle
    }

    /// Returns which side of the triangle this is.
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Returns `true` if both refer to the same side of the same triangle.
    #[inline]
    pub fn same_as(&self, other: &Edge) -> bool {
        self.triangle == other.triangle && self.index == other.index
    }
}
