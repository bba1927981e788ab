//! Output port for presenting intermediate and final geometry.
//!
//! Sinks let a renderer (or a test) observe a resolver without the core
//! depending on any drawing library.

use crate::{LineSegment, Triangle};

/// A triangle together with the render index a sink should draw it with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTriangle {
    pub triangle: Triangle,
    pub render_index: Option<u32>,
}

/// Receiver of geometry snapshots.
///
/// A snapshot is built from any number of `show_*` calls and completed by
/// [`commit`](Self::commit).
pub trait GeometrySink {
    /// Stages the current set of triangles.
    fn show_triangles(&mut self, triangles: &[RenderTriangle]);

    /// Stages auxiliary segments, such as the active edges.
    fn show_segments(&mut self, segments: &[LineSegment]);

    /// Completes the snapshot.
    fn commit(&mut self);
}

/// A sink that keeps the last committed snapshot.
#[derive(Debug, Default)]
pub struct CollectingSink {
    staged_triangles: Vec<RenderTriangle>,
    staged_segments: Vec<LineSegment>,
    triangles: Vec<RenderTriangle>,
    segments: Vec<LineSegment>,
    commits: usize,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles of the last committed snapshot.
    pub fn triangles(&self) -> &[RenderTriangle] {
        &self.triangles
    }

    /// Segments of the last committed snapshot.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Number of snapshots committed so far.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Sum of the areas of the last committed triangles.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(|t| t.triangle.area()).sum()
    }
}

impl GeometrySink for CollectingSink {
    fn show_triangles(&mut self, triangles: &[RenderTriangle]) {
        self.staged_triangles.extend(triangles.iter().cloned());
    }

    fn show_segments(&mut self, segments: &[LineSegment]) {
        self.staged_segments.extend_from_slice(segments);
    }

    fn commit(&mut self) {
        self.triangles = std::mem::take(&mut self.staged_triangles);
        self.segments = std::mem::take(&mut self.staged_segments);
        self.commits += 1;
    }
}
