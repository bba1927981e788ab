//! Shared visualization utilities for the sweep demos.

use std::hash::{Hash, Hasher};

use macroquad::prelude::*;
use nalgebra::Vector2;
use tri_sweep::{GeometrySink, LineSegment, Point, RenderTriangle};

/// Generates a deterministic color for a triangle.
///
/// Triangles carrying a render index are colored by that index, so the
/// largest piece of a clipped triangle keeps the original's color; other
/// pieces are colored by hashing their vertices.
pub fn triangle_color(triangle: &RenderTriangle) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    match triangle.render_index {
        Some(index) => index.hash(&mut hasher),
        None => {
            for v in triangle.triangle.vertices() {
                v.x.to_bits().hash(&mut hasher);
                v.y.to_bits().hash(&mut hasher);
            }
        }
    }
    let hash = hasher.finish();

    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Keep colors readable on the dark background.
    Color::from_rgba(r.max(60), g.max(60), b.max(60), 200)
}

/// Maps scene coordinates onto the window, y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct View {
    origin: Vector2<f64>,
    scale: f64,
}

impl View {
    /// Fits the given points into the current window with a margin in pixels.
    pub fn fit(points: impl IntoIterator<Item = Point>, margin: f32) -> Self {
        let (mut lo, mut hi) = (
            Vector2::new(f64::INFINITY, f64::INFINITY),
            Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        );
        for p in points {
            lo = lo.inf(&p.coords);
            hi = hi.sup(&p.coords);
        }
        if lo.x > hi.x {
            lo = Vector2::zeros();
            hi = Vector2::new(1.0, 1.0);
        }
        let extent = (hi - lo).map(|v| v.max(1e-9));
        let width = f64::from(screen_width() - 2.0 * margin);
        let height = f64::from(screen_height() - 2.0 * margin);
        let scale = (width / extent.x).min(height / extent.y);
        let origin = lo - Vector2::new(f64::from(margin), f64::from(margin)) / scale;
        Self { origin, scale }
    }

    /// Converts a scene point to screen pixels.
    pub fn to_screen(&self, p: &Point) -> Vec2 {
        let v = (p.coords - self.origin) * self.scale;
        vec2(v.x as f32, screen_height() - v.y as f32)
    }

    /// Draws the vertical sweep line at scene coordinate `x`.
    pub fn draw_sweep_line(&self, x: f64) {
        let top = self.to_screen(&Point::new(x, self.origin.y));
        draw_line(top.x, 0.0, top.x, screen_height(), 1.0, YELLOW);
    }
}

/// Geometry sink that keeps the last committed snapshot for drawing.
#[derive(Debug, Default)]
pub struct MacroquadSink {
    staged_triangles: Vec<RenderTriangle>,
    staged_segments: Vec<LineSegment>,
    triangles: Vec<RenderTriangle>,
    segments: Vec<LineSegment>,
}

impl MacroquadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles in the last snapshot.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Every vertex of the last snapshot.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.triangles
            .iter()
            .flat_map(|t| t.triangle.vertices().iter().copied())
    }

    /// Draws the last snapshot: filled triangles, outlines, then segments.
    pub fn draw(&self, view: &View) {
        for t in &self.triangles {
            let [a, b, c] = t.triangle.vertices().map(|p| view.to_screen(&p));
            draw_triangle(a, b, c, triangle_color(t));
        }
        for t in &self.triangles {
            let [a, b, c] = t.triangle.vertices().map(|p| view.to_screen(&p));
            draw_triangle_lines(a, b, c, 1.0, Color::from_rgba(20, 20, 30, 255));
        }
        for s in &self.segments {
            let a = view.to_screen(&s.start());
            let b = view.to_screen(&s.end());
            draw_line(a.x, a.y, b.x, b.y, 2.0, WHITE);
        }
    }
}

impl GeometrySink for MacroquadSink {
    fn show_triangles(&mut self, triangles: &[RenderTriangle]) {
        self.staged_triangles.extend(triangles.iter().cloned());
    }

    fn show_segments(&mut self, segments: &[LineSegment]) {
        self.staged_segments.extend_from_slice(segments);
    }

    fn commit(&mut self) {
        self.triangles = std::mem::take(&mut self.staged_triangles);
        self.segments = std::mem::take(&mut self.staged_segments);
    }
}

/// Simple seeded random number generator (LCG).
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 33) as f64) / f64::from(u32::MAX / 2)
    }

    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

pub const WORLD_SIZE: f64 = 30.0;
pub const MIN_TRIANGLE_SIZE: f64 = 3.0;
pub const MAX_TRIANGLE_SIZE: f64 = 10.0;

/// Generates `count` random triangles around the origin.
///
/// Some of them may be degenerate; the consumers skip those.
pub fn random_triangles(seed: u64, count: usize) -> Vec<[Point; 3]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let cx = (rng.next_f64() - 0.5) * WORLD_SIZE;
            let cy = (rng.next_f64() - 0.5) * WORLD_SIZE;
            let size = rng.range(MIN_TRIANGLE_SIZE, MAX_TRIANGLE_SIZE);
            let turn = rng.next_f64() * std::f64::consts::TAU;
            [0.0, 1.0, 2.0].map(|k: f64| {
                let angle = turn + k * std::f64::consts::TAU / 3.0 + rng.range(-0.6, 0.6);
                let radius = size * rng.range(0.4, 1.0);
                Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
            })
        })
        .collect()
}
