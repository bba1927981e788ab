//! Triangle partitioning in the plane.
//!
//! Turns a set of possibly overlapping triangles into triangles with
//! pairwise disjoint interiors covering the same area. Two strategies are
//! provided: [`Partition`] clips each new triangle against the ones already
//! kept, and [`PlaneSweep`] resolves overlaps as a vertical sweep line
//! discovers them.

mod arena;
mod clip;
mod edge;
mod error;
mod hull;
mod line;
mod partition;
mod point;
mod segment;
mod sink;
pub mod sweep;
mod triangle;

pub use arena::{TriangleArena, TriangleId};
pub use clip::{clip, overlap_area, probe_crossings, ClipOutcome};
pub use edge::Edge;
pub use error::GeometryError;
pub use hull::{convex_hull, hull_of_edges, separated};
pub use line::{Line, LineSide};
pub use partition::Partition;
pub use point::{cross, point_cmp, points_close, polygon_area, Point, EPSILON_AREA, EPSILON_LEN};
pub use segment::{LineSegment, SegmentIntersection};
pub use sink::{CollectingSink, GeometrySink, RenderTriangle};
pub use sweep::{PlaneSweep, SweepStatus};
pub use triangle::{PointLocation, Triangle, EPSILON_BARY};
