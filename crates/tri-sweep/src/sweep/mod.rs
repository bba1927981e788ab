//! Plane sweep that turns overlapping triangles into a non-overlapping set.
//!
//! A vertical sweep line moves left to right over the edge endpoints. The
//! edges it currently crosses are kept ordered bottom to top. Whenever a
//! triangle reaches the sweep line it is compared with every other triangle
//! that has an edge on the line: a contained triangle is retired, and
//! overlapping triangles are resolved by clipping the later one against the
//! earlier one.
//!
//! # Example
//!
//! ```
//! use tri_sweep::{CollectingSink, PlaneSweep, SweepStatus, Point};
//!
//! let mut sweep = PlaneSweep::new();
//! sweep.add_batch([
//!     [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)],
//!     [Point::new(1.0, 1.0), Point::new(6.0, 1.0), Point::new(1.0, 6.0)],
//! ]);
//!
//! // Step one event group at a time, drawing in between.
//! let mut sink = CollectingSink::new();
//! while sweep.step() == SweepStatus::Running {
//!     sweep.publish(&mut sink);
//! }
//! assert_eq!(sweep.active_edges().len(), 0);
//! ```
//!
//! # Architecture
//!
//! - [`PlaneSweep`]: The resumable resolver
//! - [`ActiveEdges`]: Edges crossing the sweep line, ordered by [`SweepOrder`]
//! - [`OrderedTree`]: AVL tree whose order is injected through a [`Comparator`]
//! - [`EventQueue`]: Pending start, end and crossing events

mod active;
mod event;
mod resolver;
mod tree;

pub use active::{ActiveEdges, SweepOrder};
pub use event::{EventKind, EventQueue, VertexEvent};
pub use resolver::{PlaneSweep, SweepStatus};
pub use tree::{Comparator, Iter, OrderedTree};
