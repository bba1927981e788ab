//! Working set of triangles keyed by stable identifiers.

use slotmap::SlotMap;

use crate::{Edge, Triangle};

slotmap::new_key_type! {
    /// Stable identifier of a triangle in a [`TriangleArena`].
    ///
    /// Edges and sweep events refer to triangles through this key, so a
    /// retired triangle leaves stale keys behind rather than dangling
    /// references.
    pub struct TriangleId;
}

#[derive(Debug, Clone)]
struct Slot {
    triangle: Triangle,
    render_index: Option<u32>,
}

/// Owns the triangles a resolver works on.
#[derive(Debug, Clone, Default)]
pub struct TriangleArena {
    slots: SlotMap<TriangleId, Slot>,
}

impl TriangleArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triangle and returns its identifier.
    pub fn insert(&mut self, triangle: Triangle, render_index: Option<u32>) -> TriangleId {
        self.slots.insert(Slot {
            triangle,
            render_index,
        })
    }

    /// Removes a triangle, returning it if it was present.
    pub fn remove(&mut self, id: TriangleId) -> Option<Triangle> {
        self.slots.remove(id).map(|slot| slot.triangle)
    }

    /// Returns the triangle for `id`, if it is still live.
    #[inline]
    pub fn get(&self, id: TriangleId) -> Option<&Triangle> {
        self.slots.get(id).map(|slot| &slot.triangle)
    }

    /// Returns `true` if `id` refers to a live triangle.
    #[inline]
    pub fn contains(&self, id: TriangleId) -> bool {
        self.slots.contains_key(id)
    }

    /// Returns the render index a sink assigned to the triangle.
    pub fn render_index(&self, id: TriangleId) -> Option<u32> {
        self.slots.get(id).and_then(|slot| slot.render_index)
    }

    /// Returns the three edges of a live triangle.
    pub fn edges(&self, id: TriangleId) -> Option<[Edge; 3]> {
        let slot = self.slots.get(id)?;
        Some(Edge::of_triangle(id, &slot.triangle, slot.render_index))
    }

    /// Returns the number of live triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no triangles are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over live triangles with their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
        self.slots.iter().map(|(id, slot)| (id, &slot.triangle))
    }

    /// Consumes the arena and returns the live triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.slots.into_iter().map(|(_, slot)| slot.triangle).collect()
    }

    /// Sum of the areas of all live triangles.
    pub fn total_area(&self) -> f64 {
        self.slots.values().map(|slot| slot.triangle.area()).sum()
    }
}
