//! moodgrid - spatial layout and packing engine for a grid moodboard
//!
//! Items are rectangles on a large fixed cell grid. This crate places new
//! rectangles without overlap, re-tiles a whole board into an aspect-aware
//! mosaic, resizes rectangles by dragging shared boundaries, and greedily
//! closes gaps. Rendering, input handling, persistence and undo are external
//! collaborators: every entry point is a pure function from an item list
//! plus parameters to a new item list.
//!
//! # Example
//!
//! ```rust
//! use moodgrid::{place, GridRect, StrategyPolicy};
//!
//! // First item on an empty 10x10 board spawns at the canvas center
//! let rect = place(&[], 2, 2, 10, 10, StrategyPolicy::Packed).unwrap();
//! assert_eq!(rect, GridRect::new(4, 4, 2, 2));
//! ```

pub mod edge;
pub mod error;
pub mod gap;
pub mod grid;
pub mod mosaic;
pub mod occupancy;
pub mod placement;
pub mod render;
pub mod scene;

pub use edge::{Edge, ShiftOutcome};
pub use error::BoardError;
pub use grid::{GridRect, Item, ItemKind, ASPECT_MAX, ASPECT_MIN, GUTTER};
pub use occupancy::OccupancyIndex;
pub use placement::StrategyPolicy;
pub use scene::{Canvas, Scene};

use rand::Rng;

/// Find a spot for a new `new_w` by `new_h` rectangle, or `None` when no
/// strategy (including its fallbacks) can place it.
pub fn place(
    items: &[Item],
    new_w: i32,
    new_h: i32,
    w: i32,
    h: i32,
    policy: StrategyPolicy,
) -> Option<GridRect> {
    placement::find_placement(policy, items, new_w, new_h, w, h)
}

/// Non-destructive mosaic reflow: keep item order, recompute geometry.
/// Ids are preserved; the input list is never mutated.
pub fn relayout<R: Rng>(items: &[Item], w: i32, h: i32, intensity: f64, rng: &mut R) -> Vec<Item> {
    mosaic::relayout(items, w, h, intensity, rng)
}

/// Destructive mosaic reshuffle: randomize order, lay out, stretch to the
/// canvas edges, and validate with a bounded retry chain.
pub fn shuffle<R: Rng>(items: &[Item], w: i32, h: i32, intensity: f64, rng: &mut R) -> Vec<Item> {
    mosaic::shuffle(items, w, h, intensity, rng)
}

/// Shift the shared boundary under one item's edge by up to `delta` cells,
/// keeping every affected item at least one cell wide and inside the canvas.
pub fn shift_edge(
    items: &[Item],
    id: &str,
    edge: Edge,
    delta: i32,
    w: i32,
    h: i32,
) -> ShiftOutcome {
    edge::shift_edge(items, id, edge, delta, w, h)
}

/// Grow every item greedily toward the canvas edges
pub fn grow_to_edges(items: &[Item], w: i32, h: i32) -> Vec<Item> {
    gap::grow_to_edges(items, w, h)
}

/// Grow every item greedily toward the tight bounding box of the item set
pub fn grow_to_bounding_box(items: &[Item], w: i32, h: i32) -> Vec<Item> {
    gap::grow_to_bounding_box(items, w, h)
}
