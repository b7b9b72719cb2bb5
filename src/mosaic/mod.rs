//! Mosaic layouts: BSP tiling plus the moodboard engine that assigns items
//! to leaves, reflows non-destructively and reshuffles destructively

pub mod bsp;
pub mod engine;

pub use bsp::{min_leaf_side, tile, Region};
pub use engine::{relayout, shuffle};
