//! Shared-boundary drag solver
//!
//! Dragging one edge of an item moves the whole boundary line it sits on:
//! every item ending on that line grows or shrinks with it, and every item
//! starting on that line is translated and resized so its far edge stays
//! anchored. The requested delta is clamped to the intersection of each
//! member's feasible interval, so no extent ever drops below one cell and
//! nothing leaves the canvas. Designed for repeated incremental calls during
//! a drag: each call takes the committed state plus a delta and reports the
//! delta actually applied.

use crate::grid::Item;

/// Which edge of the dragged item moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    fn horizontal(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

/// Result of a boundary shift
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftOutcome {
    pub items: Vec<Item>,
    /// The delta actually applied after clamping; 0 means a no-op
    pub applied: i32,
}

/// Shift the boundary under `id`'s `edge` by up to `delta` cells. Positive
/// delta always moves toward increasing coordinates. Unknown ids and
/// one-sided boundaries are no-ops (nothing is applied).
pub fn shift_edge(items: &[Item], id: &str, edge: Edge, delta: i32, w: i32, h: i32) -> ShiftOutcome {
    let noop = || ShiftOutcome {
        items: items.to_vec(),
        applied: 0,
    };
    if w <= 0 || h <= 0 {
        return noop();
    }
    let Some(dragged) = items.iter().find(|i| i.id == id) else {
        return noop();
    };

    let boundary = match edge {
        Edge::Left => dragged.rect.x,
        Edge::Right => dragged.rect.right(),
        Edge::Top => dragged.rect.y,
        Edge::Bottom => dragged.rect.bottom(),
    };
    let max_coord = if edge.horizontal() { w - 1 } else { h - 1 };

    // Growers end on the line; shrinkers start on it with their far edge
    // anchored. The drag direction is irrelevant to the grouping.
    let axis = |item: &Item| {
        if edge.horizontal() {
            (item.rect.x, item.rect.w)
        } else {
            (item.rect.y, item.rect.h)
        }
    };
    let growers: Vec<usize> = (0..items.len())
        .filter(|&i| {
            let (pos, extent) = axis(&items[i]);
            pos + extent == boundary
        })
        .collect();
    let shrinkers: Vec<usize> = (0..items.len())
        .filter(|&i| axis(&items[i]).0 == boundary)
        .collect();
    if growers.is_empty() || shrinkers.is_empty() {
        return noop();
    }

    // Intersect every member's feasible signed-delta interval
    let mut lo = i32::MIN;
    let mut hi = i32::MAX;
    for &i in &growers {
        let (_, extent) = axis(&items[i]);
        lo = lo.max(1 - extent);
        hi = hi.min(max_coord - boundary);
    }
    for &i in &shrinkers {
        let (pos, extent) = axis(&items[i]);
        lo = lo.max(-pos);
        hi = hi.min(extent - 1).min(max_coord - (pos + extent));
    }

    let applied = delta.clamp(lo.min(0), hi.max(0));
    if applied == 0 {
        return noop();
    }

    let mut out = items.to_vec();
    for &i in &growers {
        if edge.horizontal() {
            out[i].rect.w += applied;
        } else {
            out[i].rect.h += applied;
        }
    }
    for &i in &shrinkers {
        if edge.horizontal() {
            out[i].rect.x += applied;
            out[i].rect.w -= applied;
        } else {
            out[i].rect.y += applied;
            out[i].rect.h -= applied;
        }
    }
    ShiftOutcome {
        items: out,
        applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridRect, ItemKind};

    fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> Item {
        Item::new(id, ItemKind::Image, GridRect::new(x, y, w, h))
    }

    #[test]
    fn test_shared_vertical_boundary_clamps_per_formula() {
        // Left group 0..4, right group 4..8 on a 10-wide canvas. The right
        // group's far edge at 8 against max coordinate 9 leaves 1 cell.
        let items = vec![item("l", 0, 0, 4, 4), item("r", 4, 0, 4, 4)];
        let out = shift_edge(&items, "l", Edge::Right, 10, 10, 10);
        assert_eq!(out.applied, 1);
        assert_eq!(out.items[0].rect, GridRect::new(0, 0, 5, 4));
        assert_eq!(out.items[1].rect, GridRect::new(5, 0, 3, 4));
        // Far boundaries stay anchored
        assert_eq!(out.items[1].rect.right(), 8);
    }

    #[test]
    fn test_negative_delta_bounded_by_one_cell_floor() {
        let items = vec![item("l", 0, 0, 4, 4), item("r", 4, 0, 4, 4)];
        let out = shift_edge(&items, "l", Edge::Right, -10, 10, 10);
        // Grower can shrink to 1 cell at most
        assert_eq!(out.applied, -3);
        assert_eq!(out.items[0].rect, GridRect::new(0, 0, 1, 4));
        assert_eq!(out.items[1].rect, GridRect::new(1, 0, 7, 4));
    }

    #[test]
    fn test_one_sided_boundary_is_noop() {
        let items = vec![item("l", 0, 0, 4, 4)];
        let out = shift_edge(&items, "l", Edge::Right, 3, 10, 10);
        assert_eq!(out.applied, 0);
        assert_eq!(out.items, items);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let items = vec![item("l", 0, 0, 4, 4), item("r", 4, 0, 4, 4)];
        let out = shift_edge(&items, "ghost", Edge::Right, 3, 10, 10);
        assert_eq!(out.applied, 0);
    }

    #[test]
    fn test_horizontal_boundary_moves_whole_row() {
        let items = vec![
            item("a", 0, 0, 3, 4),
            item("b", 3, 0, 3, 4),
            item("c", 0, 4, 6, 4),
        ];
        // Dragging a's bottom edge moves both a and b against c
        let out = shift_edge(&items, "a", Edge::Bottom, 2, 12, 12);
        assert!(out.applied > 0);
        assert_eq!(out.items[0].rect.bottom(), out.items[1].rect.bottom());
        assert_eq!(out.items[2].rect.y, out.items[0].rect.bottom());
        assert_eq!(out.items[2].rect.bottom(), 8);
    }

    #[test]
    fn test_incremental_calls_accumulate() {
        let items = vec![item("l", 0, 0, 4, 8), item("r", 4, 0, 8, 8)];
        let first = shift_edge(&items, "l", Edge::Right, 2, 16, 8);
        assert_eq!(first.applied, 2);
        let second = shift_edge(&first.items, "l", Edge::Right, 2, 16, 8);
        assert_eq!(second.applied, 2);
        assert_eq!(second.items[0].rect.w, 8);
        assert_eq!(second.items[1].rect, GridRect::new(8, 0, 4, 8));
    }

    #[test]
    fn test_never_produces_degenerate_extent() {
        let items = vec![item("l", 0, 0, 2, 6), item("r", 2, 0, 2, 6)];
        for delta in [-50, -1, 0, 1, 50] {
            let out = shift_edge(&items, "l", Edge::Right, delta, 8, 8);
            for i in &out.items {
                assert!(i.rect.w >= 1 && i.rect.h >= 1, "delta {}", delta);
                assert!(i.rect.in_canvas(8, 8), "delta {}", delta);
            }
        }
    }
}
