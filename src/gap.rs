//! Greedy gap closing: grow items one cell at a time toward a target box
//!
//! Two modes share one mechanism and differ only in the target boundary:
//! stretch grows toward the canvas edges, collect toward the tight bounding
//! box of the current item set. Stages run in fixed order Left, Up, Right,
//! Down; within a stage, items closest to the stage's target edge grow
//! first so edge-adjacent items claim space before interior ones. A growth
//! step is rejected if it would create a collision that was not already
//! present, so zero-gap mosaic contacts are tolerated but never worsened.
//! Passes repeat until nothing grows or the area-proportional budget runs
//! out; budget exhaustion returns the best-effort state, not an error.

use crate::grid::{bounding_box, GridRect, Item, GUTTER};

#[derive(Debug, Clone, Copy)]
enum Stage {
    Left,
    Up,
    Right,
    Down,
}

const STAGES: [Stage; 4] = [Stage::Left, Stage::Up, Stage::Right, Stage::Down];

/// Grow items toward the canvas edges
pub fn grow_to_edges(items: &[Item], w: i32, h: i32) -> Vec<Item> {
    if w <= 0 || h <= 0 {
        return items.to_vec();
    }
    grow_toward(items, GridRect::new(0, 0, w, h))
}

/// Grow items toward the tight bounding box of the item set itself
pub fn grow_to_bounding_box(items: &[Item], w: i32, h: i32) -> Vec<Item> {
    if w <= 0 || h <= 0 {
        return items.to_vec();
    }
    match bounding_box(items) {
        Some(target) => grow_toward(items, target),
        None => Vec::new(),
    }
}

fn grow_toward(items: &[Item], target: GridRect) -> Vec<Item> {
    let mut out = items.to_vec();
    let covered: i64 = out.iter().map(|i| i.rect.area()).sum();
    let missing = (target.area() - covered).max(0);
    let mut budget = (missing * 8).max(1_000);

    loop {
        let mut grew = false;
        for stage in STAGES {
            let mut order: Vec<usize> = (0..out.len()).collect();
            order.sort_by_key(|&i| edge_distance(&out[i].rect, stage, &target));
            for idx in order {
                while budget > 0 {
                    let Some(grown) = step(&out[idx].rect, stage, &target) else {
                        break;
                    };
                    if !step_allowed(&out, idx, &grown) {
                        break;
                    }
                    out[idx].rect = grown;
                    budget -= 1;
                    grew = true;
                }
            }
        }
        if !grew || budget == 0 {
            break;
        }
    }
    out
}

/// Distance from an item to the stage's target edge; closest grows first
fn edge_distance(rect: &GridRect, stage: Stage, target: &GridRect) -> i32 {
    match stage {
        Stage::Left => rect.x - target.x,
        Stage::Up => rect.y - target.y,
        Stage::Right => target.right() - rect.right(),
        Stage::Down => target.bottom() - rect.bottom(),
    }
}

/// One-cell growth in the stage direction, `None` once the target boundary
/// is reached
fn step(rect: &GridRect, stage: Stage, target: &GridRect) -> Option<GridRect> {
    let grown = match stage {
        Stage::Left => GridRect::new(rect.x - 1, rect.y, rect.w + 1, rect.h),
        Stage::Up => GridRect::new(rect.x, rect.y - 1, rect.w, rect.h + 1),
        Stage::Right => GridRect::new(rect.x, rect.y, rect.w + 1, rect.h),
        Stage::Down => GridRect::new(rect.x, rect.y, rect.w, rect.h + 1),
    };
    target.contains_rect(&grown).then_some(grown)
}

/// A step may not create any collision the current state does not already
/// have: no new exact overlap ever, and no new gutter violation either (so
/// packed separation is preserved while zero-gap mosaic contact survives)
fn step_allowed(items: &[Item], idx: usize, grown: &GridRect) -> bool {
    let current = items[idx].rect;
    items.iter().enumerate().all(|(j, other)| {
        if j == idx {
            return true;
        }
        let new_overlap = grown.intersects(&other.rect) && !current.intersects(&other.rect);
        let new_contact = grown.inflate(GUTTER).intersects(&other.rect)
            && !current.inflate(GUTTER).intersects(&other.rect);
        !new_overlap && !new_contact
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ItemKind;
    use crate::occupancy::OccupancyIndex;

    fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> Item {
        Item::new(id, ItemKind::Image, GridRect::new(x, y, w, h))
    }

    #[test]
    fn test_lone_item_fills_whole_canvas() {
        let out = grow_to_edges(&[item("a", 4, 4, 2, 2)], 10, 10);
        assert_eq!(out[0].rect, GridRect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_growth_never_shrinks_total_area() {
        let items = vec![item("a", 1, 1, 2, 2), item("b", 6, 1, 3, 2), item("c", 2, 6, 4, 3)];
        let before: i64 = items.iter().map(|i| i.rect.area()).sum();
        let out = grow_to_edges(&items, 12, 12);
        let after: i64 = out.iter().map(|i| i.rect.area()).sum();
        assert!(after >= before);
        assert!(!OccupancyIndex::exact(&out, 12, 12).has_overlap());
    }

    #[test]
    fn test_gutter_is_preserved_between_grown_items() {
        let items = vec![item("a", 0, 0, 2, 4), item("b", 6, 0, 2, 4)];
        let out = grow_to_edges(&items, 10, 4);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert!(!a.rect.inflate(GUTTER).intersects(&b.rect), "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_existing_contact_tolerated_not_worsened() {
        // Zero-gap mosaic pair: growth away from the contact still works
        let items = vec![item("a", 0, 0, 5, 8), item("b", 5, 0, 5, 8)];
        let out = grow_to_edges(&items, 12, 10);
        assert!(!OccupancyIndex::exact(&out, 12, 10).has_overlap());
        let after: i64 = out.iter().map(|i| i.rect.area()).sum();
        assert!(after >= 80);
    }

    #[test]
    fn test_collect_targets_bounding_box() {
        let items = vec![item("a", 2, 2, 2, 2), item("b", 8, 2, 2, 6)];
        let bbox = bounding_box(&items).unwrap();
        let out = grow_to_bounding_box(&items, 20, 20);
        for i in &out {
            assert!(bbox.contains_rect(&i.rect), "{:?} outside {:?}", i, bbox);
        }
        let after: i64 = out.iter().map(|i| i.rect.area()).sum();
        assert!(after > 4 + 12);
    }

    #[test]
    fn test_invalid_canvas_passes_through() {
        let items = vec![item("a", 0, 0, 2, 2)];
        assert_eq!(grow_to_edges(&items, 0, 5), items);
    }
}
