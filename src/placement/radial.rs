//! Radial placements: dense rings around the last item, and the strict
//! anchored variant used by the clustering kind
//!
//! Both walk sides in the fixed order Right, Down, Left, Up and sweep the
//! perpendicular axis center-out on the anchor, so results are fully
//! deterministic. The dense variant takes the first feasible cell on the
//! closest ring; the strict variant derives its ring and side purely from
//! how many items of the kind already exist.

use crate::grid::{GridRect, Item, ItemKind, GUTTER};
use crate::occupancy::OccupancyIndex;

use super::{center_out, spawn_origin};

/// Expanding rings from the last-placed item; first feasible cell wins
pub fn place_dense(
    items: &[Item],
    inflated: &OccupancyIndex,
    nw: i32,
    nh: i32,
    w: i32,
    h: i32,
) -> Option<GridRect> {
    let anchor = items.last()?.rect;
    let (acx, acy) = anchor.center();
    let max_ring = w.max(h);

    for d in 1..=max_ring {
        let sweep = d + anchor.w.max(anchor.h) + nw.max(nh);
        for side in 0..4 {
            // Side order Right, Down, Left, Up; origin flush at ring distance
            let (x, y, horizontal) = match side {
                0 => (anchor.right() + GUTTER + d - 1, acy - nh / 2, false),
                1 => (acx - nw / 2, anchor.bottom() + GUTTER + d - 1, true),
                2 => (anchor.x - nw - GUTTER - d + 1, acy - nh / 2, false),
                _ => (acx - nw / 2, anchor.y - nh - GUTTER - d + 1, true),
            };
            for offset in center_out(sweep) {
                let rect = if horizontal {
                    GridRect::new(x + offset, y, nw, nh)
                } else {
                    GridRect::new(x, y + offset, nw, nh)
                };
                if inflated.can_place(&rect) {
                    return Some(rect);
                }
            }
        }
    }

    None
}

/// Strict anchored rings: the k-th item of the kind goes to ring `(k-1)/4`,
/// side `(k-1) % 4`, at a fixed step from the first-placed anchor. The first
/// item of the kind spawns at the canvas center.
pub fn place_strict(
    items: &[Item],
    kind: ItemKind,
    inflated: &OccupancyIndex,
    nw: i32,
    nh: i32,
    w: i32,
    h: i32,
) -> Option<GridRect> {
    let of_kind: Vec<&Item> = items.iter().filter(|i| i.kind == kind).collect();
    let Some(anchor) = of_kind.first().map(|i| i.rect) else {
        let (x, y) = spawn_origin(nw, nh, w, h);
        let rect = GridRect::new(x, y, nw, nh);
        return inflated.can_place(&rect).then_some(rect);
    };

    let idx = (of_kind.len() - 1) as i32;
    let step = anchor.w.max(anchor.h) + 2 * GUTTER;
    let (acx, acy) = anchor.center();

    for ring in idx / 4..(w.max(h) / step.max(1) + 1) {
        let gap = step * (ring + 1);
        let first_side = if ring == idx / 4 { idx % 4 } else { 0 };
        for side in first_side..4 {
            let (x, y, horizontal) = match side {
                0 => (anchor.right() + gap, acy - nh / 2, false),
                1 => (acx - nw / 2, anchor.bottom() + gap, true),
                2 => (anchor.x - gap - nw, acy - nh / 2, false),
                _ => (acx - nw / 2, anchor.y - gap - nh, true),
            };
            for offset in center_out(step) {
                let rect = if horizontal {
                    GridRect::new(x + offset, y, nw, nh)
                } else {
                    GridRect::new(x, y + offset, nw, nh)
                };
                if inflated.can_place(&rect) {
                    return Some(rect);
                }
            }
        }
        // Diagonal corners of the ring, tried after all four sides
        for (dx, dy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
            let x = if dx > 0 { anchor.right() + gap } else { anchor.x - gap - nw };
            let y = if dy > 0 { anchor.bottom() + gap } else { anchor.y - gap - nh };
            let rect = GridRect::new(x, y, nw, nh);
            if inflated.can_place(&rect) {
                return Some(rect);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: ItemKind, x: i32, y: i32, w: i32, h: i32) -> Item {
        Item::new(id, kind, GridRect::new(x, y, w, h))
    }

    #[test]
    fn test_dense_first_ring_is_right_of_anchor() {
        let items = vec![item("a", ItemKind::Image, 8, 8, 4, 4)];
        let inflated = OccupancyIndex::inflated(&items, 24, 24);
        let rect = place_dense(&items, &inflated, 4, 4, 24, 24).unwrap();
        // Flush across the gutter on the anchor's right side, center aligned
        assert_eq!(rect, GridRect::new(13, 8, 4, 4));
    }

    #[test]
    fn test_dense_skips_blocked_sides() {
        // Block the right side so the first feasible cell is below
        let items = vec![
            item("b", ItemKind::Image, 13, 2, 4, 16),
            item("a", ItemKind::Image, 8, 8, 4, 4),
        ];
        let inflated = OccupancyIndex::inflated(&items, 24, 24);
        let rect = place_dense(&items, &inflated, 4, 4, 24, 24).unwrap();
        assert!(!rect.inflate(GUTTER).intersects(&items[0].rect));
        assert!(!rect.inflate(GUTTER).intersects(&items[1].rect));
    }

    #[test]
    fn test_strict_first_of_kind_spawns_centered() {
        let inflated = OccupancyIndex::inflated(&[], 20, 20);
        let rect = place_strict(&[], ItemKind::Swatch, &inflated, 4, 4, 20, 20).unwrap();
        assert_eq!(rect, GridRect::new(8, 8, 4, 4));
    }

    #[test]
    fn test_strict_second_of_kind_ring_zero_right() {
        let items = vec![item("s1", ItemKind::Swatch, 0, 0, 4, 4)];
        let inflated = OccupancyIndex::inflated(&items, 20, 20);
        let rect = place_strict(&items, ItemKind::Swatch, &inflated, 4, 4, 20, 20).unwrap();
        // step = 4 + 2*gutter; ring 0 side Right lands one step past the edge
        assert_eq!((rect.x, rect.y), (10, 0));
    }

    #[test]
    fn test_strict_ignores_other_kinds() {
        let items = vec![item("img", ItemKind::Image, 0, 0, 4, 4)];
        let inflated = OccupancyIndex::inflated(&items, 20, 20);
        let rect = place_strict(&items, ItemKind::Swatch, &inflated, 2, 2, 20, 20).unwrap();
        assert_eq!(rect, GridRect::new(9, 9, 2, 2));
    }
}
