//! Archimedean unit-step spiral, the terminal fallback for every strategy
//!
//! Walks right, down, left, up from the canvas-center spawn point with the
//! run length growing every second leg, testing one origin per step. Bounded
//! by an iteration budget proportional to the canvas area; exhaustion means
//! there is genuinely no space.

use crate::grid::GridRect;
use crate::occupancy::OccupancyIndex;

use super::spawn_origin;

pub fn place(inflated: &OccupancyIndex, nw: i32, nh: i32, w: i32, h: i32) -> Option<GridRect> {
    let (mut x, mut y) = spawn_origin(nw, nh, w, h);
    let budget = 4 * (w as i64) * (h as i64);

    // Leg directions right, down, left, up; run length grows every two legs
    let legs = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    let mut leg = 0usize;
    let mut run = 1i32;
    let mut steps_in_run = 0i32;
    let mut spent = 0i64;

    while spent < budget {
        let rect = GridRect::new(x, y, nw, nh);
        if inflated.can_place(&rect) {
            return Some(rect);
        }
        spent += 1;

        let (dx, dy) = legs[leg];
        x += dx;
        y += dy;
        steps_in_run += 1;
        if steps_in_run == run {
            steps_in_run = 0;
            if leg % 2 == 1 {
                run += 1;
            }
            leg = (leg + 1) % 4;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridRect, Item, ItemKind};

    #[test]
    fn test_empty_canvas_places_at_center_spawn() {
        let inflated = OccupancyIndex::inflated(&[], 10, 10);
        assert_eq!(place(&inflated, 2, 2, 10, 10), Some(GridRect::new(4, 4, 2, 2)));
    }

    #[test]
    fn test_walks_outward_when_center_is_taken() {
        let items = vec![Item::new("a", ItemKind::Image, GridRect::new(4, 4, 2, 2))];
        let inflated = OccupancyIndex::inflated(&items, 12, 12);
        let rect = place(&inflated, 2, 2, 12, 12).unwrap();
        assert!(rect.in_canvas(12, 12));
        assert!(!rect.inflate(1).intersects(&items[0].rect));
    }

    #[test]
    fn test_exhausted_budget_means_no_space() {
        let items = vec![Item::new("a", ItemKind::Image, GridRect::new(0, 0, 8, 8))];
        let inflated = OccupancyIndex::inflated(&items, 8, 8);
        assert_eq!(place(&inflated, 2, 2, 8, 8), None);
    }
}
