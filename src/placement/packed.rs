//! Packed/frontier placement: score every flush candidate along the frontier
//!
//! The frontier is the set of empty (inflated) cells directly adjacent to an
//! occupied (inflated) cell, exactly the cells where a new rectangle can sit
//! flush against an existing item across the gutter. Every frontier cell
//! produces four candidates, one per side, and the highest-scoring feasible
//! candidate wins.

use crate::grid::{GridRect, Item};
use crate::occupancy::OccupancyIndex;

use super::contact_summary;

const CONTACT_WEIGHT: i64 = 100_000;
const CORNER_BONUS: i64 = 1_000;
const DISTANCE_WEIGHT: i64 = 10;

/// Place via frontier scoring. Returns `None` on an empty board (no frontier
/// exists) or when no candidate is feasible; the caller falls back to the
/// radial and spiral strategies.
pub fn place(
    items: &[Item],
    inflated: &OccupancyIndex,
    nw: i32,
    nh: i32,
    w: i32,
    h: i32,
) -> Option<GridRect> {
    let last = items.last()?;
    let exact = OccupancyIndex::exact(items, w, h);
    let (last_cx, last_cy) = last.rect.center();

    let mut best: Option<(i64, GridRect)> = None;
    for fy in 0..h {
        for fx in 0..w {
            if !is_frontier(inflated, fx, fy, w, h) {
                continue;
            }
            // Flush origins with the frontier cell on each side of the new
            // rect; side preference Right < Down < Left < Up breaks ties.
            let candidates = [
                GridRect::new(fx, fy, nw, nh),
                GridRect::new(fx - nw + 1, fy, nw, nh),
                GridRect::new(fx - nw + 1, fy - nh + 1, nw, nh),
                GridRect::new(fx, fy - nh + 1, nw, nh),
            ];
            for (side, rect) in candidates.iter().enumerate() {
                if !inflated.can_place(rect) {
                    continue;
                }
                let score = score_candidate(rect, &exact, last_cx, last_cy, side as i64);
                if best.map_or(true, |(s, _)| score > s) {
                    best = Some((score, *rect));
                }
            }
        }
    }

    best.map(|(_, rect)| rect)
}

fn is_frontier(inflated: &OccupancyIndex, x: i32, y: i32, w: i32, h: i32) -> bool {
    if x < 0 || y < 0 || x >= w || y >= h || inflated.cell_occupied(x, y) {
        return false;
    }
    [(1, 0), (-1, 0), (0, 1), (0, -1)].iter().any(|(dx, dy)| {
        let (nx, ny) = (x + dx, y + dy);
        nx >= 0 && ny >= 0 && nx < w && ny < h && inflated.cell_occupied(nx, ny)
    })
}

fn score_candidate(
    rect: &GridRect,
    exact: &OccupancyIndex,
    last_cx: i32,
    last_cy: i32,
    side: i64,
) -> i64 {
    let (contact, corner) = contact_summary(rect, exact);
    let (cx, cy) = rect.center();
    let distance = i64::from((cx - last_cx).abs() + (cy - last_cy).abs());
    i64::from(contact) * CONTACT_WEIGHT + if corner { CORNER_BONUS } else { 0 }
        - distance * DISTANCE_WEIGHT
        - side
}
