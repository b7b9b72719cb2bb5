//! Snake placement: center-out sweeps around the last item, pockets first
//!
//! The search is restricted to the bounding box of the existing items plus a
//! small margin, and runs three passes with decreasing contact requirements
//! (2, then 1, then 0) so snug pockets fill before open space does.

use crate::grid::{bounding_box, GridRect, Item, GUTTER};
use crate::occupancy::OccupancyIndex;

use super::{center_out, contact_summary};

pub fn place(
    items: &[Item],
    inflated: &OccupancyIndex,
    nw: i32,
    nh: i32,
    w: i32,
    h: i32,
) -> Option<GridRect> {
    let last = items.last()?;
    let bbox = bounding_box(items)?;
    let margin = nw.max(nh) + GUTTER;
    let search = bbox.inflate(margin);
    let exact = OccupancyIndex::exact(items, w, h);

    let (cx, cy) = last.rect.center();
    // Candidate origins put the new rect's center near the anchor's center
    let ox = cx - nw / 2;
    let oy = cy - nh / 2;
    let radius_x = (search.w - nw).max(0);
    let radius_y = (search.h - nh).max(0);

    for min_contact in [2u32, 1, 0] {
        for dy in center_out(radius_y) {
            let y = oy + dy;
            if y < search.y || y + nh > search.bottom() {
                continue;
            }
            for dx in center_out(radius_x) {
                let x = ox + dx;
                if x < search.x || x + nw > search.right() {
                    continue;
                }
                let rect = GridRect::new(x, y, nw, nh);
                if !inflated.can_place(&rect) {
                    continue;
                }
                let (contact, _) = contact_summary(&rect, &exact);
                if contact >= min_contact {
                    return Some(rect);
                }
            }
        }
    }

    None
}
