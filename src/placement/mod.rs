//! Placement strategies for inserting one rectangle into an occupied canvas
//!
//! Each strategy consumes the current item list and a candidate size and
//! returns a gutter-clean rectangle, or `None` when the canvas (and every
//! fallback) is exhausted. All strategies are deterministic for identical
//! inputs; only the mosaic engine ever shuffles input order, and it does so
//! before calling in here.

pub mod packed;
pub mod radial;
pub mod snake;
pub mod spiral;

use crate::grid::{GridRect, Item, ItemKind, GUTTER};
use crate::occupancy::OccupancyIndex;

/// Which placement algorithm to run. Selected per board, except that the
/// swatch kind always uses [`StrategyPolicy::StrictRadial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyPolicy {
    /// Frontier scan with edge-contact scoring; densest packing
    Packed,
    /// Center-out sweep around the last item, preferring pockets
    Snake,
    /// Expanding rings around the last item, first fit wins
    RadialDense,
    /// Anchored rings for the clustering kind; ring and side follow purely
    /// from how many items of the kind exist already
    StrictRadial(ItemKind),
}

/// Find a gutter-clean rectangle of `nw` by `nh` cells on a `w` by `h`
/// canvas, or `None` when there is no space.
pub fn find_placement(
    policy: StrategyPolicy,
    items: &[Item],
    nw: i32,
    nh: i32,
    w: i32,
    h: i32,
) -> Option<GridRect> {
    if w <= 0 || h <= 0 || nw <= 0 || nh <= 0 {
        return None;
    }
    let occ = OccupancyIndex::inflated(items, w, h);
    match policy {
        StrategyPolicy::Packed => packed::place(items, &occ, nw, nh, w, h)
            .or_else(|| radial::place_dense(items, &occ, nw, nh, w, h))
            .or_else(|| spiral::place(&occ, nw, nh, w, h)),
        StrategyPolicy::Snake => snake::place(items, &occ, nw, nh, w, h)
            .or_else(|| radial::place_dense(items, &occ, nw, nh, w, h))
            .or_else(|| spiral::place(&occ, nw, nh, w, h)),
        StrategyPolicy::RadialDense => radial::place_dense(items, &occ, nw, nh, w, h)
            .or_else(|| spiral::place(&occ, nw, nh, w, h)),
        StrategyPolicy::StrictRadial(kind) => {
            radial::place_strict(items, kind, &occ, nw, nh, w, h)
        }
    }
}

/// Canvas-center spawn origin for an `nw` by `nh` rectangle
pub(crate) fn spawn_origin(nw: i32, nh: i32, w: i32, h: i32) -> (i32, i32) {
    (w / 2 - nw / 2, h / 2 - nh / 2)
}

/// Offsets 0, +1, -1, +2, -2, ... out to `radius` inclusive
pub(crate) fn center_out(radius: i32) -> impl Iterator<Item = i32> {
    std::iter::once(0).chain((1..=radius.max(0)).flat_map(|d| [d, -d]))
}

/// Count occupied cells pressing against each side of `rect` across the
/// gutter, using the exact occupancy of the existing items. Returns the
/// per-side counts in order right, down, left, up.
pub(crate) fn side_contacts(rect: &GridRect, exact: &OccupancyIndex) -> [u32; 4] {
    let band = GUTTER + 1;
    [
        exact.covered(&GridRect::new(rect.x + rect.w + band - 1, rect.y, 1, rect.h)),
        exact.covered(&GridRect::new(rect.x, rect.y + rect.h + band - 1, rect.w, 1)),
        exact.covered(&GridRect::new(rect.x - band, rect.y, 1, rect.h)),
        exact.covered(&GridRect::new(rect.x, rect.y - band, rect.w, 1)),
    ]
}

/// Total contact plus whether two perpendicular sides both touch
pub(crate) fn contact_summary(rect: &GridRect, exact: &OccupancyIndex) -> (u32, bool) {
    let sides = side_contacts(rect, exact);
    let total = sides.iter().sum();
    let horizontal = sides[0] > 0 || sides[2] > 0;
    let vertical = sides[1] > 0 || sides[3] > 0;
    (total, horizontal && vertical)
}
