//! Occupancy bitmap with a 2D prefix sum for O(1) rectangle queries
//!
//! Both variants are ephemeral: they are rebuilt from the current item list
//! on every call and never outlive it. The inflated variant pads every item
//! by the gutter so that a zero query result already implies gutter-clean
//! placement; the exact variant marks only the cells an item actually covers
//! and flags overlap as it builds.

use crate::grid::{GridRect, Item, GUTTER};

/// Bitmap plus prefix sum over a `w` by `h` cell grid
#[derive(Debug, Clone)]
pub struct OccupancyIndex {
    w: i32,
    h: i32,
    /// (w+1) * (h+1) inclusive prefix sums, row-major
    prefix: Vec<u32>,
    /// Set when two items claimed the same cell during an exact build
    overlap: bool,
}

impl OccupancyIndex {
    /// Build the gutter-inflated index used by the packing strategies
    pub fn inflated(items: &[Item], w: i32, h: i32) -> Self {
        Self::build(items, w, h, GUTTER)
    }

    /// Build the exact index used for post-layout overlap validation
    pub fn exact(items: &[Item], w: i32, h: i32) -> Self {
        Self::build(items, w, h, 0)
    }

    fn build(items: &[Item], w: i32, h: i32, pad: i32) -> Self {
        let (uw, uh) = (w.max(0) as usize, h.max(0) as usize);
        let mut cells = vec![0u8; uw * uh];
        let mut overlap = false;

        for item in items {
            let r = item.rect.inflate(pad);
            let x0 = r.x.max(0);
            let y0 = r.y.max(0);
            let x1 = r.right().min(w);
            let y1 = r.bottom().min(h);
            for y in y0..y1 {
                for x in x0..x1 {
                    let idx = y as usize * uw + x as usize;
                    if pad == 0 && cells[idx] != 0 {
                        overlap = true;
                    }
                    cells[idx] = 1;
                }
            }
        }

        let mut prefix = vec![0u32; (uw + 1) * (uh + 1)];
        for y in 0..uh {
            for x in 0..uw {
                prefix[(y + 1) * (uw + 1) + (x + 1)] = u32::from(cells[y * uw + x])
                    + prefix[y * (uw + 1) + (x + 1)]
                    + prefix[(y + 1) * (uw + 1) + x]
                    - prefix[y * (uw + 1) + x];
            }
        }

        Self {
            w,
            h,
            prefix,
            overlap,
        }
    }

    /// Whether the exact build saw two items claim one cell
    pub fn has_overlap(&self) -> bool {
        self.overlap
    }

    /// Number of occupied cells inside `rect`, clipped to the canvas
    pub fn covered(&self, rect: &GridRect) -> u32 {
        let x0 = rect.x.clamp(0, self.w) as usize;
        let y0 = rect.y.clamp(0, self.h) as usize;
        let x1 = rect.right().clamp(0, self.w) as usize;
        let y1 = rect.bottom().clamp(0, self.h) as usize;
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }
        let stride = self.w as usize + 1;
        self.prefix[y1 * stride + x1] + self.prefix[y0 * stride + x0]
            - self.prefix[y0 * stride + x1]
            - self.prefix[y1 * stride + x0]
    }

    /// O(1) occupancy test over the clipped rectangle
    pub fn is_free(&self, rect: &GridRect) -> bool {
        self.covered(rect) == 0
    }

    /// Whether a single cell is occupied (out-of-bounds counts as occupied)
    pub fn cell_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return true;
        }
        self.covered(&GridRect::new(x, y, 1, 1)) != 0
    }

    /// Bounds check AND-ed with the occupancy query
    pub fn can_place(&self, rect: &GridRect) -> bool {
        rect.in_canvas(self.w, self.h) && self.is_free(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ItemKind;

    fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> Item {
        Item::new(id, ItemKind::Image, GridRect::new(x, y, w, h))
    }

    #[test]
    fn test_exact_counts_covered_cells() {
        let occ = OccupancyIndex::exact(&[item("a", 1, 1, 3, 2)], 10, 10);
        assert_eq!(occ.covered(&GridRect::new(0, 0, 10, 10)), 6);
        assert_eq!(occ.covered(&GridRect::new(1, 1, 1, 1)), 1);
        assert_eq!(occ.covered(&GridRect::new(5, 5, 3, 3)), 0);
    }

    #[test]
    fn test_exact_flags_overlap() {
        let clean = OccupancyIndex::exact(&[item("a", 0, 0, 2, 2), item("b", 4, 4, 2, 2)], 10, 10);
        assert!(!clean.has_overlap());
        let bad = OccupancyIndex::exact(&[item("a", 0, 0, 3, 3), item("b", 2, 2, 3, 3)], 10, 10);
        assert!(bad.has_overlap());
    }

    #[test]
    fn test_inflated_pads_by_gutter() {
        let occ = OccupancyIndex::inflated(&[item("a", 2, 2, 2, 2)], 10, 10);
        // The gutter ring around the item is occupied
        assert!(!occ.is_free(&GridRect::new(1, 1, 1, 1)));
        assert!(!occ.is_free(&GridRect::new(4, 2, 1, 1)));
        // Two cells away is clear
        assert!(occ.is_free(&GridRect::new(5, 2, 1, 1)));
    }

    #[test]
    fn test_inflation_clips_to_canvas() {
        let occ = OccupancyIndex::inflated(&[item("a", 0, 0, 2, 2)], 10, 10);
        assert_eq!(occ.covered(&GridRect::new(0, 0, 10, 10)), 9);
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let occ = OccupancyIndex::inflated(&[], 10, 10);
        assert!(occ.can_place(&GridRect::new(8, 8, 2, 2)));
        assert!(!occ.can_place(&GridRect::new(9, 9, 2, 2)));
        assert!(!occ.can_place(&GridRect::new(-1, 0, 2, 2)));
    }

    #[test]
    fn test_cell_occupied_treats_outside_as_occupied() {
        let occ = OccupancyIndex::exact(&[], 4, 4);
        assert!(occ.cell_occupied(-1, 0));
        assert!(occ.cell_occupied(4, 0));
        assert!(!occ.cell_occupied(2, 2));
    }
}
