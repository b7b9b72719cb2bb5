//! Core grid types shared by every layout component

use serde::{Deserialize, Serialize};

/// Minimum clearance, in cells, enforced between item bounding boxes by the
/// packing strategies. Mosaic (BSP) layouts are exempt and may share edges.
pub const GUTTER: i32 = 1;

/// Lower bound of the global aspect-ratio envelope (9:16 portrait).
pub const ASPECT_MIN: f64 = 9.0 / 16.0;

/// Upper bound of the global aspect-ratio envelope (16:9 landscape).
pub const ASPECT_MAX: f64 = 16.0 / 9.0;

/// Clamp an aspect ratio into the global envelope.
pub fn clamp_aspect(ratio: f64) -> f64 {
    ratio.clamp(ASPECT_MIN, ASPECT_MAX)
}

/// An axis-aligned rectangle in integer cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// One-past-the-last column covered by this rectangle
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One-past-the-last row covered by this rectangle
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Area in cells
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Center cell coordinate (rounded toward the origin)
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Width-to-height ratio
    pub fn ratio(&self) -> f64 {
        f64::from(self.w) / f64::from(self.h)
    }

    /// Check whether two rectangles share at least one cell
    pub fn intersects(&self, other: &GridRect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Expand by `pad` cells on every side
    pub fn inflate(&self, pad: i32) -> GridRect {
        GridRect::new(self.x - pad, self.y - pad, self.w + 2 * pad, self.h + 2 * pad)
    }

    /// Check whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &GridRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check that this rectangle lies within a `w` by `h` canvas
    pub fn in_canvas(&self, w: i32, h: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= w && self.bottom() <= h
    }

    /// Smallest rectangle containing both inputs
    pub fn union(&self, other: &GridRect) -> GridRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        GridRect::new(x, y, right - x, bottom - y)
    }
}

/// What a board item holds. Geometry rules are identical for all kinds; the
/// kind only selects the placement policy (swatches cluster around their
/// first-placed anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Video,
    Embed,
    Swatch,
}

/// A single rectangle on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub rect: GridRect,
    /// Natural width/height ratio from the media, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<f64>,
    /// Opaque pass-through flag, irrelevant to layout
    #[serde(default)]
    pub approved: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, kind: ItemKind, rect: GridRect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
            aspect: None,
            approved: false,
        }
    }

    /// Aspect ratio used for mosaic matching: the natural media ratio when
    /// known, the current rectangle's ratio otherwise, clamped into the
    /// global envelope either way.
    pub fn effective_aspect(&self) -> f64 {
        clamp_aspect(self.aspect.unwrap_or_else(|| self.rect.ratio()))
    }
}

/// Tight bounding box of a set of items, or `None` for an empty set
pub fn bounding_box(items: &[Item]) -> Option<GridRect> {
    let mut iter = items.iter();
    let first = iter.next()?.rect;
    Some(iter.fold(first, |acc, item| acc.union(&item.rect)))
}
