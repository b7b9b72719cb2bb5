//! BSP tiler: partition a rectangle into N aspect-bounded leaves
//!
//! The recursion is run iteratively over a flat, growable list of regions
//! (arena style) instead of a pointer-linked tree; that keeps the debt
//! bookkeeping trivial when a region turns out to be unsplittable. Whenever
//! the returned leaf count equals N, the leaves exactly tile the root
//! rectangle: splits always replace one region with two children covering it.

use rand::Rng;

use crate::grid::{ASPECT_MAX, ASPECT_MIN};

/// One region of the partition. `count == 1` marks a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub count: usize,
    pub depth: u32,
}

impl Region {
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    fn skew(&self) -> f64 {
        let r = f64::from(self.w) / f64::from(self.h);
        r.max(1.0 / r)
    }
}

/// Minimum leaf side for a given canvas, item count, intensity and retry
/// attempt. Successive attempts shrink the floor so stubborn canvases still
/// tile eventually.
pub fn min_leaf_side(w: i32, h: i32, n: usize, intensity: f64, attempt: u32) -> f64 {
    let est = (f64::from(w) * f64::from(h) / n.max(1) as f64).sqrt();
    let relax = (1.0 - 0.22 * f64::from(attempt)).max(0.35);
    let side = est * (0.65 - 0.15 * intensity) * relax;
    side.clamp(2.0, (f64::from(w.min(h)) / 2.0).max(2.0))
}

/// Tile `w` by `h` into `n` leaves. Retries with a shrinking minimum-side
/// floor, then one maximally aggressive attempt; the caller must tolerate a
/// leaf count below `n` only after that final attempt fails too.
pub fn tile<R: Rng>(n: usize, w: i32, h: i32, intensity: f64, rng: &mut R) -> Vec<Region> {
    if n == 0 || w <= 0 || h <= 0 {
        return Vec::new();
    }

    let mut last = Vec::new();
    for attempt in 0..4 {
        let floor = min_leaf_side(w, h, n, intensity, attempt);
        last = tile_once(n, w, h, intensity, floor, rng);
        if last.len() == n {
            return last;
        }
    }
    // Final aggressive pass with the floor forced to its absolute minimum
    let aggressive = tile_once(n, w, h, intensity, 2.0, rng);
    if aggressive.len() == n {
        aggressive
    } else {
        last
    }
}

fn tile_once<R: Rng>(
    n: usize,
    w: i32,
    h: i32,
    intensity: f64,
    floor: f64,
    rng: &mut R,
) -> Vec<Region> {
    let mut regions = vec![Region {
        x: 0,
        y: 0,
        w,
        h,
        count: n,
        depth: 0,
    }];
    let mut debt = 0usize;

    split_pass(&mut regions, &mut debt, intensity, floor, rng);
    if debt > 0 {
        if let Some(target) = largest_divisible(&regions, floor, None) {
            regions[target].count += debt;
            debt = 0;
            split_pass(&mut regions, &mut debt, intensity, floor, rng);
        }
    }

    regions
}

fn split_pass<R: Rng>(
    regions: &mut Vec<Region>,
    debt: &mut usize,
    intensity: f64,
    floor: f64,
    rng: &mut R,
) {
    let mut guard = 64 * regions.iter().map(|r| r.count).sum::<usize>() + 64;

    while guard > 0 {
        guard -= 1;
        let divisible: Vec<usize> = (0..regions.len())
            .filter(|&i| regions[i].count > 1)
            .collect();
        let Some(&idx) = (if intensity > 0.6 {
            // High intensity trades the skew heuristic for variety
            divisible.get(rng.random_range(0..divisible.len().max(1)))
        } else {
            divisible
                .iter()
                .max_by(|&&a, &&b| regions[a].skew().total_cmp(&regions[b].skew()))
        }) else {
            break;
        };

        let region = regions[idx];
        let k = rng.random_range(1..region.count);

        let bias = 0.5 + 0.15 * (1.0 - intensity);
        let longer_vertical = region.w >= region.h;
        let prefer_vertical = if rng.random::<f64>() < bias {
            longer_vertical
        } else {
            !longer_vertical
        };

        let span_for = |vertical: bool| {
            let (len, other) = if vertical {
                (region.w, region.h)
            } else {
                (region.h, region.w)
            };
            feasible_span(len, other, floor, vertical, k == 1, region.count - k == 1)
        };

        let (vertical, span) = match (span_for(prefer_vertical), span_for(!prefer_vertical)) {
            (Some(span), _) => (prefer_vertical, span),
            (None, Some(span)) => (!prefer_vertical, span),
            (None, None) => {
                // Unsplittable: freeze as a leaf and push the surplus count
                // onto the largest other region that can still absorb it
                let surplus = region.count - 1;
                regions[idx].count = 1;
                if let Some(target) = largest_divisible(regions, floor, Some(idx)) {
                    regions[target].count += surplus;
                } else {
                    *debt += surplus;
                }
                continue;
            }
        };

        let len = if vertical { region.w } else { region.h };
        let jitter_amp = 0.1 + 0.35 * intensity;
        let ratio = k as f64 / region.count as f64
            + (rng.random::<f64>() * 2.0 - 1.0) * jitter_amp;
        let cut = ((ratio * f64::from(len)).round() as i32).clamp(span.0, span.1);

        let (first, second) = if vertical {
            (
                Region { w: cut, count: k, depth: region.depth + 1, ..region },
                Region {
                    x: region.x + cut,
                    w: region.w - cut,
                    count: region.count - k,
                    depth: region.depth + 1,
                    ..region
                },
            )
        } else {
            (
                Region { h: cut, count: k, depth: region.depth + 1, ..region },
                Region {
                    y: region.y + cut,
                    h: region.h - cut,
                    count: region.count - k,
                    depth: region.depth + 1,
                    ..region
                },
            )
        };
        regions[idx] = first;
        regions.push(second);
    }
}

/// Integer cut range along `len` satisfying the minimum-side floor for both
/// children and the aspect envelope for any child that would become a leaf
fn feasible_span(
    len: i32,
    other: i32,
    floor: f64,
    vertical: bool,
    first_leaf: bool,
    second_leaf: bool,
) -> Option<(i32, i32)> {
    let other = f64::from(other);
    // A leaf's clamped aspect bounds translated onto the cut axis
    let (leaf_lo, leaf_hi) = if vertical {
        (ASPECT_MIN * other, ASPECT_MAX * other)
    } else {
        (other / ASPECT_MAX, other / ASPECT_MIN)
    };

    let mut lo = floor;
    let mut hi = f64::from(len) - floor;
    if first_leaf {
        lo = lo.max(leaf_lo);
        hi = hi.min(leaf_hi);
    }
    if second_leaf {
        lo = lo.max(f64::from(len) - leaf_hi);
        hi = hi.min(f64::from(len) - leaf_lo);
    }

    let lo_i = (lo.ceil() as i32).max(1);
    let hi_i = (hi.floor() as i32).min(len - 1);
    (lo_i <= hi_i).then_some((lo_i, hi_i))
}

fn largest_divisible(regions: &[Region], floor: f64, skip: Option<usize>) -> Option<usize> {
    (0..regions.len())
        .filter(|&i| Some(i) != skip)
        .filter(|&i| f64::from(regions[i].w.min(regions[i].h)) >= 2.0 * floor)
        .max_by_key(|&i| regions[i].area())
}
