//! Moodboard engine: pair items with BSP leaves by aspect and keep the
//! result overlap-free through a bounded retry chain
//!
//! The engine never mutates its input. `relayout` is the non-destructive
//! variant (item order preserved, used after deletes and resizes); `shuffle`
//! is the destructive variant (order randomized, gaps stretched shut).
//! Both validate with an exact occupancy pass; if every retry still
//! overlaps, the last layout-only candidate is returned and the condition is
//! logged; the engine never silently invents a different recovery.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::gap;
use crate::grid::{GridRect, Item};
use crate::mosaic::bsp;
use crate::occupancy::OccupancyIndex;

/// Non-destructive reflow: keep item order, recompute geometry, fall back to
/// a forced shuffle only when validation finds an overlap.
pub fn relayout<R: Rng>(items: &[Item], w: i32, h: i32, intensity: f64, rng: &mut R) -> Vec<Item> {
    if items.is_empty() || w <= 0 || h <= 0 {
        return items.to_vec();
    }
    let laid = single_partition(items, GridRect::new(0, 0, w, h), intensity, false, rng);
    if !OccupancyIndex::exact(&laid, w, h).has_overlap() {
        return laid;
    }
    debug!("relayout produced an overlap, retrying with forced shuffle");
    single_partition(items, GridRect::new(0, 0, w, h), intensity, true, rng)
}

/// Destructive reshuffle: randomize order, lay out (sometimes as a multi-band
/// combo at high intensity), stretch toward the edges, and validate.
pub fn shuffle<R: Rng>(items: &[Item], w: i32, h: i32, intensity: f64, rng: &mut R) -> Vec<Item> {
    if items.is_empty() || w <= 0 || h <= 0 {
        return items.to_vec();
    }

    let use_combo = items.len() >= 6 && rng.random::<f64>() < 0.5 * intensity;
    let first = if use_combo {
        combo_layout(items, w, h, intensity, rng)
    } else {
        single_partition(items, GridRect::new(0, 0, w, h), intensity, true, rng)
    };

    let stretched = gap::grow_to_edges(&first, w, h);
    if !OccupancyIndex::exact(&stretched, w, h).has_overlap() {
        return stretched;
    }

    debug!("shuffle overlap after stretch, retrying layout-only");
    let retry = single_partition(items, GridRect::new(0, 0, w, h), intensity, true, rng);
    if !OccupancyIndex::exact(&retry, w, h).has_overlap() {
        return retry;
    }

    let retry_stretched = gap::grow_to_edges(&retry, w, h);
    if !OccupancyIndex::exact(&retry_stretched, w, h).has_overlap() {
        return retry_stretched;
    }

    // Documented residual risk: every retry overlapped, hand back the last
    // layout-only candidate rather than masking the condition
    warn!(
        "shuffle could not produce an overlap-free layout for {} items on {}x{}",
        items.len(),
        w,
        h
    );
    retry
}

/// Lay out all items inside `region` from one BSP partition. Leaves are
/// ordered by aspect ratio; items are either aspect-sorted too (ordered
/// mode, best aspect match) or paired in random order (`shuffle_order`,
/// trading aspect fit for variety). Pairing is index-for-index; any surplus
/// items (leaf shortfall after every tiling retry) are assigned round-robin,
/// the least harmful fallback available.
pub fn single_partition<R: Rng>(
    items: &[Item],
    region: GridRect,
    intensity: f64,
    shuffle_order: bool,
    rng: &mut R,
) -> Vec<Item> {
    let mut leaves = bsp::tile(items.len(), region.w, region.h, intensity, rng);
    leaves.sort_by(|a, b| {
        (f64::from(a.w) / f64::from(a.h)).total_cmp(&(f64::from(b.w) / f64::from(b.h)))
    });

    let mut order: Vec<usize> = (0..items.len()).collect();
    if shuffle_order {
        order.shuffle(rng);
    } else {
        order.sort_by(|&a, &b| {
            items[a]
                .effective_aspect()
                .total_cmp(&items[b].effective_aspect())
        });
    }

    if leaves.len() < items.len() {
        warn!(
            "partition produced {} leaves for {} items, assigning surplus round-robin",
            leaves.len(),
            items.len()
        );
    }

    let mut out = items.to_vec();
    for (slot, &item_idx) in order.iter().enumerate() {
        let leaf = leaves[slot % leaves.len()];
        out[item_idx].rect = GridRect::new(region.x + leaf.x, region.y + leaf.y, leaf.w, leaf.h);
    }
    out
}

/// Composite layout: split the canvas into 2 or 3 bands and run one
/// independent partition per band, translated by the band origin.
pub fn combo_layout<R: Rng>(
    items: &[Item],
    w: i32,
    h: i32,
    intensity: f64,
    rng: &mut R,
) -> Vec<Item> {
    let vertical = rng.random_bool(0.5);
    let total = if vertical { w } else { h };
    // Never more bands than cells on the split axis, so every band keeps at
    // least one cell and the last band's remainder stays positive
    let wanted = if rng.random_bool(0.5) { 2usize } else { 3 };
    let band_count = wanted.min(total.max(1) as usize);

    // Band proportions in [0.2, 0.6], last band takes the remainder
    let mut spans = Vec::with_capacity(band_count);
    let mut used = 0i32;
    for i in 0..band_count {
        let remaining = (band_count - i - 1) as i32;
        let span = if i + 1 == band_count {
            total - used
        } else {
            let frac = 0.2 + rng.random::<f64>() * 0.4;
            ((frac * f64::from(total)) as i32).clamp(1, (total - used - remaining).max(1))
        };
        spans.push(span);
        used += span;
    }

    let bands: Vec<GridRect> = {
        let mut offset = 0;
        spans
            .iter()
            .map(|&span| {
                let band = if vertical {
                    GridRect::new(offset, 0, span, h)
                } else {
                    GridRect::new(0, offset, w, span)
                };
                offset += span;
                band
            })
            .collect()
    };

    let counts = proportional_counts(items.len(), &bands);

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.shuffle(rng);

    let mut out = items.to_vec();
    let mut cursor = 0usize;
    for (band, count) in bands.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        let member_ids: Vec<usize> = order[cursor..cursor + count].to_vec();
        cursor += count;
        let members: Vec<Item> = member_ids.iter().map(|&i| items[i].clone()).collect();
        let placed = single_partition(&members, *band, intensity, true, rng);
        for (member, placed_item) in member_ids.iter().zip(placed) {
            out[*member].rect = placed_item.rect;
        }
    }
    out
}

/// Distribute `n` items over the bands proportional to band area, with a
/// rounding correction so the counts sum to exactly `n`
fn proportional_counts(n: usize, bands: &[GridRect]) -> Vec<usize> {
    let total_area: i64 = bands.iter().map(GridRect::area).sum();
    if total_area == 0 {
        let mut counts = vec![0; bands.len()];
        if let Some(first) = counts.first_mut() {
            *first = n;
        }
        return counts;
    }

    let mut counts: Vec<usize> = bands
        .iter()
        .map(|b| ((n as f64) * (b.area() as f64) / (total_area as f64)).round() as usize)
        .collect();
    let mut assigned: usize = counts.iter().sum();

    // Rounding correction: nudge the largest bands until the totals match
    while assigned < n {
        if let Some(idx) = (0..bands.len()).max_by_key(|&i| bands[i].area()) {
            counts[idx] += 1;
            assigned += 1;
        }
    }
    while assigned > n {
        if let Some(idx) = (0..bands.len()).filter(|&i| counts[i] > 0).max_by_key(|&i| counts[i]) {
            counts[idx] -= 1;
            assigned -= 1;
        }
    }
    counts
}
