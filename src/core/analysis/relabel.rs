//! Bounded-memory bulk relabeling.
//!
//! A merge map is applied to a full-size label grid without allocating a
//! dense lookup spanning the label-value range: the map is inverted, the
//! distinct values actually present are collected once into a sorted table,
//! and the grid is rewritten in fixed-size square blocks, substituting each
//! cell via binary search into the table. Blocks are read-independent and
//! write-disjoint, so row bands fan out across the rayon pool with only the
//! lookup table shared.
use std::collections::{HashMap, HashSet};

use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use tracing::debug;

use crate::core::analysis::adjacency::MergeMap;

/// Rewrite `grid` in place so every original id named by `map` carries its
/// merged id. Ids absent from the map pass through unchanged; an empty map
/// leaves the grid untouched.
pub fn apply_merge_map(grid: &mut Array2<u32>, map: &MergeMap, block_size: usize) {
    let block_size = block_size.max(1);

    // original id -> merged id
    let mut inverse: HashMap<u32, u32> = HashMap::new();
    for (&merged, originals) in map {
        for &original in originals {
            inverse.insert(original, merged);
        }
    }
    if inverse.is_empty() {
        return;
    }

    // Each distinct value is visited exactly once here, however often it
    // recurs spatially.
    let present: HashSet<u32> = grid.iter().copied().collect();
    let mut unique: Vec<u32> = present.into_iter().collect();
    unique.sort_unstable();
    let mapped: Vec<u32> = unique
        .iter()
        .map(|v| inverse.get(v).copied().unwrap_or(*v))
        .collect();
    debug!(
        "apply_merge_map: {} distinct value(s), {} rewrite(s), block size {}",
        unique.len(),
        inverse.len(),
        block_size
    );

    grid.axis_chunks_iter_mut(Axis(0), block_size)
        .into_par_iter()
        .for_each(|mut band| {
            for mut block in band.axis_chunks_iter_mut(Axis(1), block_size) {
                for cell in block.iter_mut() {
                    if let Ok(idx) = unique.binary_search(cell) {
                        *cell = mapped[idx];
                    }
                }
            }
        });
}
