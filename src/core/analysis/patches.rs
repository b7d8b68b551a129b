//! Single-tile patch labeling.
//!
//! Connected foreground regions are labeled with sequential positive ids via
//! a two-pass union-find sweep. Connectivity is the 4-neighbor cross (up,
//! down, left, right); diagonal contact does not join patches. Label numbering
//! follows row-major discovery order, which is an implementation detail — only
//! uniqueness and connectivity are contractual.
use ndarray::{Array2, ArrayView2};
use tracing::debug;

/// Allocator for disjoint label-id ranges across labeling passes.
///
/// Each pass labels with `bias()` as its additive offset and then claims the
/// number of ids it consumed, so no two passes can ever mint colliding labels.
#[derive(Debug, Default, Clone)]
pub struct LabelSpace {
    used: u32,
}

impl LabelSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additive offset for the next labeling pass; its ids will be
    /// `bias() + 1 ..= bias() + n`.
    pub fn bias(&self) -> u32 {
        self.used
    }

    /// Mark `count` ids as consumed by the pass that just ran.
    pub fn claim(&mut self, count: u32) {
        self.used += count;
    }
}

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        UnionFind { parent: Vec::new() }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        // Path halving
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb as usize] = ra;
        }
    }
}

/// Label 4-connected true regions of `mask` with `bias + 1 ..= bias + n`,
/// returning the label grid and the component count `n` (before bias).
pub(crate) fn label_mask(mask: &Array2<bool>, bias: u32) -> (Array2<u32>, u32) {
    let (rows, cols) = mask.dim();
    let mut provisional = Array2::<u32>::zeros((rows, cols));
    let mut uf = UnionFind::new();

    // First pass: provisional labels from the left/up neighbors.
    for i in 0..rows {
        for j in 0..cols {
            if !mask[[i, j]] {
                continue;
            }
            let left = if j > 0 && mask[[i, j - 1]] {
                Some(provisional[[i, j - 1]])
            } else {
                None
            };
            let up = if i > 0 && mask[[i - 1, j]] {
                Some(provisional[[i - 1, j]])
            } else {
                None
            };
            let label = match (left, up) {
                (Some(l), Some(u)) => {
                    uf.union(l - 1, u - 1);
                    l
                }
                (Some(l), None) => l,
                (None, Some(u)) => u,
                (None, None) => uf.make_set() + 1,
            };
            provisional[[i, j]] = label;
        }
    }

    // Second pass: compress roots to sequential ids in discovery order.
    let mut root_to_final = vec![0u32; uf.parent.len()];
    let mut next = 0u32;
    for cell in provisional.iter_mut() {
        if *cell == 0 {
            continue;
        }
        let root = uf.find(*cell - 1) as usize;
        if root_to_final[root] == 0 {
            next += 1;
            root_to_final[root] = next;
        }
        *cell = root_to_final[root] + bias;
    }

    (provisional, next)
}

/// Label 4-connected patches of cells equal to 1 in a classified grid.
///
/// The pass's id range is claimed from `space`, so subsequent passes (the
/// other tile, merged-group ids) stay disjoint. Returns the label grid and
/// the patch count found in this pass.
pub fn identify_patches(grid: ArrayView2<'_, f64>, space: &mut LabelSpace) -> (Array2<u32>, u32) {
    let mask = grid.mapv(|v| v == 1.0);
    let (labels, count) = label_mask(&mask, space.bias());
    space.claim(count);
    debug!("identify_patches: {} patch(es), bias {}", count, space.bias() - count);
    (labels, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashSet;

    #[test]
    fn counts_separate_patches() {
        let grid = array![
            [1.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0],
        ];
        let mut space = LabelSpace::new();
        let (labels, count) = identify_patches(grid.view(), &mut space);
        assert_eq!(count, 3);
        assert_eq!(space.bias(), 3);
        let distinct: HashSet<u32> = labels.iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(distinct.len(), 3);
        // Cells of one patch share a label
        assert_eq!(labels[[0, 0]], labels[[0, 1]]);
        assert_eq!(labels[[1, 3]], labels[[2, 3]]);
        assert_ne!(labels[[0, 0]], labels[[2, 0]]);
    }

    #[test]
    fn diagonal_contact_does_not_join() {
        let grid = array![
            [1.0, 0.0],
            [0.0, 1.0],
        ];
        let mut space = LabelSpace::new();
        let (_, count) = identify_patches(grid.view(), &mut space);
        assert_eq!(count, 2);
    }

    #[test]
    fn u_shape_merges_through_union() {
        // Right arm meets the left arm only at the bottom row, forcing a
        // provisional-label union.
        let grid = array![
            [1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
        ];
        let mut space = LabelSpace::new();
        let (labels, count) = identify_patches(grid.view(), &mut space);
        assert_eq!(count, 1);
        let distinct: HashSet<u32> = labels.iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(distinct, HashSet::from([1]));
    }

    #[test]
    fn empty_grid_yields_zero_count() {
        let grid = Array2::<f64>::zeros((4, 4));
        let mut space = LabelSpace::new();
        let (labels, count) = identify_patches(grid.view(), &mut space);
        assert_eq!(count, 0);
        assert_eq!(space.bias(), 0);
        assert!(labels.iter().all(|&v| v == 0));
    }

    #[test]
    fn only_value_one_is_foreground() {
        // Patch identification tests `== 1`, not merely nonzero.
        let grid = array![[1.0, 2.0, 1.0]];
        let mut space = LabelSpace::new();
        let (labels, count) = identify_patches(grid.view(), &mut space);
        assert_eq!(count, 2);
        assert_eq!(labels[[0, 1]], 0);
    }

    #[test]
    fn biased_passes_never_collide() {
        let a = array![[1.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
        let b = array![[0.0, 1.0], [1.0, 1.0]];
        let mut space = LabelSpace::new();
        let (labels_a, n_a) = identify_patches(a.view(), &mut space);
        let (labels_b, n_b) = identify_patches(b.view(), &mut space);
        assert_eq!((n_a, n_b), (2, 1));

        let set_a: HashSet<u32> = labels_a.iter().copied().filter(|&v| v != 0).collect();
        let set_b: HashSet<u32> = labels_b.iter().copied().filter(|&v| v != 0).collect();
        assert!(set_a.is_disjoint(&set_b));
        assert_eq!(space.bias(), 3);
    }

    #[test]
    fn nonzero_mask_labeling() {
        let arr = array![[7u32, 0, 3], [7, 0, 0]];
        let mask = arr.mapv(|v| v != 0);
        let (labels, count) = label_mask(&mask, 10);
        assert_eq!(count, 2);
        assert_eq!(labels[[0, 0]], 11);
        assert_eq!(labels[[1, 0]], 11);
        assert_eq!(labels[[0, 2]], 12);
    }
}
