//! Grid analysis primitives.
//!
//! `boundary` computes per-direction foreground run lengths, `patches` labels
//! 4-connected foreground regions, `adjacency` reconciles labels across a
//! tile boundary, and `relabel` applies the resulting merge maps to full-size
//! label grids in fixed-size blocks.
pub mod adjacency;
pub mod boundary;
pub mod patches;
pub mod relabel;

pub use adjacency::{MergeMap, MergeMaps, resolve_boundary_adjacency};
pub use boundary::edge_distances;
pub use patches::{LabelSpace, identify_patches};
pub use relabel::apply_merge_map;
