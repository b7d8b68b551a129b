//! Core analysis building blocks: directional boundary-distance scans,
//! connected-patch labeling, cross-tile adjacency resolution, and the
//! bounded-memory relabeler. These are the primitives consumed by the
//! high-level `api` module.
pub mod analysis;
pub mod params;
