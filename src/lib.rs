#![doc = r#"
PATCHGRID — forest-cover raster analysis.

This crate analyzes a binary-classified raster (e.g., forest/non-forest land
cover) in two ways: it measures, per pixel and per cardinal direction, the
distance to the nearest interruption in foreground cover, and it enumerates
connected foreground patches — including patches that straddle the boundary
when the raster is split vertically into two tiles too large to label in one
pass. It powers the PATCHGRID CLI and can be embedded in your own Rust
applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start: directional edge distances
---------------------------------------
```rust,no_run
use std::path::Path;
use patchgrid::{AnalysisParams, write_directional_distances};

fn main() -> patchgrid::Result<()> {
    let params = AnalysisParams::default();
    // Writes forest_west.tif, forest_east.tif, forest_north.tif,
    // forest_south.tif beside the input.
    write_directional_distances(Path::new("/data/forest.tif"), &params)
}
```

Split-tile patch identification
-------------------------------
```rust,no_run
use std::path::Path;
use patchgrid::{AnalysisParams, resolve_split_patches};

fn main() -> patchgrid::Result<()> {
    let params = AnalysisParams { block_size: 1000, ..Default::default() };
    let report = resolve_split_patches(Path::new("/data/forest.tif"), &params)?;
    println!(
        "patches: {} + {}, merged groups: {}",
        report.patches_left, report.patches_right, report.merged_groups
    );
    Ok(())
}
```

In-memory primitives (when you already have arrays)
---------------------------------------------------
```rust
use ndarray::array;
use patchgrid::core::analysis::{LabelSpace, edge_distances, identify_patches};
use patchgrid::Direction;

let grid = array![[0.0, 1.0], [1.0, 1.0]];
let south = edge_distances(grid.view(), Direction::South, 0.0);
assert_eq!(south[[1, 0]], 1);

let mut space = LabelSpace::new();
let (labels, count) = identify_patches(grid.view(), &mut space);
assert_eq!(count, 1);
assert_eq!(labels[[1, 1]], 1);
```

Error handling
--------------
All public functions return `patchgrid::Result<T>`; match on
`patchgrid::Error` to handle specific cases, e.g. GDAL failures. I/O and
shape/validation errors abort the enclosing operation and are not retried;
degenerate inputs (all-background rows, zero patches) are valid results, not
errors.

Useful modules
--------------
- [`api`] — high-level, path-in/path-out entry points.
- [`core::analysis`] — the scanner, labeler, adjacency resolver, relabeler.
- [`io`] — GDAL raster reader/writer and the tile clipper.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::AnalysisParams;
pub use error::{Error, Result};
pub use types::Direction;

// Analysis primitives
pub use core::analysis::{
    LabelSpace, MergeMap, MergeMaps, apply_merge_map, edge_distances, identify_patches,
    resolve_boundary_adjacency,
};

// I/O
pub use io::gdal::{GdalError, RasterMetadata, RasterReader, write_grid};
pub use io::tiling::split_into_tiles;

// High-level API re-exports
pub use api::{PatchReport, resolve_split_patches, write_directional_distances};
