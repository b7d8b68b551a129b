//! I/O layer for GDAL-backed rasters: the `gdal` reader/writer adapters and
//! the `tiling` clipper used by the split-patch pipeline.
pub mod gdal;
pub use gdal::{GdalError, RasterMetadata, RasterReader, write_grid};

pub mod tiling;
pub use tiling::split_into_tiles;
