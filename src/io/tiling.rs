//! Rectangular tile clipping: split one georeferenced raster into a grid of
//! fixed-size sub-tiles, each written with an offset geotransform and the
//! source projection. Tiles are named `{stem}_{x}_{y}.{ext}`.
use std::path::{Path, PathBuf};

use gdal::raster::GdalType;
use ndarray::ArrayView2;
use tracing::info;

use crate::io::gdal::{GdalError, RasterReader, write_grid};

/// Split `input` into tiles of `tile_width` x `tile_height` pixels under
/// `output_dir`, returning the written tile paths in (x, y) scan order.
///
/// Tile counts are floor divisions of the raster size; a ragged remainder
/// strip is not emitted. All bands are carried into each tile.
pub fn split_into_tiles<T: GdalType + Copy>(
    input: &Path,
    output_dir: &Path,
    tile_width: usize,
    tile_height: usize,
) -> Result<Vec<PathBuf>, GdalError> {
    std::fs::create_dir_all(output_dir)
        .map_err(|_| GdalError::Create(output_dir.display().to_string()))?;

    let reader = RasterReader::open(input)?;
    let meta = &reader.metadata;
    let num_cols = meta.cols / tile_width;
    let num_rows = meta.rows / tile_height;
    info!("Clipping into {} x {} tiles", num_cols, num_rows);

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tif".to_string());

    let geo = meta.geotransform;
    let mut written = Vec::with_capacity(num_cols * num_rows);
    for x in 0..num_cols {
        for y in 0..num_rows {
            let xoff = x * tile_width;
            let yoff = y * tile_height;

            let mut tile_bands = Vec::with_capacity(meta.bands);
            for b in 1..=meta.bands {
                tile_bands.push(reader.read_band_window::<T>(
                    b,
                    (xoff, yoff),
                    (tile_width, tile_height),
                )?);
            }

            // Shift the origin to the tile's top-left corner
            let tile_geo = [
                geo[0] + xoff as f64 * geo[1],
                geo[1],
                0.0,
                geo[3] + yoff as f64 * geo[5],
                0.0,
                geo[5],
            ];

            let out_path = output_dir.join(format!("{}_{}_{}.{}", stem, x, y, ext));
            let views: Vec<ArrayView2<'_, T>> = tile_bands.iter().map(|b| b.view()).collect();
            write_grid(&out_path, &views, Some(&tile_geo), Some(&meta.projection))?;
            written.push(out_path);
        }
    }
    Ok(written)
}
