use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patchgrid", version, about = "PATCHGRID CLI")]
pub struct CliArgs {
    /// Input classified raster (GeoTIFF or any GDAL-readable format)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Cell value treated as background
    #[arg(long, default_value_t = 0.0)]
    pub background: f64,

    /// Edge length, in cells, of the relabeler's square blocks
    #[arg(long, default_value_t = 1000)]
    pub block_size: usize,

    /// Skip the four directional edge-distance rasters
    #[arg(long, default_value_t = false)]
    pub skip_distances: bool,

    /// Skip the split/label/merge patch pipeline
    #[arg(long, default_value_t = false)]
    pub skip_patches: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
