//! GDAL-backed raster access: a reader that captures georeferencing metadata
//! alongside band data, and a GeoTIFF writer matching the pipeline's output
//! contract (LZW compression, no-data 0, preserved geotransform/projection).
use gdal::raster::{Buffer, GdalDataType, GdalType, RasterCreationOptions};
use gdal::{Dataset, DriverManager, errors::GdalError as GdalCrateError};
use ndarray::{Array2, ArrayView2};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by the raster I/O layer
#[derive(Debug, Error)]
pub enum GdalError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("Unable to open file: {0}")]
    Open(String),
    #[error("Unable to create file: {0}")]
    Create(String),
    #[error("Band index {index} out of range (raster has {bands} band(s))")]
    BandIndex { index: usize, bands: usize },
    #[error("Invalid grid shape: {0}")]
    InvalidShape(String),
}

/// Georeferencing metadata captured when a dataset is opened
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// Width (pixels) of the raster
    pub cols: usize,
    /// Height (lines) of the raster
    pub rows: usize,
    /// Number of raster bands
    pub bands: usize,
    /// Pixel data type of the first band
    pub pixel_type: GdalDataType,
    /// Affine geotransform coefficients ([origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height])
    pub geotransform: [f64; 6],
    /// Projection in WKT format (empty when the source carries none)
    pub projection: String,
}

/// Reader for GDAL-supported rasters (GeoTIFF and friends)
pub struct RasterReader {
    pub dataset: Dataset,
    pub metadata: RasterMetadata,
}

impl RasterReader {
    /// Open a raster and capture its dimensions, geotransform, and projection.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GdalError> {
        let path = path.as_ref();
        let dataset = Dataset::open(path)
            .map_err(|_| GdalError::Open(path.display().to_string()))?;
        let (cols, rows) = dataset.raster_size();
        let bands = dataset.raster_count() as usize;
        if bands == 0 {
            return Err(GdalError::InvalidShape("no raster bands found".into()));
        }
        let pixel_type = dataset.rasterband(1)?.band_type();
        let geotransform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => [0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        };
        let projection = dataset.projection();

        info!("Driver: {}", dataset.driver().short_name());
        info!("Height (rows): {}", rows);
        info!("Width (cols): {}", cols);
        info!("Bands: {}", bands);
        info!("Data type: {:?}", pixel_type);
        debug!(
            "Geotransform: origin=({}, {}), pixel=({}, {})",
            geotransform[0], geotransform[3], geotransform[1], geotransform[5]
        );

        Ok(RasterReader {
            dataset,
            metadata: RasterMetadata {
                cols,
                rows,
                bands,
                pixel_type,
                geotransform,
                projection,
            },
        })
    }

    /// Read a single band (1-based index) as an ndarray of shape (rows, cols).
    pub fn read_band<T: GdalType + Copy>(&self, index: usize) -> Result<Array2<T>, GdalError> {
        self.read_band_window(index, (0, 0), (self.metadata.cols, self.metadata.rows))
    }

    /// Read a rectangular window of a band. `offset` is (x, y) in pixels,
    /// `window` is (width, height).
    pub fn read_band_window<T: GdalType + Copy>(
        &self,
        index: usize,
        offset: (usize, usize),
        window: (usize, usize),
    ) -> Result<Array2<T>, GdalError> {
        if index == 0 || index > self.metadata.bands {
            return Err(GdalError::BandIndex {
                index,
                bands: self.metadata.bands,
            });
        }
        let band = self.dataset.rasterband(index)?;
        let buf = band.read_as::<T>(
            (offset.0 as isize, offset.1 as isize),
            window,
            window,
            None,
        )?;
        let (w, h) = window;
        let data = buf.data().to_vec();
        Array2::from_shape_vec((h, w), data).map_err(|_| {
            GdalError::InvalidShape(format!("band {} window {}x{} read mismatch", index, w, h))
        })
    }
}

/// Write one or more same-shaped bands to a LZW-compressed GeoTIFF with
/// per-band no-data 0. Geotransform and projection are set when provided.
pub fn write_grid<T: GdalType + Copy, P: AsRef<Path>>(
    path: P,
    bands: &[ArrayView2<'_, T>],
    geotransform: Option<&[f64; 6]>,
    projection: Option<&str>,
) -> Result<Dataset, GdalError> {
    let path = path.as_ref();
    if bands.is_empty() {
        return Err(GdalError::InvalidShape("no bands to write".into()));
    }
    let (rows, cols) = bands[0].dim();
    for band in &bands[1..] {
        if band.dim() != (rows, cols) {
            return Err(GdalError::InvalidShape(format!(
                "band shape {:?} differs from {:?}",
                band.dim(),
                (rows, cols)
            )));
        }
    }

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let options = RasterCreationOptions::from_iter(["COMPRESS=LZW"]);
    let mut ds = driver
        .create_with_band_type_with_options::<T, _>(path, cols, rows, bands.len(), &options)
        .map_err(|_| GdalError::Create(path.display().to_string()))?;

    if let Some(gt) = geotransform {
        ds.set_geo_transform(gt)?;
    }
    if let Some(proj) = projection {
        if !proj.is_empty() {
            ds.set_projection(proj)?;
        }
    }

    for (i, band) in bands.iter().enumerate() {
        let data: Vec<T> = band.iter().copied().collect();
        let mut buf = Buffer::new((cols, rows), data);
        let mut handle = ds.rasterband(i + 1)?;
        handle.write((0, 0), (cols, rows), &mut buf)?;
        handle.set_no_data_value(Some(0.0))?;
    }

    debug!("Wrote {}x{} raster to {:?}", cols, rows, path);
    Ok(ds)
}
