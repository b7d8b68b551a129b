use serde::{Deserialize, Serialize};

/// Analysis parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Cell value treated as background in the classified raster
    pub background: f64,
    /// Edge length, in cells, of the square blocks the relabeler rewrites
    pub block_size: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            background: 0.0,
            block_size: 1000,
        }
    }
}
