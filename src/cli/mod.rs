//! Command Line Interface (CLI) layer for PATCHGRID.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) sequencing the directional
//! edge-distance scans and the split-patch pipeline over one input raster.
//!
//! If you are embedding PATCHGRID into another application, prefer the
//! high-level `patchgrid::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
