use tracing::info;

use patchgrid::api::{resolve_split_patches, write_directional_distances};
use patchgrid::core::params::AnalysisParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.block_size == 0 {
        return Err(AppError::ZeroBlockSize.into());
    }

    let params = AnalysisParams {
        background: args.background,
        block_size: args.block_size,
    };

    if !args.skip_distances {
        info!("Computing directional edge distances for {:?}", args.input);
        write_directional_distances(&args.input, &params)?;
    }

    if !args.skip_patches {
        info!("Resolving split patches for {:?}", args.input);
        let report = resolve_split_patches(&args.input, &params)?;
        info!(
            "Patches: {} left, {} right, {} merged group(s)",
            report.patches_left, report.patches_right, report.merged_groups
        );
    }

    Ok(())
}
