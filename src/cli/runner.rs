use tracing::info;
use tracing_subscriber::EnvFilter;

use quadcrop::{CropParams, RngSource, augment_directory};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    info!("Source directory: {:?}", args.source_dir);
    info!("Destination directory: {:?}", args.dest_dir);

    let mut rng = RngSource::from_entropy();
    augment_directory(
        &args.source_dir,
        &args.dest_dir,
        &CropParams::default(),
        &mut rng,
    )
    .map_err(AppError::from)?;

    Ok(())
}
