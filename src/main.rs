//! quadcrop CLI entrypoint.
//!
//! Usage: `quadcrop <SOURCE_DIR> <DEST_DIR> [--verbose]`.
//!
//! Exit status is 2 when the arguments are wrong (clap usage error) and 1
//! when the destination cannot be created or the source walk fails.
//! Unreadable images, skipped crops and failed writes are only logged;
//! the run still exits 0. For programmatic use, see `quadcrop::api`.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
