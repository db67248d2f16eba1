//! High-level library API: augment one PNG or a whole directory tree.
//! Prefer these entry points over the `core` and `io` primitives when
//! embedding quadcrop.
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::cropper::QuadrantCropper;
use crate::core::params::CropParams;
use crate::core::random::RandomSource;
use crate::error::{Error, Result};
use crate::io::{crop_output_path, load_png, png_files, write_png};
use crate::types::Quadrant;

/// Outcome of augmenting a single image.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<Quadrant>,
    pub write_errors: usize,
}

/// Counters over a directory run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub images: usize,
    pub crops_written: usize,
    pub crops_skipped: usize,
    pub failed: usize,
}

/// Create `dest` and any missing parents (mode 0755 on Unix).
pub fn prepare_destination(dest: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder
        .create(dest)
        .map_err(|source| Error::CreateDestination {
            path: dest.to_path_buf(),
            source,
        })
}

/// Decode `source`, cut both quadrant crops and write them into `dest_dir`.
///
/// A decode failure is returned as `Err`. Skipped crops and failed writes
/// are logged and recorded in the report; they never stop the other crop.
pub fn augment_file<R: RandomSource + ?Sized>(
    source: &Path,
    dest_dir: &Path,
    cropper: &QuadrantCropper,
    rng: &mut R,
) -> Result<FileReport> {
    let img = load_png(source)?;
    let mut report = FileReport::default();

    for (quadrant, outcome) in cropper.crop_pair(&img, rng) {
        match outcome {
            Ok((_rect, region)) => {
                let output = crop_output_path(dest_dir, source, quadrant);
                match write_png(&region, &output) {
                    Ok(()) => report.written.push(output),
                    Err(e) => {
                        warn!("  [!] {}", e);
                        report.write_errors += 1;
                    }
                }
            }
            Err(skipped) => {
                warn!("  [!] Skipping crop for {:?}: {}", source, skipped);
                report.skipped.push(quadrant);
            }
        }
    }

    Ok(report)
}

/// Augment every PNG under `source_dir` into the flat `dest_dir`.
///
/// The destination is created first. Destination or walk failures end the
/// run with `Err`; per-image failures are logged, counted and passed over.
pub fn augment_directory<R: RandomSource + ?Sized>(
    source_dir: &Path,
    dest_dir: &Path,
    params: &CropParams,
    rng: &mut R,
) -> Result<BatchReport> {
    prepare_destination(dest_dir)?;
    let cropper = QuadrantCropper::new(*params);
    let mut report = BatchReport::default();

    info!("Scanning {:?}...", source_dir);

    for path in png_files(source_dir) {
        let path = path?;
        info!("-> Processing: {:?}", path);
        report.images += 1;

        match augment_file(&path, dest_dir, &cropper, rng) {
            Ok(file) => {
                report.crops_written += file.written.len();
                report.crops_skipped += file.skipped.len();
                report.failed += file.write_errors;
            }
            Err(e) => {
                warn!("  [!] Error processing {:?}: {}", path, e);
                report.failed += 1;
            }
        }
    }

    info!("Augmentation complete.");
    Ok(report)
}
