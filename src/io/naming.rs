use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::types::Quadrant;

/// `<dest_dir>/<stem>_crop_<N><ext>`, where `ext` keeps the source's casing.
/// Source subdirectories are not mirrored.
pub fn crop_output_path(dest_dir: &Path, source: &Path, quadrant: Quadrant) -> PathBuf {
    let mut name: OsString = source.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("_crop_{}", quadrant.crop_number()));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    dest_dir.join(name)
}
