use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Case-insensitive `.png` suffix check on a file name.
pub fn is_png_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".png")
}

/// Recursively yields regular files under `root` whose name ends in `.png`.
/// Directories and other files are passed over; walk errors are yielded
/// as `Err` and the caller decides whether to stop.
pub fn png_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let wanted = entry.file_type().is_file()
                    && is_png_file_name(&entry.file_name().to_string_lossy());
                wanted.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(e.into())),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_png_suffix_any_case() {
        assert!(is_png_file_name("a.png"));
        assert!(is_png_file_name("A.PNG"));
        assert!(is_png_file_name("mixed.PnG"));
        assert!(!is_png_file_name("b.txt"));
        assert!(!is_png_file_name("png"));
        assert!(!is_png_file_name("a.png.bak"));
    }

    #[test]
    fn test_walk_is_recursive_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir(root.join("folder.png")).unwrap();
        fs::write(root.join("a.png"), b"").unwrap();
        fs::write(root.join("b.txt"), b"").unwrap();
        fs::write(root.join("nested/C.PNG"), b"").unwrap();
        fs::write(root.join("nested/deeper/d.png"), b"").unwrap();

        let mut found: Vec<PathBuf> = png_files(root)
            .collect::<Result<Vec<_>>>()
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("nested/C.PNG"),
                PathBuf::from("nested/deeper/d.png"),
            ]
        );
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut iter = png_files(&missing);
        assert!(matches!(iter.next(), Some(Err(crate::Error::Walk(_)))));
    }
}
