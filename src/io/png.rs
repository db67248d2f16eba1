use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::{Error, Result};

/// Decodes `path` as PNG whatever its extension casing.
pub fn load_png(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ImageReader::new(BufReader::new(file));
    reader.set_format(ImageFormat::Png);
    reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_png(img: &DynamicImage, output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|source| Error::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    // Dropping a BufWriter discards flush errors.
    writer.flush().map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    #[test]
    fn test_write_then_load_keeps_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.PNG");
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));
        write_png(&DynamicImage::ImageRgb8(img), &path).unwrap();

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.to_rgb8().get_pixel(2, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_load_rejects_non_png_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_png(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");
        match load_png(&path) {
            Err(Error::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_to_full_device_fails() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let result = write_png(&img, Path::new("/dev/full"));
        assert!(matches!(
            result,
            Err(Error::Write { .. } | Error::Encode { .. })
        ));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let img = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
        assert!(matches!(write_png(&img, &path), Err(Error::Create { .. })));
    }
}
