use crate::error::Result;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image file into RGB8 data, returning `(data, width, height)`.
///
/// Blocking; call it from a worker thread, never from the Slint event loop.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}

/// Wraps RGB8 data in a Slint image. Must run on the event loop thread.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use tempfile::tempdir;

    #[test]
    fn test_decodes_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let (data, width, height) = load_image_blocking(&path).unwrap();
        assert_eq!((width, height), (3, 2));
        assert_eq!(data.len(), 3 * 2 * 3);
        assert_eq!(&data[..3], &[200, 10, 10]);
    }

    #[test]
    fn test_not_an_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(matches!(
            load_image_blocking(&path),
            Err(GalleryError::ImageLoad(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(load_image_blocking(&dir.path().join("gone.png")).is_err());
    }
}
