//! Decode collaborator: turns a raster file into an RGB sample cube.
use std::path::Path;

use ndarray::Array3;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Extensions the `image` backend is expected to decode.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp", "pnm", "pgm", "ppm", "tga",
];

pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Read `path` into a `(height, width, 3)` cube of samples in [0, 255].
///
/// Alpha is dropped and single-channel inputs are replicated into R, G and B.
pub fn read_rgb_samples(path: &Path) -> Result<Array3<f64>> {
    if !path.is_file() {
        return Err(Error::decode(path, "file does not exist"));
    }

    let img = image::open(path).map_err(|e| Error::decode(path, e))?;
    info!(
        "Decoded {:?}: {}x{} ({:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let cube = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
        .map_err(|e| Error::decode(path, e))?;
    debug!("read_rgb_samples: cube shape {:?}", cube.dim());

    Ok(cube.mapv(f64::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extension() {
        assert!(is_supported_extension(Path::new("a/b/photo.JPG")));
        assert!(is_supported_extension(Path::new("scan.tiff")));
        assert!(!is_supported_extension(Path::new("notes.txt")));
        assert!(!is_supported_extension(Path::new("README")));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let res = read_rgb_samples(Path::new("/definitely/not/here.png"));
        assert!(matches!(res, Err(Error::Decode { .. })));
    }
}
