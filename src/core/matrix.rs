//! `ImageMatrix`, the owned grayscale grid that flows through a pipeline, and
//! `Segments`, the terminal shape produced by row-band segmentation.
use std::path::{Path, PathBuf};

use ndarray::{Array2, ArrayView2};
use rand::Rng;
use tracing::info;

use crate::core::params::DEFAULT_SUFFIX;
use crate::core::processing::{blur, concat, contour, grayscale, noise, rotate, segment};
use crate::error::Result;
use crate::io::{derive_band_path, derive_output_path, read_rgb_samples, write_gray};
use crate::types::{ConcatDirection, Scaling};

/// How a matrix is written back to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistOptions {
    pub suffix: String,
    pub scaling: Scaling,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            scaling: Scaling::MinMax,
        }
    }
}

/// A rectangular grid of grayscale samples plus the path it was decoded from.
///
/// Every transformation borrows `self` and returns a new matrix, so a failed
/// operation leaves the original untouched:
///
/// ```no_run
/// use grayfilter::ImageMatrix;
///
/// fn main() -> grayfilter::Result<()> {
///     let img = ImageMatrix::decode("photos/cat.jpg")?;
///     let out = img.blur(4)?.rotate().contour();
///     let path = out.persist()?; // photos/cat_filtered.jpg
///     println!("{}", path.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMatrix {
    data: Array2<f64>,
    source_path: PathBuf,
}

impl ImageMatrix {
    /// Read an image and convert it to grayscale.
    pub fn decode(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rgb = read_rgb_samples(path)?;
        let data = grayscale::rgb_cube_to_gray(&rgb)?;
        Ok(Self::from_array(data, path))
    }

    /// Build from separate R, G and B planes of equal shape.
    pub fn from_rgb_planes(
        red: ArrayView2<f64>,
        green: ArrayView2<f64>,
        blue: ArrayView2<f64>,
        source_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let data = grayscale::rgb_planes_to_gray(red, green, blue)?;
        Ok(Self::from_array(data, source_path))
    }

    /// Wrap an existing grayscale grid.
    pub fn from_array(data: Array2<f64>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            data,
            source_path: source_path.into(),
        }
    }

    fn with_data(&self, data: Array2<f64>) -> Self {
        Self {
            data,
            source_path: self.source_path.clone(),
        }
    }

    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn blur(&self, kernel_size: usize) -> Result<Self> {
        let out = blur::box_blur(self.data.view(), kernel_size)?;
        info!(
            "blur: kernel_size={} {:?} -> {:?}",
            kernel_size,
            self.dim(),
            out.dim()
        );
        Ok(self.with_data(out))
    }

    pub fn contour(&self) -> Self {
        let out = contour::horizontal_difference(self.data.view());
        info!("contour: {:?} -> {:?}", self.dim(), out.dim());
        self.with_data(out)
    }

    pub fn rotate(&self) -> Self {
        let out = rotate::quarter_turn(self.data.view());
        info!("rotate: {:?} -> {:?}", self.dim(), out.dim());
        self.with_data(out)
    }

    /// Salt-and-pepper noise from the caller's random source.
    pub fn salt_and_pepper<R: Rng + ?Sized>(&self, amount: f64, rng: &mut R) -> Result<Self> {
        let mut out = self.data.clone();
        noise::salt_and_pepper_inplace(&mut out, amount, rng)?;
        info!("salt_and_pepper: amount={} on {:?}", amount, self.dim());
        Ok(self.with_data(out))
    }

    pub fn concat(&self, other: &ImageMatrix, direction: ConcatDirection) -> Result<Self> {
        let out = concat::concat_cropped(self.data.view(), other.data.view(), direction)?;
        info!(
            "concat: {} {:?} + {:?} -> {:?}",
            direction,
            self.dim(),
            other.dim(),
            out.dim()
        );
        Ok(self.with_data(out))
    }

    pub fn segment(&self, num_segments: usize) -> Result<Segments> {
        let bands = segment::split_rows(self.data.view(), num_segments)?;
        info!(
            "segment: {:?} into {} bands of {:?} rows",
            self.dim(),
            bands.len(),
            bands.iter().map(|b| b.nrows()).collect::<Vec<_>>()
        );
        Ok(Segments {
            bands,
            source_path: self.source_path.clone(),
        })
    }

    /// Write to `{stem}_filtered{ext}` next to the source and return that path.
    pub fn persist(&self) -> Result<PathBuf> {
        self.persist_with(&PersistOptions::default())
    }

    pub fn persist_with(&self, options: &PersistOptions) -> Result<PathBuf> {
        let output = derive_output_path(&self.source_path, &options.suffix);
        write_gray(&output, self.data.view(), options.scaling)?;
        Ok(output)
    }
}

/// Ordered row bands produced by [`ImageMatrix::segment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    bands: Vec<Array2<f64>>,
    source_path: PathBuf,
}

impl Segments {
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn bands(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> {
        self.bands.iter().map(|b| b.view())
    }

    /// Re-select one band as a matrix so a pipeline can continue from it.
    pub fn select(&self, index: usize) -> Option<ImageMatrix> {
        self.bands
            .get(index)
            .map(|b| ImageMatrix::from_array(b.clone(), self.source_path.clone()))
    }

    pub fn into_matrices(self) -> Vec<ImageMatrix> {
        let source_path = self.source_path;
        self.bands
            .into_iter()
            .map(|b| ImageMatrix::from_array(b, source_path.clone()))
            .collect()
    }

    /// Write band `i` to `{stem}{suffix}_{i}{ext}`; paths are returned in band order.
    pub fn persist(&self) -> Result<Vec<PathBuf>> {
        self.persist_with(&PersistOptions::default())
    }

    pub fn persist_with(&self, options: &PersistOptions) -> Result<Vec<PathBuf>> {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let output = derive_band_path(&self.source_path, &options.suffix, i);
                write_gray(&output, band.view(), options.scaling)?;
                Ok(output)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::Error;

    fn sample(rows: usize, cols: usize) -> ImageMatrix {
        ImageMatrix::from_array(
            Array2::from_shape_fn((rows, cols), |(i, j)| ((i * 13 + j * 7) % 256) as f64),
            "in/sample.png",
        )
    }

    #[test]
    fn test_from_rgb_planes() -> Result<()> {
        let plane = Array2::from_elem((2, 3), 10.0);
        let img = ImageMatrix::from_rgb_planes(plane.view(), plane.view(), plane.view(), "a.png")?;
        assert_eq!(img.dim(), (2, 3));
        assert_eq!(img.source_path(), Path::new("a.png"));
        Ok(())
    }

    #[test]
    fn test_chaining_keeps_source_path() -> Result<()> {
        let img = sample(20, 30);
        let out = img.blur(5)?.rotate().contour();
        // 20x30 -> blur 16x26 -> rotate 26x16 -> contour 26x15
        assert_eq!(out.dim(), (26, 15));
        assert_eq!(out.source_path(), img.source_path());
        Ok(())
    }

    #[test]
    fn test_failed_blur_leaves_input() {
        let img = sample(3, 3);
        let before = img.clone();
        assert!(matches!(img.blur(4), Err(Error::Dimension { .. })));
        assert_eq!(img, before);
    }

    #[test]
    fn test_rotate_four_times() {
        let img = sample(7, 4);
        let back = img.rotate().rotate().rotate().rotate();
        assert_eq!(back, img);
    }

    #[test]
    fn test_salt_and_pepper_zero() -> Result<()> {
        let img = sample(9, 9);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(img.salt_and_pepper(0.0, &mut rng)?, img);
        Ok(())
    }

    #[test]
    fn test_concat_overlap_layout() -> Result<()> {
        let a = ImageMatrix::from_array(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], "a.png");
        let b = ImageMatrix::from_array(array![[7.0, 8.0], [9.0, 10.0]], "b.png");
        let out = a.concat(&b, ConcatDirection::Horizontal)?;
        assert_eq!(out.dim(), (2, 4));
        assert_eq!(out.data().row(0).to_vec(), vec![1.0, 2.0, 7.0, 8.0]);
        assert_eq!(out.source_path(), Path::new("a.png"));
        Ok(())
    }

    #[test]
    fn test_segments_select_and_heights() -> Result<()> {
        let img = sample(11, 3);
        let segments = img.segment(4)?;
        assert_eq!(segments.len(), 4);
        let heights: Vec<usize> = segments.bands().map(|b| b.nrows()).collect();
        assert_eq!(heights, vec![2, 2, 2, 5]);

        let last = segments.select(3).ok_or(Error::InvalidArgument {
            arg: "index",
            value: "3".to_string(),
        })?;
        assert_eq!(last.dim(), (5, 3));
        assert_eq!(last.data(), img.data().slice(ndarray::s![6..11, ..]));
        assert!(segments.select(4).is_none());
        Ok(())
    }

    #[test]
    fn test_segment_short_image_leaves_leading_bands_empty() -> Result<()> {
        let img = sample(3, 2);
        let segments = img.segment(4)?;
        let heights: Vec<usize> = segments.bands().map(|b| b.nrows()).collect();
        assert_eq!(heights, vec![0, 0, 0, 3]);
        // empty bands are valid values but cannot be encoded
        assert!(matches!(segments.persist(), Err(Error::Persist { .. })));
        Ok(())
    }
}
