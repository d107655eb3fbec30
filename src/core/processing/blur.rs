use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayView2, Axis, s};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_KERNEL_SIZE: usize = 16;

/// Box blur without padding.
///
/// Every output cell `(i, j)` is the floor of the mean of the
/// `kernel_size x kernel_size` window whose top-left corner is `(i, j)`.
/// Only windows that fit entirely inside the input are produced, so the
/// result has shape `(rows - kernel_size + 1, cols - kernel_size + 1)`.
///
/// Rows of the output are computed in parallel; every cell depends only on
/// the input, so the result matches a sequential scan.
pub fn box_blur(src: ArrayView2<f64>, kernel_size: usize) -> Result<Array2<f64>> {
    if kernel_size == 0 {
        return Err(Error::InvalidArgument {
            arg: "kernel_size",
            value: kernel_size.to_string(),
        });
    }
    let (rows, cols) = src.dim();
    if kernel_size > rows || kernel_size > cols {
        return Err(Error::dimension(
            "blur",
            format!("kernel_size {} exceeds image {}x{}", kernel_size, cols, rows),
        ));
    }

    let out_rows = rows - kernel_size + 1;
    let out_cols = cols - kernel_size + 1;
    let area = (kernel_size * kernel_size) as f64;
    debug!(
        "box_blur: kernel={} {}x{} -> {}x{}",
        kernel_size, cols, rows, out_cols, out_rows
    );

    let mut dst = Array2::<f64>::zeros((out_rows, out_cols));
    dst.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                let window = src.slice(s![i..i + kernel_size, j..j + kernel_size]);
                *cell = (window.sum() / area).floor();
            }
        });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    #[test]
    fn test_blur_hand_computed() -> Result<()> {
        let src = array![
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        // window sums: 14 18 22 / 30 34 38 / 46 50 54, divided by 4 and floored
        let expected = array![
            [3.0, 4.0, 5.0],
            [7.0, 8.0, 9.0],
            [11.0, 12.0, 13.0],
        ];
        let blurred = box_blur(src.view(), 2)?;
        assert_eq!(blurred, expected);
        Ok(())
    }

    #[test]
    fn test_blur_shape() -> Result<()> {
        let src = Array2::<f64>::from_shape_fn((7, 11), |(i, j)| (i * j) as f64);
        let blurred = box_blur(src.view(), 3)?;
        assert_eq!(blurred.dim(), (5, 9));
        Ok(())
    }

    #[test]
    fn test_blur_kernel_one_is_identity() -> Result<()> {
        let src = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(box_blur(src.view(), 1)?, src);
        Ok(())
    }

    #[test]
    fn test_blur_floors_fractions() -> Result<()> {
        let src = array![[0.0, 1.0], [1.0, 1.0]];
        assert_eq!(box_blur(src.view(), 2)?, array![[0.0]]);
        Ok(())
    }

    #[test]
    fn test_blur_kernel_too_large() {
        let src = Array2::<f64>::zeros((4, 8));
        let res = box_blur(src.view(), 5);
        assert!(matches!(res, Err(Error::Dimension { op: "blur", .. })));
    }

    #[test]
    fn test_blur_kernel_zero() {
        let src = Array2::<f64>::zeros((4, 4));
        assert!(matches!(
            box_blur(src.view(), 0),
            Err(Error::InvalidArgument { arg: "kernel_size", .. })
        ));
    }
}
