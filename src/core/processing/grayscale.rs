use ndarray::{Array2, Array3, ArrayView2, Axis, Zip};

use crate::error::{Error, Result};

/// Luminance weights for R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2989, 0.5870, 0.1140];

/// Weighted luminance of three equally-shaped channel planes:
/// `0.2989*R + 0.5870*G + 0.1140*B` per pixel.
pub fn rgb_planes_to_gray(
    red: ArrayView2<f64>,
    green: ArrayView2<f64>,
    blue: ArrayView2<f64>,
) -> Result<Array2<f64>> {
    if red.dim() != green.dim() || red.dim() != blue.dim() {
        return Err(Error::dimension(
            "grayscale",
            format!(
                "channel planes differ in shape: r={:?} g={:?} b={:?}",
                red.dim(),
                green.dim(),
                blue.dim()
            ),
        ));
    }

    let [wr, wg, wb] = LUMA_WEIGHTS;
    Ok(Zip::from(&red)
        .and(&green)
        .and(&blue)
        .map_collect(|&r, &g, &b| wr * r + wg * g + wb * b))
}

/// Grayscale from an interleaved (height, width, 3) sample cube.
pub fn rgb_cube_to_gray(rgb: &Array3<f64>) -> Result<Array2<f64>> {
    if rgb.len_of(Axis(2)) != 3 {
        return Err(Error::dimension(
            "grayscale",
            format!("expected 3 channels, got {}", rgb.len_of(Axis(2))),
        ));
    }
    rgb_planes_to_gray(
        rgb.index_axis(Axis(2), 0),
        rgb.index_axis(Axis(2), 1),
        rgb.index_axis(Axis(2), 2),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, Array3, array};

    use super::*;

    #[test]
    fn test_weighted_luminance() -> Result<()> {
        let r = array![[255.0, 0.0], [0.0, 10.0]];
        let g = array![[0.0, 255.0], [0.0, 20.0]];
        let b = array![[0.0, 0.0], [255.0, 30.0]];
        let gray = rgb_planes_to_gray(r.view(), g.view(), b.view())?;
        assert_relative_eq!(gray[[0, 0]], 0.2989 * 255.0, epsilon = 1e-9);
        assert_relative_eq!(gray[[0, 1]], 0.5870 * 255.0, epsilon = 1e-9);
        assert_relative_eq!(gray[[1, 0]], 0.1140 * 255.0, epsilon = 1e-9);
        assert_relative_eq!(gray[[1, 1]], 2.989 + 11.74 + 3.42, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_mismatched_planes() {
        let r = Array2::<f64>::zeros((2, 2));
        let g = Array2::<f64>::zeros((2, 3));
        let res = rgb_planes_to_gray(r.view(), g.view(), r.view());
        assert!(matches!(res, Err(Error::Dimension { .. })));
    }

    #[test]
    fn test_cube() -> Result<()> {
        let cube = Array3::from_elem((3, 2, 3), 100.0);
        let gray = rgb_cube_to_gray(&cube)?;
        assert_eq!(gray.dim(), (3, 2));
        for &v in gray.iter() {
            assert_relative_eq!(v, 99.99, epsilon = 1e-9);
        }
        Ok(())
    }
}
