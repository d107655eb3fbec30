use ndarray::ArrayView2;
use tracing::debug;

use crate::types::Scaling;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9_f64
}

#[inline]
fn clamp_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Min and max over all finite samples; `None` for an empty or all-NaN matrix.
pub fn finite_range(data: ArrayView2<f64>) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Convert samples to row-major 8-bit luma.
///
/// `MinMax` stretches the finite range onto [0, 255]; a flat matrix falls back
/// to clamping so a uniform image keeps its level.
pub fn autoscale_to_u8(data: ArrayView2<f64>, scaling: Scaling) -> Vec<u8> {
    match (scaling, finite_range(data)) {
        (Scaling::MinMax, Some((lo, hi))) if !approx_eq(lo, hi) => {
            debug!("autoscale: min_max range [{:.3}, {:.3}]", lo, hi);
            let scale = 255.0 / (hi - lo);
            data.iter().map(|&v| clamp_u8((v - lo) * scale)).collect()
        }
        _ => {
            debug!("autoscale: clamp");
            data.iter().map(|&v| clamp_u8(v)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_min_max_stretch() {
        let data = array![[10.0, 20.0], [30.0, 60.0]];
        let out = autoscale_to_u8(data.view(), Scaling::MinMax);
        assert_eq!(out, vec![0, 51, 102, 255]);
    }

    #[test]
    fn test_flat_matrix_keeps_level() {
        let data = array![[127.0, 127.0], [127.0, 127.0]];
        assert_eq!(autoscale_to_u8(data.view(), Scaling::MinMax), vec![127; 4]);
    }

    #[test]
    fn test_clamp() {
        let data = array![[-4.0, 12.4], [12.6, 300.0]];
        assert_eq!(autoscale_to_u8(data.view(), Scaling::Clamp), vec![0, 12, 13, 255]);
    }

    #[test]
    fn test_finite_range_ignores_nan() {
        let data = array![[f64::NAN, 3.0], [1.0, 2.0]];
        assert_eq!(finite_range(data.view()), Some((1.0, 3.0)));
    }
}
