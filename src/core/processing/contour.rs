use ndarray::{Array2, ArrayView2};

/// Horizontal first difference: `|row[k] - row[k - 1]|` for every `k >= 1`.
/// Height is unchanged and width shrinks by one; rows of width 0 or 1 become empty.
pub fn horizontal_difference(src: ArrayView2<f64>) -> Array2<f64> {
    let (rows, cols) = src.dim();
    Array2::from_shape_fn((rows, cols.saturating_sub(1)), |(i, k)| {
        (src[[i, k + 1]] - src[[i, k]]).abs()
    })
}
