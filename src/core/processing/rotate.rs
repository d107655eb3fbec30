use ndarray::{Array2, ArrayView2};

/// Quarter turn: output `(x, y)` is input `(rows - 1 - y, x)`.
///
/// The result has the dimensions swapped and is built into a fresh buffer.
pub fn quarter_turn(src: ArrayView2<f64>) -> Array2<f64> {
    let (rows, cols) = src.dim();
    Array2::from_shape_fn((cols, rows), |(x, y)| src[[rows - 1 - y, x]])
}
