//! Array kernels behind each filter, the 8-bit autoscaler used on encode and
//! the step pipeline that chains them.
pub mod autoscale;
pub mod blur;
pub mod concat;
pub mod contour;
pub mod grayscale;
pub mod noise;
pub mod pipeline;
pub mod rotate;
pub mod segment;
