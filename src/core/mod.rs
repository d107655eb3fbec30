//! Core building blocks: the `ImageMatrix` value, filter kernels, the step
//! pipeline and serializable parameters. These are consumed by the high-level
//! `api` module.
pub mod matrix;
pub mod params;
pub mod processing;
