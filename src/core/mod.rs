//! Core crop building blocks: crop parameters, the injectable random source,
//! quadrant-biased geometry and the cropper that applies it to decoded images.
//! These are the primitives consumed by the high-level `api` module.
pub mod cropper;
pub mod geometry;
pub mod params;
pub mod random;
