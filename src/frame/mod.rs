/// Owned single-channel raster plus capture metadata.
pub mod buffer;
/// Pseudo-random frame synthesis.
pub mod generator;
