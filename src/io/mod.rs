//! I/O layer for persisting encoded QR matrices.
//! Provides `writers` for PNG raster and SVG vector outputs.
pub mod writers;
