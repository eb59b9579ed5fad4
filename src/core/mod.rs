//! Core building blocks: URL normalization/validation and the encode
//! parameter set. These are internal primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod url;
