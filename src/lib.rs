//! ppmkit - plain-text PPM image transforms
//!
//! Interactive session and configuration on top of the `ppm-raster` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
