//! ppm-raster: plain-text PPM rasters and their transforms
//!
//! This library reads `P3` (ASCII full-color PPM) images into an owned
//! [`Raster`], mutates them with one of four [`Transform`]s and writes the
//! result back in the same textual format.
//!
//! # Quick Start
//!
//! ```
//! use ppm_raster::{Raster, Transform};
//!
//! let text = "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n0 0 0\n";
//! let mut raster = Raster::parse("image.ppm", text).unwrap();
//!
//! raster.apply(Transform::Grayscale).unwrap();
//! assert_eq!(raster.to_string(), text);
//! ```
//!
//! # Ownership
//!
//! [`Raster::transform()`] takes the raster by value: it mutates the
//! samples, renames the output with the transform's tag, saves, and drops
//! the raster. A raster can therefore be transformed and saved exactly once.
//!
//! ```no_run
//! use ppm_raster::{Raster, Transform};
//!
//! let raster = Raster::open("photo.ppm")?;
//! let written = raster.transform(Transform::Dither)?;
//! assert_eq!(written.to_str(), Some("dth_photo.ppm"));
//! # Ok::<(), ppm_raster::RasterError>(())
//! ```
//!
//! # Transforms
//!
//! | Transform | Tag | Max value after |
//! |-----------|-----|-----------------|
//! | [`Transform::Grayscale`] | `gs_` | unchanged |
//! | [`Transform::BlackAndWhite`] | `bw_` | 1 |
//! | [`Transform::Compress`] | `cmp_` | 1 |
//! | [`Transform::Dither`] | `dth_` | 1 |

pub mod error;
pub mod raster;
pub mod transform;


pub use error::RasterError;
pub use raster::{Channel, Raster, Rgb, PPM_MAGIC};
pub use transform::{output_path, Mask, ParseTransformError, Transform};
