//! Pixel transforms.
//!
//! Every [`Transform`] follows the same template when run through
//! [`Raster::transform`]: mutate the samples in place, prefix the output
//! file name with the transform's tag, save, and drop the raster.
//!
//! # Transforms
//!
//! - **Grayscale** (`gs_`): every channel becomes the rounded channel mean.
//! - **Black-and-white** (`bw_`): every channel becomes the rounded channel
//!   mean divided by 255; max value 1.
//! - **Compress** (`cmp_`): each channel independently becomes
//!   `round(channel / 255)`; max value 1.
//! - **Dither** (`dth_`): 2x2 ordered dithering with fixed masks, see
//!   [`Mask`]; max value 1.

mod dither;
mod tone;

pub use dither::Mask;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::RasterError;
use crate::raster::Raster;

/// Transform selection.
///
/// Parses from its name (`"grayscale"`) or its tag without the trailing
/// underscore (`"gs"`), case-insensitively.
///
/// ```
/// use ppm_raster::Transform;
///
/// assert_eq!("bw".parse::<Transform>(), Ok(Transform::BlackAndWhite));
/// assert_eq!(Transform::Dither.tag(), "dth_");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Grayscale,
    BlackAndWhite,
    Compress,
    Dither,
}

impl Transform {
    pub const ALL: [Transform; 4] = [
        Transform::Grayscale,
        Transform::BlackAndWhite,
        Transform::Compress,
        Transform::Dither,
    ];

    /// Prefix added to the output file name.
    pub fn tag(self) -> &'static str {
        match self {
            Transform::Grayscale => "gs_",
            Transform::BlackAndWhite => "bw_",
            Transform::Compress => "cmp_",
            Transform::Dither => "dth_",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::BlackAndWhite => "black-and-white",
            Transform::Compress => "compress",
            Transform::Dither => "dither",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no [`Transform`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transform {0:?} (expected grayscale, black-and-white, compress or dither)")]
pub struct ParseTransformError(pub String);

impl FromStr for Transform {
    type Err = ParseTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Transform::ALL
            .into_iter()
            .find(|t| {
                wanted.eq_ignore_ascii_case(t.name())
                    || wanted.eq_ignore_ascii_case(t.tag().trim_end_matches('_'))
            })
            .ok_or_else(|| ParseTransformError(s.to_string()))
    }
}

/// Prefix the file-name component of `path` with `tag`.
///
/// The parent directory is kept, so `dir/a.ppm` becomes `dir/gs_a.ppm`.
pub fn output_path(path: &Path, tag: &str) -> PathBuf {
    let mut prefixed = OsString::from(tag);
    match path.file_name() {
        Some(name) => {
            prefixed.push(name);
            path.with_file_name(prefixed)
        }
        None => {
            prefixed.push(path.as_os_str());
            PathBuf::from(prefixed)
        }
    }
}

impl Raster {
    /// Mutate the samples in place without renaming or saving.
    ///
    /// Only [`Transform::Dither`] can fail, with
    /// [`RasterError::InvalidGeometry`] when the raster has no complete 2x2
    /// block. The raster is left untouched in that case.
    pub fn apply(&mut self, transform: Transform) -> Result<(), RasterError> {
        match transform {
            Transform::Grayscale => tone::grayscale(self),
            Transform::BlackAndWhite => tone::black_and_white(self),
            Transform::Compress => tone::compress(self),
            Transform::Dither => dither::dither(self)?,
        }
        Ok(())
    }

    /// Apply `transform`, save under the tagged path, and release the raster.
    ///
    /// Returns the path that was written. On error nothing is written and
    /// the raster is dropped all the same.
    pub fn transform(mut self, transform: Transform) -> Result<PathBuf, RasterError> {
        self.apply(transform)?;

        let target = output_path(self.path(), transform.tag());
        self.set_path(target);
        self.save()?;

        tracing::info!(
            transform = %transform,
            path = %self.path().display(),
            width = self.width(),
            height = self.height(),
            "Transformed raster"
        );
        Ok(self.path().to_path_buf())
    }
}
