//! In-memory raster store.
//!
//! [`Raster`] owns a row-major grid of [`Rgb`] samples together with the
//! format metadata needed to write it back out: the declared maximum channel
//! value and the path the next save goes to.
//!
//! Parsing lives in [`parse`](self::parse), text output in
//! [`serialize`](self::serialize).

mod parse;
mod serialize;

use std::path::{Path, PathBuf};

use crate::error::RasterError;

/// Magic token that opens every plain-text full-color PPM file.
pub const PPM_MAGIC: &str = "P3";

/// One color channel of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in file order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// A single sample: one red, green and blue intensity.
///
/// Channels are stored as `u16` so any `maxValue` a P3 file may declare
/// (up to 65535) survives a round-trip. After a thresholding transform the
/// same fields hold 0/1 indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// A sample with all three channels set to `value`.
    #[inline]
    pub const fn splat(value: u16) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u16) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }

    /// Sum of the three channels, widened so it cannot overflow.
    #[inline]
    pub fn sum(&self) -> u32 {
        u32::from(self.r) + u32::from(self.g) + u32::from(self.b)
    }
}

/// A width x height color image plus its output metadata.
///
/// Created by [`Raster::open`] / [`Raster::parse`], mutated by
/// [`Raster::apply`], and consumed by [`Raster::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Where [`Raster::save`] writes to.
    path: PathBuf,
    width: usize,
    height: usize,
    max_value: u16,
    /// Row-major samples, `width * height` entries.
    samples: Vec<Rgb>,
}

impl Raster {
    /// Build a raster from already decoded samples.
    ///
    /// Fails with [`RasterError::InvalidValue`] if a dimension or
    /// `max_value` is zero, and with [`RasterError::Truncated`] if
    /// `samples` does not hold exactly `width * height` entries.
    pub fn new(
        path: impl Into<PathBuf>,
        width: usize,
        height: usize,
        max_value: u16,
        samples: Vec<Rgb>,
    ) -> Result<Self, RasterError> {
        if width == 0 {
            return Err(RasterError::InvalidValue {
                field: "width",
                value: width.to_string(),
            });
        }
        if height == 0 {
            return Err(RasterError::InvalidValue {
                field: "height",
                value: height.to_string(),
            });
        }
        if max_value == 0 {
            return Err(RasterError::InvalidValue {
                field: "max value",
                value: max_value.to_string(),
            });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(RasterError::OutOfMemory { width, height })?;
        if samples.len() != expected {
            return Err(RasterError::Truncated {
                expected: expected * 3,
                found: samples.len() * 3,
            });
        }

        Ok(Self {
            path: path.into(),
            width,
            height,
            max_value,
            samples,
        })
    }

    /// A raster where every sample is `fill`.
    pub fn filled(
        path: impl Into<PathBuf>,
        width: usize,
        height: usize,
        max_value: u16,
        fill: Rgb,
    ) -> Result<Self, RasterError> {
        let len = width
            .checked_mul(height)
            .ok_or(RasterError::OutOfMemory { width, height })?;
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| RasterError::OutOfMemory { width, height })?;
        samples.resize(len, fill);
        Self::new(path, width, height, max_value, samples)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[Rgb] {
        &self.samples
    }

    /// One row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.samples[start..start + self.width]
    }

    /// The sample at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.samples[y * self.width + x])
        } else {
            None
        }
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [Rgb] {
        &mut self.samples
    }

    pub(crate) fn set_max_value(&mut self, max_value: u16) {
        self.max_value = max_value;
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    /// Keep only the top-left `width` x `height` region.
    ///
    /// Both dimensions must be no larger than the current ones.
    pub(crate) fn crop(&mut self, width: usize, height: usize) {
        debug_assert!(width <= self.width && height <= self.height);
        if width == self.width {
            self.samples.truncate(width * height);
        } else {
            let mut write = 0;
            for y in 0..height {
                let read = y * self.width;
                self.samples.copy_within(read..read + width, write);
                write += width;
            }
            self.samples.truncate(write);
        }
        self.width = width;
        self.height = height;
    }
}
