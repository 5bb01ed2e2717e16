//! 2x2 ordered dithering.
//!
//! The raster is first floored to even dimensions (a trailing odd row or
//! column is dropped). Each non-overlapping 2x2 block is then reduced per
//! channel to its mean level `a = sum / (4 * 255)`, and the block's four
//! samples for that channel are replaced by a fixed binary [`Mask`]:
//!
//! | Level | Mask (UL LL UR LR) |
//! |-------|--------------------|
//! | `a > 0.875` | `1 1 1 1` |
//! | `a > 0.625` | `1 1 0 1` |
//! | `a > 0.375` | `1 0 0 1` |
//! | `a == 0.125` | `0 0 1 0` |
//! | otherwise | `0 0 0 0` |
//!
//! The quarter band matches one exact level only. With integer samples the
//! block sum would have to be 127.5, so it is never selected for parsed
//! input.

use crate::error::RasterError;
use crate::raster::{Channel, Raster};

/// Divisor turning a block's channel sum into a level in `0.0..=1.0`.
const BLOCK_FULL_SCALE: f64 = 4.0 * 255.0;

/// Binary 2x2 pattern, stored upper-left, lower-left, upper-right,
/// lower-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask(pub [u16; 4]);

impl Mask {
    pub const FULL: Mask = Mask([1, 1, 1, 1]);
    pub const THREE_QUARTERS: Mask = Mask([1, 1, 0, 1]);
    pub const HALF: Mask = Mask([1, 0, 0, 1]);
    pub const QUARTER: Mask = Mask([0, 0, 1, 0]);
    pub const EMPTY: Mask = Mask([0, 0, 0, 0]);

    /// Select the mask for a block level.
    #[allow(clippy::float_cmp)]
    pub fn for_level(level: f64) -> Mask {
        if level > 0.875 {
            Mask::FULL
        } else if level > 0.625 {
            Mask::THREE_QUARTERS
        } else if level > 0.375 {
            Mask::HALF
        } else if level == 0.125 {
            Mask::QUARTER
        } else {
            Mask::EMPTY
        }
    }

    /// Level of a block whose four samples sum to `sum` on one channel.
    #[inline]
    pub fn level(sum: u32) -> f64 {
        f64::from(sum) / BLOCK_FULL_SCALE
    }
}

/// Largest even value not above `n`.
#[inline]
fn floor_even(n: usize) -> usize {
    n & !1
}

pub(super) fn dither(raster: &mut Raster) -> Result<(), RasterError> {
    let width = floor_even(raster.width());
    let height = floor_even(raster.height());
    if width == 0 || height == 0 {
        tracing::warn!(
            width = raster.width(),
            height = raster.height(),
            "Raster too small to dither"
        );
        return Err(RasterError::InvalidGeometry {
            width: raster.width(),
            height: raster.height(),
        });
    }
    if (width, height) != (raster.width(), raster.height()) {
        tracing::debug!(
            from_width = raster.width(),
            from_height = raster.height(),
            width,
            height,
            "Cropping to even dimensions"
        );
        raster.crop(width, height);
    }

    let samples = raster.samples_mut();
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let upper_left = y * width + x;
            let lower_left = upper_left + width;
            let block = [upper_left, lower_left, upper_left + 1, lower_left + 1];

            for channel in Channel::ALL {
                let sum = block
                    .iter()
                    .map(|&i| u32::from(samples[i].channel(channel)))
                    .sum();
                let Mask(bits) = Mask::for_level(Mask::level(sum));
                for (&i, bit) in block.iter().zip(bits) {
                    samples[i].set_channel(channel, bit);
                }
            }
        }
    }

    raster.set_max_value(1);
    Ok(())
}
