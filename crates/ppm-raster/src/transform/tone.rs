//! Per-sample transforms: grayscale, black-and-white and compress.

use crate::raster::{Raster, Rgb};

/// Channel mean, rounded half away from zero.
#[inline]
fn mean(sample: Rgb) -> f64 {
    f64::from(sample.sum()) / 3.0
}

#[inline]
fn to_channel(value: f64) -> u16 {
    value.round() as u16
}

pub(super) fn grayscale(raster: &mut Raster) {
    for sample in raster.samples_mut() {
        *sample = Rgb::splat(to_channel(mean(*sample)));
    }
}

/// The mean is scaled by 1/255 before rounding, so for 8-bit input this
/// thresholds at a mean of 127.5.
pub(super) fn black_and_white(raster: &mut Raster) {
    for sample in raster.samples_mut() {
        *sample = Rgb::splat(to_channel(mean(*sample) / 255.0));
    }
    raster.set_max_value(1);
}

pub(super) fn compress(raster: &mut Raster) {
    let scale = |c: u16| to_channel(f64::from(c) / 255.0);
    for sample in raster.samples_mut() {
        *sample = Rgb::new(scale(sample.r), scale(sample.g), scale(sample.b));
    }
    raster.set_max_value(1);
}
