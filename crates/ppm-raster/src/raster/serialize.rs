//! P3 encoding.
//!
//! Output layout: magic, `width height`, max value, then one `R G B` line
//! per sample in row-major order.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use super::{Raster, PPM_MAGIC};
use crate::error::RasterError;

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PPM_MAGIC}")?;
        writeln!(f, "{} {}", self.width, self.height)?;
        writeln!(f, "{}", self.max_value)?;
        for sample in &self.samples {
            writeln!(f, "{} {} {}", sample.r, sample.g, sample.b)?;
        }
        Ok(())
    }
}

impl Raster {
    /// Write the P3 text to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Create or truncate the file at [`Raster::path`] and write the image.
    pub fn save(&self) -> Result<(), RasterError> {
        let write_failed = |source| RasterError::WriteFailed {
            path: self.path.clone(),
            source,
        };
        let file = File::create(&self.path).map_err(write_failed)?;
        self.write_to(BufWriter::new(file)).map_err(write_failed)?;
        tracing::debug!(
            path = %self.path.display(),
            width = self.width,
            height = self.height,
            "Saved raster"
        );
        Ok(())
    }
}
