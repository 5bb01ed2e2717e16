//! P3 decoding.
//!
//! The whole file is materialized before tokenizing. Tokens are separated
//! by any ASCII whitespace; `#` starts a comment that runs to end of line.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{Raster, Rgb, PPM_MAGIC};
use crate::error::RasterError;

/// Whitespace-separated tokens with comments stripped.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.find('#').map_or(line, |i| &line[..i]))
        .flat_map(str::split_ascii_whitespace)
}

/// Pull the next header field and parse it as a positive integer.
fn header_field<'a, T>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, RasterError>
where
    T: FromStr + Default + PartialEq,
{
    let token = tokens.next().ok_or(RasterError::MissingField { field })?;
    match token.parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(RasterError::InvalidValue {
            field,
            value: token.to_string(),
        }),
    }
}

impl Raster {
    /// Read and parse the P3 file at `path`.
    ///
    /// The returned raster saves back to `path` until a transform renames it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => RasterError::NotFound {
                path: path.to_path_buf(),
            },
            _ => RasterError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let raster = Self::from_reader(path, file)?;
        tracing::debug!(
            path = %path.display(),
            width = raster.width,
            height = raster.height,
            max_value = raster.max_value,
            "Loaded raster"
        );
        Ok(raster)
    }

    /// Parse a P3 image from any reader. `path` becomes the save target.
    pub fn from_reader(path: impl Into<PathBuf>, mut reader: impl Read) -> Result<Self, RasterError> {
        let path = path.into();
        let mut text = String::new();
        if let Err(source) = reader.read_to_string(&mut text) {
            return Err(RasterError::Io { path, source });
        }
        Self::parse(path, &text)
    }

    /// Parse P3 text already held in memory. `path` becomes the save target.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self, RasterError> {
        let mut tokens = tokenize(text);

        let magic = tokens.next().unwrap_or_default();
        if magic != PPM_MAGIC {
            return Err(RasterError::UnsupportedFormat {
                found: magic.to_string(),
            });
        }

        let width: usize = header_field(&mut tokens, "width")?;
        let height: usize = header_field(&mut tokens, "height")?;
        let max_value: u16 = header_field(&mut tokens, "max value")?;

        let len = width
            .checked_mul(height)
            .ok_or(RasterError::OutOfMemory { width, height })?;
        let expected = len
            .checked_mul(3)
            .ok_or(RasterError::OutOfMemory { width, height })?;

        let mut samples: Vec<Rgb> = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| RasterError::OutOfMemory { width, height })?;

        let mut found = 0;
        let mut channels = [0u16; 3];
        for token in tokens.by_ref().take(expected) {
            channels[found % 3] = token.parse().map_err(|_| RasterError::InvalidValue {
                field: "sample",
                value: token.to_string(),
            })?;
            found += 1;
            if found % 3 == 0 {
                let [r, g, b] = channels;
                samples.push(Rgb::new(r, g, b));
            }
        }
        if found < expected {
            return Err(RasterError::Truncated { expected, found });
        }

        Self::new(path, width, height, max_value, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_TWO: &str = "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n0 0 0\n";

    #[test]
    fn test_parse_header_and_samples() {
        let raster = Raster::parse("a.ppm", TWO_BY_TWO).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.max_value(), 255);
        assert_eq!(
            raster.samples(),
            &[Rgb::splat(255), Rgb::splat(0), Rgb::splat(0), Rgb::splat(0)]
        );
    }

    #[test]
    fn test_parse_tolerates_any_whitespace() {
        let text = "P3 2\t1\r\n  255 1 2 3\n\n4\n5 6";
        let raster = Raster::parse("a.ppm", text).unwrap();
        assert_eq!(raster.samples(), &[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
    }

    #[test]
    fn test_parse_skips_comments() {
        let text = "P3\n# written by hand\n1 1 # one pixel\n255\n10 20 30 # red-ish\n";
        let raster = Raster::parse("a.ppm", text).unwrap();
        assert_eq!(raster.samples(), &[Rgb::new(10, 20, 30)]);
    }

    #[test]
    fn test_parse_rejects_other_magic() {
        let err = Raster::parse("a.ppm", "P6\n1 1\n255\n").unwrap_err();
        assert!(matches!(err, RasterError::UnsupportedFormat { found } if found == "P6"));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let err = Raster::parse("a.ppm", "").unwrap_err();
        assert!(matches!(err, RasterError::UnsupportedFormat { found } if found.is_empty()));
    }

    #[test]
    fn test_parse_missing_header_field() {
        let err = Raster::parse("a.ppm", "P3\n2 2\n").unwrap_err();
        assert!(matches!(err, RasterError::MissingField { field: "max value" }));
    }

    #[test]
    fn test_parse_non_numeric_header_field() {
        let err = Raster::parse("a.ppm", "P3\nwide 2\n255\n").unwrap_err();
        assert!(matches!(
            err,
            RasterError::InvalidValue { field: "width", value } if value == "wide"
        ));
    }

    #[test]
    fn test_parse_zero_dimension() {
        let err = Raster::parse("a.ppm", "P3\n0 2\n255\n").unwrap_err();
        assert!(matches!(err, RasterError::InvalidValue { field: "width", .. }));
    }

    #[test]
    fn test_parse_truncated_samples() {
        let err = Raster::parse("a.ppm", "P3\n2 1\n255\n1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            RasterError::Truncated {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_parse_bad_sample() {
        let err = Raster::parse("a.ppm", "P3\n1 1\n255\n1 -2 3\n").unwrap_err();
        assert!(matches!(
            err,
            RasterError::InvalidValue { field: "sample", value } if value == "-2"
        ));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let raster = Raster::parse("a.ppm", "P3\n1 1\n255\n1 2 3\n4 5 6\n").unwrap();
        assert_eq!(raster.samples(), &[Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn test_parse_huge_dimensions_fail_cleanly() {
        let text = format!("P3\n{} {}\n255\n", usize::MAX, 2);
        let err = Raster::parse("a.ppm", &text).unwrap_err();
        assert!(matches!(err, RasterError::OutOfMemory { .. }));
    }

    #[test]
    fn test_from_reader() {
        let raster = Raster::from_reader("r.ppm", TWO_BY_TWO.as_bytes()).unwrap();
        assert_eq!(raster.path(), Path::new("r.ppm"));
        assert_eq!(raster.width(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ppm");
        let err = Raster::open(&path).unwrap_err();
        assert!(matches!(err, RasterError::NotFound { path: p } if p == path));
    }

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.ppm");
        std::fs::write(&path, TWO_BY_TWO).unwrap();

        let raster = Raster::open(&path).unwrap();
        assert_eq!(raster.path(), path.as_path());
        assert_eq!(raster.samples()[0], Rgb::splat(255));
    }
}
