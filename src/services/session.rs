//! Interactive session: load images, then apply menu commands.
//!
//! Input is read as whitespace-separated tokens, so a filename and a menu
//! code can share a line. Each loaded image lives in a slot; a transform
//! takes the raster out of its slot, so an image can be transformed once.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::ops::Range;
use std::path::PathBuf;

use ppm_raster::{Raster, Transform};

use crate::error::SessionError;
use crate::models::{AppConfig, Command};

/// What a finished session did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Files written, in order.
    pub written: Vec<PathBuf>,
    /// Transforms that failed (nothing written, image released).
    pub failed: usize,
    /// Requests for an image that was already transformed.
    pub skipped: usize,
    /// Images never transformed, released at exit.
    pub released: usize,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    pending: VecDeque<String>,
    slots: Vec<Option<Raster>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
            pending: VecDeque::new(),
            slots: Vec::new(),
        }
    }

    /// Number of images still waiting for a transform.
    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for every configured image, retrying each up to
    /// `max_attempts` times.
    pub fn load_images(&mut self) -> Result<(), SessionError> {
        self.slots.clear();
        for slot in 1..=self.config.images {
            let raster = self.prompt_image(slot)?;
            self.slots.push(Some(raster));
        }
        Ok(())
    }

    /// Read menu commands until `0` or end of input.
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        let mut report = SessionReport::default();

        loop {
            write!(self.output, "Command (0-4): ")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                tracing::debug!("Input closed, exiting");
                break;
            };
            match Command::parse(&token) {
                Some(Command::Exit) => break,
                Some(Command::Apply(transform)) => self.apply(transform, &mut report)?,
                None => {
                    tracing::warn!(command = %token, "Unknown command");
                    writeln!(self.output, "Unknown command {token:?}")?;
                }
            }
        }

        report.released = self.loaded();
        self.slots.clear();
        tracing::debug!(released = report.released, "Session finished");
        Ok(report)
    }

    fn prompt_image(&mut self, slot: usize) -> Result<Raster, SessionError> {
        let attempts = self.config.max_attempts;
        for attempt in 1..=attempts {
            write!(self.output, "Image {slot} path: ")?;
            self.output.flush()?;

            let Some(path) = self.next_token()? else {
                return Err(SessionError::InputClosed { slot });
            };
            match Raster::open(&path) {
                Ok(raster) => {
                    tracing::info!(
                        slot,
                        path = %path,
                        width = raster.width(),
                        height = raster.height(),
                        "Loaded image"
                    );
                    return Ok(raster);
                }
                Err(e) => {
                    tracing::warn!(%e, slot, attempt, "Failed to load image");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
        Err(SessionError::NoImage { slot, attempts })
    }

    /// Slots a transform applies to. Dithering only touches the first image
    /// unless `dither_all` is set.
    fn targets(&self, transform: Transform) -> Range<usize> {
        if transform == Transform::Dither && !self.config.dither_all {
            0..self.slots.len().min(1)
        } else {
            0..self.slots.len()
        }
    }

    fn apply(&mut self, transform: Transform, report: &mut SessionReport) -> Result<(), SessionError> {
        for index in self.targets(transform) {
            let slot = index + 1;
            let Some(raster) = self.slots[index].take() else {
                tracing::warn!(slot, transform = %transform, "Image already transformed");
                writeln!(self.output, "Image {slot} was already transformed")?;
                report.skipped += 1;
                continue;
            };

            match raster.transform(transform) {
                Ok(path) => {
                    writeln!(self.output, "Wrote {}", path.display())?;
                    report.written.push(path);
                }
                Err(e) => {
                    tracing::warn!(%e, slot, transform = %transform, "Transform failed");
                    writeln!(self.output, "Image {slot}: {e}")?;
                    report.failed += 1;
                }
            }
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
