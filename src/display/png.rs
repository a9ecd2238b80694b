use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use image::{Rgb, RgbImage};

use crate::display::pacing::FramePacer;
use crate::display::surface::{DisplaySurface, ShakeCue, aligned_extent};
use crate::foundation::error::{ChromacastError, ChromacastResult};

/// Headless surface that writes every presented frame to `<dir>/frame_NNNNNN.png`.
///
/// The shake displacement is baked into the written image. A `clear` writes a blank
/// `<dir>/clear_NNNNNN.png` instead; blanks neither advance the frame numbering nor count toward
/// `max_frames`. The surface reports closed once `max_frames` frames have been written.
#[derive(Debug)]
pub struct PngSequenceSurface {
    dir: PathBuf,
    width: u32,
    cue: ShakeCue,
    written: u64,
    cleared: u64,
    max_frames: Option<u64>,
}

impl PngSequenceSurface {
    /// Create the output directory and a surface of `width` (rounded up to a multiple of 4).
    pub fn create(dir: impl Into<PathBuf>, width: u32) -> ChromacastResult<Self> {
        let dir = dir.into();
        if width == 0 {
            return Err(ChromacastError::validation("surface width must be non-zero"));
        }
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create frame output dir '{}'", dir.display()))?;
        Ok(Self {
            dir,
            width: aligned_extent(width),
            cue: ShakeCue::default(),
            written: 0,
            cleared: 0,
            max_frames: None,
        })
    }

    /// Close after `max_frames` presented frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Blank frames written by `clear`.
    pub fn cleared(&self) -> u64 {
        self.cleared
    }

    fn write(&self, name: &str, img: &RgbImage) -> ChromacastResult<()> {
        let path = self.dir.join(name);
        img.save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

impl DisplaySurface for PngSequenceSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn show(&mut self, frame: &RgbImage, delay: Duration) -> ChromacastResult<()> {
        let (dx, dy) = self.cue.offset();
        let mut canvas = RgbImage::from_pixel(self.width, self.width, Rgb([0, 0, 0]));
        image::imageops::replace(&mut canvas, frame, i64::from(dx), i64::from(dy));
        let name = format!("frame_{:06}.png", self.written);
        FramePacer::new(delay).pace(|| self.write(&name, &canvas))?;
        self.written += 1;
        Ok(())
    }

    fn shake(&mut self, cycles: u32) {
        self.cue.shake(cycles);
    }

    fn clear(&mut self) {
        let blank = RgbImage::from_pixel(self.width, self.width, Rgb([0, 0, 0]));
        let name = format!("clear_{:06}.png", self.cleared);
        match self.write(&name, &blank) {
            Ok(()) => self.cleared += 1,
            Err(err) => tracing::warn!(error = %err, "failed to write cleared frame"),
        }
    }

    fn should_close(&self) -> bool {
        self.max_frames.is_some_and(|max| self.written >= max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/png.rs"]
mod tests;
