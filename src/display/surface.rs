use std::time::Duration;

use image::RgbImage;

use crate::foundation::error::ChromacastResult;

/// A surface that can present frames.
///
/// Pacing belongs to the surface: `show` is handed a delay hint and is expected to keep each
/// frame visible for that long, net of its own presentation cost.
pub trait DisplaySurface {
    /// Edge length of the square frames this surface shows.
    fn width(&self) -> u32;
    /// Present `frame` and hold it for `delay`.
    fn show(&mut self, frame: &RgbImage, delay: Duration) -> ChromacastResult<()>;
    /// Advance the shake cue by `cycles` steps; `0` returns it to the home position.
    fn shake(&mut self, cycles: u32);
    /// Blank the surface.
    fn clear(&mut self);
    /// Return `true` once the surface has been closed.
    fn should_close(&self) -> bool;
}

/// Largest extent that is a multiple of 4.
pub const MAX_ALIGNED_EXTENT: u32 = u32::MAX - 3;

/// Round a requested surface extent up to a multiple of 4, saturating at [`MAX_ALIGNED_EXTENT`].
pub fn aligned_extent(px: u32) -> u32 {
    px.checked_next_multiple_of(4).unwrap_or(MAX_ALIGNED_EXTENT)
}

/// Offsets visited by the shake cue, in units of the cue magnitude.
const SHAKE_STEPS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Small cyclic displacement applied to presented frames, marking frame changes for cameras.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShakeCue {
    magnitude: i32,
    step: Option<usize>,
}

impl ShakeCue {
    /// Create a cue that moves frames by `magnitude` pixels per axis.
    pub fn new(magnitude: i32) -> Self {
        Self {
            magnitude,
            step: None,
        }
    }

    /// Advance by `cycles`; `0` resets to home.
    pub fn shake(&mut self, cycles: u32) {
        if cycles == 0 {
            self.step = None;
            return;
        }
        let start = self.step.map_or(0, |s| s + 1);
        self.step = Some((start + (cycles as usize) - 1) % SHAKE_STEPS.len());
    }

    /// Current displacement in pixels.
    pub fn offset(&self) -> (i32, i32) {
        match self.step {
            None => (0, 0),
            Some(s) => {
                let (dx, dy) = SHAKE_STEPS[s];
                (dx * self.magnitude, dy * self.magnitude)
            }
        }
    }
}

impl Default for ShakeCue {
    fn default() -> Self {
        Self::new(8)
    }
}

/// One frame captured by [`InMemorySurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct PresentedFrame {
    /// Frame pixels as handed to `show`.
    pub image: RgbImage,
    /// Delay hint passed with the frame.
    pub delay: Duration,
    /// Shake displacement at presentation time.
    pub offset: (i32, i32),
}

/// Surface that records everything it is asked to do. For tests and debugging.
#[derive(Clone, Debug)]
pub struct InMemorySurface {
    width: u32,
    cue: ShakeCue,
    presented: Vec<PresentedFrame>,
    shakes: Vec<u32>,
    clears: usize,
    closed: bool,
}

impl InMemorySurface {
    /// Create a surface; `width` is rounded up to a multiple of 4.
    pub fn new(width: u32) -> Self {
        Self {
            width: aligned_extent(width),
            cue: ShakeCue::default(),
            presented: Vec::new(),
            shakes: Vec::new(),
            clears: 0,
            closed: false,
        }
    }

    /// Frames presented so far.
    pub fn presented(&self) -> &[PresentedFrame] {
        &self.presented
    }

    /// Arguments of every `shake` call, in order.
    pub fn shakes(&self) -> &[u32] {
        &self.shakes
    }

    /// Number of `clear` calls.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Current shake displacement.
    pub fn shake_offset(&self) -> (i32, i32) {
        self.cue.offset()
    }

    /// Simulate the user closing the surface.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl DisplaySurface for InMemorySurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn show(&mut self, frame: &RgbImage, delay: Duration) -> ChromacastResult<()> {
        self.presented.push(PresentedFrame {
            image: frame.clone(),
            delay,
            offset: self.cue.offset(),
        });
        Ok(())
    }

    fn shake(&mut self, cycles: u32) {
        self.shakes.push(cycles);
        self.cue.shake(cycles);
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/surface.rs"]
mod tests;
