use crate::display::pacing::{FramePacer, PauseCooldown};
use crate::display::surface::DisplaySurface;
use crate::encode::controller::Encoder;
use crate::encode::status::RenderStatus;
use crate::foundation::error::{ChromacastError, ChromacastResult};

/// Counters collected by [`drive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveStats {
    /// Loop iterations, paused ones included.
    pub ticks: u64,
    /// Ticks skipped because the cooldown was running.
    pub paused_ticks: u64,
    /// Frames handed to the surface.
    pub presented: u64,
    /// Frames composited.
    pub produced: u64,
}

/// Run the present-then-produce loop until the surface closes, the session ends or `max_ticks`
/// iterations have run.
///
/// Each tick counts the cooldown down first; while it is still running nothing is rendered. A
/// running tick presents the pending frame and then composites the next one, so composition
/// overlaps the visible interval. Every tick takes at least the pacer interval.
#[tracing::instrument(skip_all, fields(interval_ms = pacer.interval().as_millis() as u64))]
pub fn drive<D: DisplaySurface>(
    encoder: &mut Encoder<D>,
    pacer: &FramePacer,
    cooldown: &mut PauseCooldown,
    max_ticks: Option<u64>,
) -> ChromacastResult<DriveStats> {
    if encoder.display().is_none() {
        return Err(ChromacastError::display_unavailable(
            "attach a display surface before driving the encoder",
        ));
    }

    let mut stats = DriveStats::default();
    while max_ticks.is_none_or(|max| stats.ticks < max) {
        if encoder.display_closed() {
            break;
        }
        stats.ticks += 1;

        cooldown.tick();
        if cooldown.is_paused() {
            stats.paused_ticks += 1;
            pacer.pace(|| ());
            continue;
        }

        let step = pacer.pace(|| -> ChromacastResult<_> {
            let status = encoder.render()?;
            let produced = encoder.next_frame()?;
            Ok((status, produced))
        })?;

        match step {
            (RenderStatus::Closed, None) => {
                tracing::debug!(ticks = stats.ticks, "nothing left to drive");
                break;
            }
            (status, produced) => {
                if status == RenderStatus::Presented {
                    stats.presented += 1;
                }
                if produced.is_some() {
                    stats.produced += 1;
                }
            }
        }
    }

    tracing::info!(
        ticks = stats.ticks,
        presented = stats.presented,
        produced = stats.produced,
        "drive loop finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/driver.rs"]
mod tests;
