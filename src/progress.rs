//! Progress observation during a transcription session.
//!
//! Progress is diagnostic only: it is surfaced as a synchronous side effect
//! interleaved with stream consumption and never affects the correctness of
//! the accumulated result.

/// Observer for cumulative audio seconds consumed during a session.
pub trait ProgressSink {
    /// Called after each consumed segment.
    ///
    /// The session clamps `transcribed_seconds` before reporting: values are
    /// monotonically non-decreasing and never exceed `total_seconds`.
    fn on_progress(&mut self, transcribed_seconds: f64, total_seconds: f64);
}

/// Sink that discards progress. Used by
/// [`crate::session::TranscriptionSession::run`].
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn on_progress(&mut self, _transcribed_seconds: f64, _total_seconds: f64) {}
}

/// Closures observe progress directly, so callers don't need a dedicated
/// sink type for one-off reporting.
impl<F: FnMut(f64, f64)> ProgressSink for F {
    fn on_progress(&mut self, transcribed_seconds: f64, total_seconds: f64) {
        (*self)(transcribed_seconds, total_seconds)
    }
}

#[cfg(feature = "progress-bar")]
pub use bar::AudioSecondsBar;

#[cfg(feature = "progress-bar")]
mod bar {
    use indicatif::{ProgressBar, ProgressStyle};

    use super::ProgressSink;

    /// Terminal progress bar denominated in audio seconds.
    pub struct AudioSecondsBar {
        bar: ProgressBar,
    }

    /// Bar positions are integers, so seconds are tracked at millisecond
    /// resolution.
    const TICKS_PER_SECOND: f64 = 1000.0;

    impl AudioSecondsBar {
        pub fn new(total_seconds: f64) -> Self {
            let bar = ProgressBar::new((total_seconds * TICKS_PER_SECOND) as u64);
            if let Ok(style) = ProgressStyle::with_template(
                "{bar:40.cyan/blue} {percent:>3}% of {msg} audio seconds ({eta})",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }
            bar.set_message(format!("{total_seconds:.2}"));
            Self { bar }
        }

        /// Mark the bar finished. Also called implicitly when the session's
        /// reported progress reaches the total.
        pub fn finish(&self) {
            self.bar.finish();
        }
    }

    impl ProgressSink for AudioSecondsBar {
        fn on_progress(&mut self, transcribed_seconds: f64, total_seconds: f64) {
            self.bar
                .set_position((transcribed_seconds * TICKS_PER_SECOND) as u64);
            if transcribed_seconds >= total_seconds {
                self.bar.finish();
            }
        }
    }
}
