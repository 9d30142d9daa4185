use std::io::Write;

use crate::Result;
use crate::segment::Segment;
use crate::segment_encoder::SegmentEncoder;

/// A `SegmentEncoder` that writes segments as a SubRip (`.srt`) track.
///
/// Each caption block is a sequence number, a `HH:MM:SS,mmm --> HH:MM:SS,mmm`
/// timing line, the caption text, and a blank separator line. Blocks are
/// numbered from 1 and written in arrival order, which the session
/// guarantees is `start`-ascending.
pub struct SrtEncoder<W: Write> {
    /// The underlying writer we stream SRT into.
    w: W,

    /// Sequence number of the next caption block.
    next_index: u64,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> SrtEncoder<W> {
    /// Create a new SRT encoder that writes to the provided writer.
    pub fn new(w: W) -> Self {
        Self {
            w,
            next_index: 1,
            closed: false,
        }
    }
}

impl<W: Write> SegmentEncoder for SrtEncoder<W> {
    /// Write a single caption block.
    fn write_segment(&mut self, segment: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        let start = format_timestamp_srt(segment.start);
        let end = format_timestamp_srt(segment.end);

        writeln!(&mut self.w, "{}", self.next_index)?;
        writeln!(&mut self.w, "{start} --> {end}")?;
        // Engine text carries decoration whitespace (usually a leading
        // space); captions are trimmed, unlike the text and JSON exports.
        writeln!(&mut self.w, "{}", segment.text.trim())?;
        writeln!(&mut self.w)?;

        // Flush so streaming consumers (stdout, pipes) see output promptly.
        self.w.flush()?;

        self.next_index += 1;
        Ok(())
    }

    /// Flush the underlying writer. This is idempotent; a close with no
    /// segments written leaves the output empty (zero caption blocks).
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;
        Ok(())
    }
}

/// Format seconds into an SRT timestamp (`HH:MM:SS,mmm`), rounding to the
/// nearest millisecond.
fn format_timestamp_srt(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}
