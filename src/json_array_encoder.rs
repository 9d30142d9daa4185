use std::io::Write;

use serde::Serialize;

use crate::Result;
use crate::segment::Segment;
use crate::segment_encoder::SegmentEncoder;

/// Indentation used for the array and for nesting inside each element.
const INDENT: &str = "    ";

/// A `SegmentEncoder` that writes segments as a single indented JSON array.
///
/// Design:
/// - We stream output directly to a `Write` implementation, element by
///   element, so a result never has to be re-buffered for export.
/// - The array is opened lazily; an empty result still serializes as `[]`.
/// - Output is UTF-8 with non-ASCII text written unescaped.
///
/// Example output:
/// ```json
/// [
///     {
///         "id": 0,
///         "seek": 0,
///         "start": 0.0,
///         ...
///     }
/// ]
/// ```
pub struct JsonArrayEncoder<W: Write> {
    /// The underlying writer we stream JSON into.
    w: W,

    /// Whether we have written the opening `[` of the JSON array.
    started: bool,

    /// Whether the next element will be the first element in the array.
    /// This lets us correctly place commas between elements.
    first: bool,

    /// Whether the encoder has been closed.
    /// Once closed, no further writes are allowed.
    closed: bool,
}

impl<W: Write> JsonArrayEncoder<W> {
    /// Create a new JSON array encoder that writes to the given writer.
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            first: true,
            closed: false,
        }
    }

    /// Write the opening `[` of the JSON array if we have not already done
    /// so. Deferred so that empty output still results in valid JSON (`[]`).
    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            self.w.write_all(b"[")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> SegmentEncoder for JsonArrayEncoder<W> {
    /// Serialize a single segment and append it to the JSON array.
    fn write_segment(&mut self, segment: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        if !self.first {
            self.w.write_all(b",")?;
        }
        self.first = false;
        self.w.write_all(b"\n")?;

        // Serialize the element with four-space indentation, then shift the
        // whole block one level right so it nests inside the array.
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        segment.serialize(&mut ser)?;
        let element = std::str::from_utf8(&buf)?;

        self.w.write_all(INDENT.as_bytes())?;
        self.w
            .write_all(element.replace('\n', "\n    ").as_bytes())?;

        // Flush so streaming consumers (stdout, pipes) see output promptly.
        self.w.flush()?;

        Ok(())
    }

    /// Finalize the JSON array and flush the underlying writer.
    ///
    /// This method is idempotent: calling `close()` multiple times is safe,
    /// and after closing no further segments may be written.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        // Ensure we still output a valid JSON array even if no segments
        // were written.
        self.start_if_needed()?;
        if !self.first {
            self.w.write_all(b"\n")?;
        }
        self.w.write_all(b"]")?;
        self.w.flush()?;

        self.closed = true;
        Ok(())
    }
}
