use crate::Result;
use crate::segment::Segment;

/// Sink that serializes segments, one at a time, into an output format.
///
/// Encoders receive segments in result order (`start`-ascending) and never
/// see them again, so they can stream straight to their writer.
pub trait SegmentEncoder {
    fn write_segment(&mut self, segment: &Segment) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}
