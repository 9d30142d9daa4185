//! Converts the engine's native segment representation into the normalized
//! record model.

use crate::engine::{RawSegment, RawWord};
use crate::error::{Error, Result};
use crate::segment::{Segment, Word};

/// Normalize one raw engine segment.
///
/// The conversion is lossless and order-preserving: every raw word is
/// converted independently and in order, numeric fields pass through
/// unchanged, and an absent word list stays absent (`None`) rather than
/// becoming empty — downstream consumers must be able to tell "word timing
/// was not requested" apart from "this span had zero words".
///
/// A raw segment missing a required timing field fails with
/// [`Error::MalformedSegment`]. `validate_word_timing` decides what happens
/// to word timestamps outside the segment bounds: `false` passes them
/// through untouched, `true` rejects the segment as malformed too.
pub fn adapt_segment(raw: RawSegment, validate_word_timing: bool) -> Result<Segment> {
    let start = raw
        .start
        .ok_or_else(|| malformed(raw.id, "missing start timestamp"))?;
    let end = raw
        .end
        .ok_or_else(|| malformed(raw.id, "missing end timestamp"))?;

    let words: Option<Vec<Word>> = raw
        .words
        .map(|words| words.into_iter().map(adapt_word).collect());

    if validate_word_timing {
        if let Some(word) = words
            .iter()
            .flatten()
            .find(|w| w.start < start || w.end < w.start || end < w.end)
        {
            return Err(malformed(
                raw.id,
                format!(
                    "word '{}' timed {}..{} outside segment bounds {}..{}",
                    word.word, word.start, word.end, start, end
                ),
            ));
        }
    }

    Ok(Segment {
        id: raw.id,
        seek: raw.seek,
        start,
        end,
        text: raw.text,
        tokens: raw.tokens,
        temperature: raw.temperature,
        avg_logprob: raw.avg_logprob,
        compression_ratio: raw.compression_ratio,
        no_speech_prob: raw.no_speech_prob,
        words,
    })
}

fn adapt_word(raw: RawWord) -> Word {
    Word {
        start: raw.start,
        end: raw.end,
        word: raw.word,
        probability: raw.probability,
    }
}

fn malformed(id: i64, reason: impl Into<String>) -> Error {
    Error::MalformedSegment {
        id,
        reason: reason.into(),
    }
}
