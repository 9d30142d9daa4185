use serde::{Deserialize, Serialize};

/// One contiguous span of recognized (or translated) speech.
///
/// This is the normalized, engine-agnostic record the rest of the pipeline
/// works with. Field names match the engine wire shape so the structured
/// export round-trips without renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Sequence index, unique and increasing within a result. Gaps are
    /// allowed; the engine may skip silent regions.
    pub id: i64,

    /// Engine-internal offset. Opaque; carried through untouched.
    pub seek: i64,

    /// Span start in seconds.
    pub start: f64,

    /// Span end in seconds. Always greater than `start`.
    pub end: f64,

    /// Recognized text. Engine whitespace (typically a leading space) is
    /// preserved verbatim.
    pub text: String,

    /// Model token ids for the span. May be empty.
    pub tokens: Vec<i64>,

    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,

    /// Word-level timing, when it was requested from the engine.
    ///
    /// `None` means word timestamps were not produced; `Some` with an empty
    /// vec means they were produced and this span had zero words. Exporters
    /// rely on the distinction, so it survives serialization as `null` vs
    /// `[]`.
    pub words: Option<Vec<Word>>,
}

/// A timed sub-span of a [`Segment`].
///
/// When word timing is enabled the engine is expected to keep
/// `segment.start <= word.start <= word.end <= segment.end`; a violation is
/// an engine anomaly, rejected only when the session opts into validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word start in seconds.
    pub start: f64,

    /// Word end in seconds.
    pub end: f64,

    /// Word text, including the engine's leading-space convention.
    pub word: String,

    /// Engine-defined confidence.
    pub probability: f64,
}
