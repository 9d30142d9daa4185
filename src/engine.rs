//! The speech-engine boundary.
//!
//! The pipeline never performs recognition itself; it consumes an ordered,
//! lazily-produced sequence of raw segments from whatever implements
//! [`SpeechEngine`]. Keeping the boundary a trait means alternative engines
//! can be substituted without touching session or export code, and tests can
//! drive the pipeline with scripted engines.

use std::path::Path;

use crate::Result;
use crate::opts::Task;

/// Metadata the engine reports about the source media before segments arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaInfo {
    /// Total media duration in seconds. Progress accounting is clamped to
    /// this value.
    pub duration: f64,
}

/// Configuration handed to the engine for one transcription pass.
#[derive(Debug, Clone)]
pub struct EngineRequest<'a> {
    pub media_path: &'a Path,

    /// ISO 639-1 source-language code, e.g. `"it"`.
    pub language: &'a str,

    pub task: Task,

    /// Optional context-priming text. Should match the language of the audio
    /// for optimal accuracy.
    pub initial_prompt: Option<&'a str>,

    /// Whether the engine may condition later segments on text it already
    /// produced in this pass. When enabled, segment text depends on
    /// everything recognized so far, so the stream must be consumed as a
    /// single forward pass.
    pub condition_on_previous_text: bool,

    /// Whether per-word timestamps are requested. The session always sets
    /// this; engines without word timing report `words: None`.
    pub word_timestamps: bool,
}

/// A segment as the engine emits it, before normalization.
///
/// Timing fields are optional here because the wire shape does not guarantee
/// them; [`crate::adapter`] rejects segments that lack them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub id: i64,
    pub seek: i64,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub text: String,
    pub tokens: Vec<i64>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
    /// Word-level timing: absent (`None`) when not requested, possibly empty
    /// when requested.
    pub words: Option<Vec<RawWord>>,
}

/// A word as the engine emits it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWord {
    pub start: f64,
    pub end: f64,
    pub word: String,
    pub probability: f64,
}

/// The engine's lazily-produced segment sequence.
///
/// Items may fail mid-stream when the engine hits a decode error; the
/// session treats that as fatal.
pub type RawSegmentStream<'e> = Box<dyn Iterator<Item = Result<RawSegment>> + 'e>;

/// Pluggable speech-recognition boundary.
///
/// Implementations turn a media path plus decoding configuration into an
/// ordered stream of raw segments and the media metadata. The stream is
/// consumed exactly once, in order.
///
/// `transcribe` takes `&mut self` so one engine instance can serve several
/// sessions sequentially. Sharing an engine between concurrent sessions is
/// not covered by this contract and should be treated as unsafe unless the
/// engine documents otherwise.
pub trait SpeechEngine {
    fn transcribe<'e>(
        &'e mut self,
        request: EngineRequest<'_>,
    ) -> Result<(RawSegmentStream<'e>, MediaInfo)>;
}
