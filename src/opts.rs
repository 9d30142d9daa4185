use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the engine should produce for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Segments in the source language of the media.
    #[default]
    Transcribe,

    /// Segments translated into English. Translated segments are timed
    /// independently from a transcription of the same media, so the two
    /// tracks do not line up block-for-block.
    Translate,
}

impl Task {
    /// Wire name used at the engine boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Transcribe => "transcribe",
            Task::Translate => "translate",
        }
    }
}

/// Options that control one transcription session.
///
/// This struct represents *library-level configuration*, not CLI flags.
/// Frontends (CLIs, services, tests) construct it programmatically and hand
/// it to [`crate::session::TranscriptionSession`].
#[derive(Debug, Clone)]
pub struct SessionOpts {
    /// Path of the source audio/video file.
    pub media_path: PathBuf,

    /// ISO 639-1 code of the spoken language, e.g. `"it"` for Italian.
    pub source_language: String,

    /// Transcribe in the source language, or translate into English.
    pub task: Task,

    /// Extra context handed to the engine before decoding starts.
    ///
    /// It should match the language of the audio for optimal accuracy.
    pub initial_prompt: Option<String>,

    /// Whether the engine is informed of prior output while generating later
    /// segments.
    ///
    /// When enabled the engine takes already-transcribed text into account,
    /// which helps coherence but can lock it into repetition loops regardless
    /// of what is actually being said. It also makes every segment's text
    /// depend on everything recognized so far in the session, so the
    /// pipeline consumes the stream as a single forward pass — never
    /// reordered or parallelized.
    ///
    /// This is pass-through configuration, not logic owned by the pipeline.
    pub condition_on_previous_text: bool,

    /// Whether the adapter rejects word timestamps that fall outside their
    /// segment's bounds.
    ///
    /// Engines are expected to keep words within the segment span, but the
    /// contract upstream leaves violations unspecified. `false` (the
    /// default) passes anomalous timings through unchanged; `true` fails the
    /// session with a malformed-segment error instead.
    pub validate_word_timing: bool,
}

impl SessionOpts {
    /// Options with the defaults the engine boundary documents: transcribe,
    /// no prompt, conditioning enabled, word timing passed through.
    pub fn new(media_path: impl Into<PathBuf>, source_language: impl Into<String>) -> Self {
        Self {
            media_path: media_path.into(),
            source_language: source_language.into(),
            task: Task::Transcribe,
            initial_prompt: None,
            condition_on_previous_text: true,
            validate_word_timing: false,
        }
    }
}
