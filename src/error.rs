use thiserror::Error;

/// Scriptum's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Scriptum's crate-wide error type.
///
/// The taxonomy mirrors how failures propagate through the pipeline:
/// adapter and session errors are fatal to the current transcription (no
/// retry — reprocessing the same media deterministically hits the same
/// failure), while exporter errors are local to that exporter and never
/// invalidate the result.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw segment from the engine is missing required timing fields (or,
    /// when word-timing validation is enabled, carries a word outside the
    /// segment bounds). Fatal: partial output cannot be time-ordered safely,
    /// so the session aborts.
    #[error("malformed segment {id}: {reason}")]
    MalformedSegment { id: i64, reason: String },

    /// The engine could not process the given media or configuration
    /// (unreadable file, unsupported language code, mid-stream decode
    /// failure). Fatal: no partial result is returned.
    #[error("speech engine failure: {0}")]
    Engine(String),

    /// An optional exporter's supporting library was compiled out. Only that
    /// exporter is unusable; the result and the other exporters are fine.
    #[error("optional dependency '{0}' is not available; rebuild with the matching cargo feature")]
    UnavailableDependency(&'static str),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// Engine implementations are expected to carry their causes as `anyhow`
/// errors; the chain is flattened into the `Engine` variant at the boundary.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Engine(format!("{err:#}"))
    }
}
