//! `scriptum` — an engine-agnostic transcription-result pipeline.
//!
//! This crate consumes the ordered stream of timed text segments an external
//! speech-recognition engine produces for one media file and turns it into
//! durable, interchange-ready artifacts. It provides:
//! - a normalized, engine-agnostic segment record model
//! - a session driver with progress accounting against the media duration
//! - an immutable result object with subtitle (SRT), JSON, plain-text, and
//!   optional tabular exports
//!
//! It performs no speech recognition, language modeling, or audio decoding
//! itself: engines plug in behind the [`engine::SpeechEngine`] trait, so the
//! pipeline can be reused across engines and tested with scripted ones.

// High-level API (most consumers should start here).
pub mod opts;
pub mod session;

// Engine boundary and raw-to-normalized conversion.
pub mod adapter;
pub mod engine;

// Segment data structures and the aggregate result.
pub mod result;
pub mod segment;

// Progress observation during a session.
pub mod progress;

// Output encoders and exporters that serialize segments into various formats.
pub mod json_array_encoder;
pub mod segment_encoder;
pub mod srt_encoder;
pub mod table;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

pub mod error;

mod output_path;

pub use error::{Error, Result};
