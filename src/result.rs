//! The immutable output of one transcription session, and its exporters.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::Result;
use crate::json_array_encoder::JsonArrayEncoder;
use crate::output_path;
use crate::segment::Segment;
use crate::segment_encoder::SegmentEncoder;
use crate::srt_encoder::SrtEncoder;
use crate::table;

/// The aggregate output of one transcription run.
///
/// Immutable once constructed: fields are private, read access goes through
/// accessors, and no mutating method exists. Exporters only read the result,
/// so they can run any number of times, in any order, each producing a fresh
/// artifact. A new transcription produces a new result.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    media_path: PathBuf,
    source_language: String,
    segments: Vec<Segment>,
    is_translation: bool,
}

impl TranscriptionResult {
    pub fn new(
        media_path: impl Into<PathBuf>,
        source_language: impl Into<String>,
        segments: Vec<Segment>,
        is_translation: bool,
    ) -> Self {
        Self {
            media_path: media_path.into(),
            source_language: source_language.into(),
            segments,
            is_translation,
        }
    }

    /// Path of the source audio/video file.
    pub fn media_path(&self) -> &Path {
        &self.media_path
    }

    /// ISO 639-1 code of the spoken language.
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Segments ordered by `start` non-decreasing, ids strictly increasing.
    /// May be empty (silent or empty media).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the task mode was translate: segment text is English
    /// regardless of [`Self::source_language`].
    pub fn is_translation(&self) -> bool {
        self.is_translation
    }

    /// Language suffix used for derived subtitle paths: `"en"` for
    /// translations, the source language otherwise.
    fn language_suffix(&self) -> &str {
        if self.is_translation {
            "en"
        } else {
            &self.source_language
        }
    }

    /// Write the segments as a SubRip subtitle track and return the path
    /// written to.
    ///
    /// With no explicit `path`, the destination is derived from the media
    /// path: `interview.mp4` transcribed from Italian becomes
    /// `interview_it.srt`, or `interview_en.srt` for a translation.
    ///
    /// Destructive: a pre-existing file at the destination is deleted before
    /// writing, with a logged warning.
    pub fn to_srt(&self, path: Option<&Path>) -> Result<PathBuf> {
        let destination = match path {
            Some(path) => path.to_path_buf(),
            None => output_path::with_language_suffix(
                &self.media_path,
                self.language_suffix(),
                "srt",
            ),
        };
        remove_existing(&destination)?;
        info!(path = %destination.display(), "saving subtitles");

        let file = File::create(&destination)?;
        let mut encoder = SrtEncoder::new(BufWriter::new(file));
        for segment in &self.segments {
            encoder.write_segment(segment)?;
        }
        encoder.close()?;
        Ok(destination)
    }

    /// Write the full ordered segment list, nested word lists included, as
    /// an indented JSON array, and return the path written to.
    ///
    /// With no explicit `path`, the destination is the media path with its
    /// extension replaced by `.json`.
    pub fn to_json(&self, path: Option<&Path>) -> Result<PathBuf> {
        let destination = match path {
            Some(path) => path.to_path_buf(),
            None => self.media_path.with_extension("json"),
        };
        remove_existing(&destination)?;
        info!(path = %destination.display(), "saving segment data");

        let file = File::create(&destination)?;
        let mut encoder = JsonArrayEncoder::new(BufWriter::new(file));
        for segment in &self.segments {
            encoder.write_segment(segment)?;
        }
        encoder.close()?;
        Ok(destination)
    }

    /// Concatenate every segment's text, one segment per line.
    ///
    /// Engine whitespace is preserved verbatim; nothing is written to disk.
    pub fn to_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the segments as a table, one row per segment indexed by `id`,
    /// word lists omitted.
    ///
    /// Requires the `table` cargo feature. Without it this returns
    /// [`crate::Error::UnavailableDependency`] while the result and the
    /// other exporters stay usable; see [`table::is_available`].
    pub fn to_table(&self) -> Result<String> {
        table::render(self)
    }
}

/// Exports overwrite: delete any pre-existing destination first, with a
/// logged warning so the destructive replacement is visible.
fn remove_existing(destination: &Path) -> Result<()> {
    if destination.exists() {
        warn!(path = %destination.display(), "overwriting existing file");
        fs::remove_file(destination)?;
    }
    Ok(())
}
