//! Optional tabular view over a result's segments.
//!
//! The table crate stays behind the `table` cargo feature so library
//! consumers don't pay for it. Without the feature, [`render`] reports
//! [`crate::Error::UnavailableDependency`] and nothing else in the crate is
//! affected; [`is_available`] is the capability check.

use crate::Result;
use crate::result::TranscriptionResult;

/// Whether the tabular exporter was compiled in.
pub fn is_available() -> bool {
    cfg!(feature = "table")
}

/// Render one row per segment, indexed by `id`, word lists omitted.
#[cfg(feature = "table")]
pub fn render(result: &TranscriptionResult) -> Result<String> {
    use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "id",
            "seek",
            "start",
            "end",
            "text",
            "tokens",
            "temperature",
            "avg_logprob",
            "compression_ratio",
            "no_speech_prob",
        ]);

    for segment in result.segments() {
        table.add_row(vec![
            segment.id.to_string(),
            segment.seek.to_string(),
            format!("{:.3}", segment.start),
            format!("{:.3}", segment.end),
            segment.text.clone(),
            format!("{:?}", segment.tokens),
            segment.temperature.to_string(),
            segment.avg_logprob.to_string(),
            segment.compression_ratio.to_string(),
            segment.no_speech_prob.to_string(),
        ]);
    }

    Ok(table.to_string())
}

/// Render one row per segment, indexed by `id`, word lists omitted.
#[cfg(not(feature = "table"))]
pub fn render(_result: &TranscriptionResult) -> Result<String> {
    Err(crate::Error::UnavailableDependency("comfy-table"))
}
