//! End-to-end: a scripted engine drives a session whose result is exported
//! and re-parsed.

use std::fs;

use scriptum::engine::{EngineRequest, MediaInfo, RawSegment, RawSegmentStream, RawWord, SpeechEngine};
use scriptum::opts::{SessionOpts, Task};
use scriptum::segment::Segment;
use scriptum::session::TranscriptionSession;

/// Stand-in for a real speech engine: replays canned segments for whatever
/// media it is asked about.
struct PlaybackEngine {
    duration: f64,
    segments: Vec<RawSegment>,
}

impl SpeechEngine for PlaybackEngine {
    fn transcribe<'e>(
        &'e mut self,
        _request: EngineRequest<'_>,
    ) -> scriptum::Result<(RawSegmentStream<'e>, MediaInfo)> {
        let items: Vec<scriptum::Result<RawSegment>> =
            self.segments.iter().cloned().map(Ok).collect();
        Ok((
            Box::new(items.into_iter()),
            MediaInfo {
                duration: self.duration,
            },
        ))
    }
}

fn raw(id: i64, start: f64, end: f64, text: &str, words: Option<Vec<RawWord>>) -> RawSegment {
    RawSegment {
        id,
        seek: id * 3000,
        start: Some(start),
        end: Some(end),
        text: text.to_string(),
        tokens: vec![50365, 11, 51864],
        temperature: 0.0,
        avg_logprob: -0.3,
        compression_ratio: 1.05,
        no_speech_prob: 0.04,
        words,
    }
}

#[test]
fn pipeline_produces_an_exportable_result() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let words = vec![
        RawWord {
            start: 0.0,
            end: 0.8,
            word: " Buongiorno".to_string(),
            probability: 0.91,
        },
        RawWord {
            start: 0.8,
            end: 2.0,
            word: " a tutti".to_string(),
            probability: 0.85,
        },
    ];
    let mut engine = PlaybackEngine {
        duration: 5.5,
        segments: vec![
            raw(0, 0.0, 2.0, " Buongiorno a tutti", Some(words)),
            raw(1, 2.0, 5.5, " e benvenuti", None),
        ],
    };

    let mut reported: Vec<f64> = Vec::new();
    let mut sink = |transcribed: f64, _total: f64| reported.push(transcribed);

    let opts = SessionOpts::new(dir.path().join("interview.mp4"), "it");
    let result = TranscriptionSession::new(&mut engine, opts).run_with_progress(&mut sink)?;

    assert_eq!(reported, vec![2.0, 5.5]);

    // SRT and JSON land next to the media, and the JSON re-parses into the
    // exact segment list the session accumulated.
    let srt = result.to_srt(None)?;
    assert_eq!(srt, dir.path().join("interview_it.srt"));
    assert!(fs::read_to_string(&srt)?.starts_with("1\n00:00:00,000 --> 00:00:02,000\n"));

    let json = result.to_json(None)?;
    let parsed: Vec<Segment> = serde_json::from_str(&fs::read_to_string(&json)?)?;
    assert_eq!(parsed, result.segments());

    // The first segment kept its words, the second kept the explicit
    // "no word timing" marker.
    assert_eq!(parsed[0].words.as_ref().map(Vec::len), Some(2));
    assert!(parsed[1].words.is_none());
    Ok(())
}

#[test]
fn one_engine_serves_sequential_sessions() -> anyhow::Result<()> {
    let mut engine = PlaybackEngine {
        duration: 2.0,
        segments: vec![raw(0, 0.0, 2.0, " hello", None)],
    };

    let transcript =
        TranscriptionSession::new(&mut engine, SessionOpts::new("talk.mp4", "en")).run()?;
    assert!(!transcript.is_translation());

    let mut opts = SessionOpts::new("talk.mp4", "en");
    opts.task = Task::Translate;
    let translation = TranscriptionSession::new(&mut engine, opts).run()?;
    assert!(translation.is_translation());

    // Independent runs over the same engine produce independent results.
    assert_eq!(transcript.segments(), translation.segments());
    Ok(())
}
