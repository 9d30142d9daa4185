//! Drives one transcription: engine stream → adapter → accumulated result.

use tracing::info;

use crate::Result;
use crate::adapter::adapt_segment;
use crate::engine::{EngineRequest, SpeechEngine};
use crate::opts::{SessionOpts, Task};
use crate::progress::{NoopProgress, ProgressSink};
use crate::result::TranscriptionResult;
use crate::segment::Segment;

/// Drives consumption of the engine's segment stream for one media file.
///
/// A session is a single forward pass: segments generated with
/// `condition_on_previous_text` enabled carry a data dependency on all prior
/// segments, so the stream is never reordered, parallelized, or resumed.
/// `run` therefore consumes the session — a failed run yields no partial
/// result, and reprocessing the same media starts a fresh session.
pub struct TranscriptionSession<'e, E: SpeechEngine> {
    engine: &'e mut E,
    opts: SessionOpts,
}

impl<'e, E: SpeechEngine> TranscriptionSession<'e, E> {
    /// The engine is borrowed, not owned, so one engine instance can serve
    /// several sessions sequentially.
    pub fn new(engine: &'e mut E, opts: SessionOpts) -> Self {
        Self { engine, opts }
    }

    /// Run the session without progress reporting.
    pub fn run(self) -> Result<TranscriptionResult> {
        self.run_with_progress(&mut NoopProgress)
    }

    /// Run the session, reporting cumulative audio seconds to `progress`
    /// after every consumed segment.
    ///
    /// The counter advances by `segment.end - previous_end` (initial
    /// previous end = 0) and is clamped before reporting: monotonically
    /// non-decreasing, never above the media duration. Progress is
    /// diagnostic only and does not affect the result.
    pub fn run_with_progress(
        self,
        progress: &mut dyn ProgressSink,
    ) -> Result<TranscriptionResult> {
        let Self { engine, opts } = self;

        let request = EngineRequest {
            media_path: &opts.media_path,
            language: &opts.source_language,
            task: opts.task,
            initial_prompt: opts.initial_prompt.as_deref(),
            condition_on_previous_text: opts.condition_on_previous_text,
            // The result model needs the absent-vs-empty word distinction,
            // so word timing is always requested; engines without it report
            // `words: None`.
            word_timestamps: true,
        };

        let (stream, media) = engine.transcribe(request)?;
        let duration = media.duration;
        info!(
            media = %opts.media_path.display(),
            duration_seconds = duration,
            "starting transcription"
        );

        let mut segments: Vec<Segment> = Vec::new();
        // Cumulative audio seconds consumed; tracks the last clamped
        // segment end.
        let mut transcribed = 0.0_f64;

        for raw in stream {
            let segment = adapt_segment(raw?, opts.validate_word_timing)?;
            transcribed = transcribed.max(segment.end.min(duration));
            progress.on_progress(transcribed, duration);
            segments.push(segment);
        }

        // Zero segments (silent or empty media) is a valid, empty result.
        info!(segments = segments.len(), "transcription complete");
        Ok(TranscriptionResult::new(
            opts.media_path,
            opts.source_language,
            segments,
            opts.task == Task::Translate,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MediaInfo, RawSegment, RawSegmentStream};
    use crate::error::Error;

    fn raw(id: i64, start: f64, end: f64, text: &str) -> RawSegment {
        RawSegment {
            id,
            seek: 0,
            start: Some(start),
            end: Some(end),
            text: text.to_string(),
            tokens: Vec::new(),
            temperature: 0.0,
            avg_logprob: -0.1,
            compression_ratio: 1.0,
            no_speech_prob: 0.01,
            words: None,
        }
    }

    #[derive(Debug, Clone)]
    struct RecordedRequest {
        language: String,
        task: Task,
        initial_prompt: Option<String>,
        condition_on_previous_text: bool,
        word_timestamps: bool,
    }

    /// Engine that replays a scripted list of segments, optionally failing
    /// at a given stream position.
    struct ScriptedEngine {
        duration: f64,
        segments: Vec<RawSegment>,
        fail_at: Option<usize>,
        last_request: Option<RecordedRequest>,
    }

    impl ScriptedEngine {
        fn new(duration: f64, segments: Vec<RawSegment>) -> Self {
            Self {
                duration,
                segments,
                fail_at: None,
                last_request: None,
            }
        }
    }

    impl SpeechEngine for ScriptedEngine {
        fn transcribe<'e>(
            &'e mut self,
            request: EngineRequest<'_>,
        ) -> Result<(RawSegmentStream<'e>, MediaInfo)> {
            self.last_request = Some(RecordedRequest {
                language: request.language.to_string(),
                task: request.task,
                initial_prompt: request.initial_prompt.map(str::to_string),
                condition_on_previous_text: request.condition_on_previous_text,
                word_timestamps: request.word_timestamps,
            });

            let fail_at = self.fail_at;
            let items: Vec<Result<RawSegment>> = self
                .segments
                .iter()
                .cloned()
                .enumerate()
                .map(|(ix, segment)| {
                    if fail_at == Some(ix) {
                        Err(Error::Engine("decode failed mid-stream".to_string()))
                    } else {
                        Ok(segment)
                    }
                })
                .collect();
            Ok((
                Box::new(items.into_iter()),
                MediaInfo {
                    duration: self.duration,
                },
            ))
        }
    }

    #[test]
    fn progress_reaches_the_last_segment_end_exactly() -> Result<()> {
        let mut engine = ScriptedEngine::new(
            9.9,
            vec![
                raw(0, 0.0, 2.0, " one"),
                raw(1, 2.0, 5.5, " two"),
                raw(2, 5.5, 9.9, " three"),
            ],
        );

        let mut seen: Vec<(f64, f64)> = Vec::new();
        let mut sink = |transcribed: f64, total: f64| seen.push((transcribed, total));

        let session = TranscriptionSession::new(&mut engine, SessionOpts::new("talk.mp4", "it"));
        let result = session.run_with_progress(&mut sink)?;

        assert_eq!(seen, vec![(2.0, 9.9), (5.5, 9.9), (9.9, 9.9)]);
        assert!(seen.iter().all(|(transcribed, total)| transcribed <= total));
        assert_eq!(result.segments().len(), 3);
        Ok(())
    }

    #[test]
    fn progress_is_clamped_to_the_media_duration() -> Result<()> {
        // The engine occasionally reports an end past the media duration.
        let mut engine =
            ScriptedEngine::new(5.0, vec![raw(0, 0.0, 2.0, " a"), raw(1, 2.0, 6.0, " b")]);

        let mut seen: Vec<f64> = Vec::new();
        let mut sink = |transcribed: f64, _total: f64| seen.push(transcribed);

        TranscriptionSession::new(&mut engine, SessionOpts::new("talk.mp4", "it"))
            .run_with_progress(&mut sink)?;

        assert_eq!(seen, vec![2.0, 5.0]);
        Ok(())
    }

    #[test]
    fn zero_segments_yield_a_valid_empty_result() -> Result<()> {
        let mut engine = ScriptedEngine::new(12.0, Vec::new());
        let result =
            TranscriptionSession::new(&mut engine, SessionOpts::new("silence.wav", "en")).run()?;

        assert!(result.segments().is_empty());
        assert!(!result.is_translation());
        assert_eq!(result.source_language(), "en");
        Ok(())
    }

    #[test]
    fn configuration_is_threaded_through_to_the_engine() -> Result<()> {
        let mut engine = ScriptedEngine::new(3.0, vec![raw(0, 0.0, 3.0, " ciao")]);

        let mut opts = SessionOpts::new("interview.mp4", "it");
        opts.task = Task::Translate;
        opts.initial_prompt = Some("Conferenza stampa".to_string());
        opts.condition_on_previous_text = false;

        let result = TranscriptionSession::new(&mut engine, opts).run()?;
        assert!(result.is_translation());

        let request = engine.last_request.expect("engine should have been invoked");
        assert_eq!(request.language, "it");
        assert_eq!(request.task, Task::Translate);
        assert_eq!(request.initial_prompt.as_deref(), Some("Conferenza stampa"));
        assert!(!request.condition_on_previous_text);
        assert!(request.word_timestamps);
        Ok(())
    }

    #[test]
    fn midstream_engine_failure_aborts_without_a_result() {
        let mut engine = ScriptedEngine::new(
            9.0,
            vec![raw(0, 0.0, 2.0, " ok"), raw(1, 2.0, 4.0, " lost")],
        );
        engine.fail_at = Some(1);

        let err = TranscriptionSession::new(&mut engine, SessionOpts::new("talk.mp4", "it"))
            .run()
            .unwrap_err();
        assert!(matches!(err, Error::Engine(_)));
    }

    #[test]
    fn malformed_segment_aborts_the_session() {
        let mut broken = raw(1, 0.0, 0.0, " broken");
        broken.end = None;
        let mut engine = ScriptedEngine::new(9.0, vec![raw(0, 0.0, 2.0, " ok"), broken]);

        let err = TranscriptionSession::new(&mut engine, SessionOpts::new("talk.mp4", "it"))
            .run()
            .unwrap_err();
        assert!(matches!(err, Error::MalformedSegment { id: 1, .. }));
    }
}
