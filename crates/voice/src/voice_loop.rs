//! Voice interaction loop
//!
//! Repeats forever: submit the fixed input frame to the pipeline, play every
//! audio event it streams back, go again. The stop signal is checked at each
//! iteration boundary, so a running iteration finishes its playback before
//! the loop exits.

use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use concierge_core::{AudioFrame, Channels, SampleRate};

use crate::pipeline::{VoiceEvent, VoicePipeline};
use crate::sink::AudioSink;

/// Voice loop errors
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error(transparent)]
    Core(#[from] concierge_core::Error),

    #[error("unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),
}

/// Map a configured rate onto the supported set
pub fn sample_rate_from_hz(hz: u32) -> Result<SampleRate, VoiceError> {
    match hz {
        8000 => Ok(SampleRate::Hz8000),
        16000 => Ok(SampleRate::Hz16000),
        24000 => Ok(SampleRate::Hz24000),
        44100 => Ok(SampleRate::Hz44100),
        48000 => Ok(SampleRate::Hz48000),
        other => Err(VoiceError::UnsupportedSampleRate(other)),
    }
}

/// The interaction loop
pub struct VoiceLoop<S: AudioSink> {
    pipeline: Arc<dyn VoicePipeline>,
    sink: S,
    input: AudioFrame,
}

impl<S: AudioSink> VoiceLoop<S> {
    /// Build a loop with the fixed silence input placeholder
    ///
    /// No microphone capture happens here; `input_buffer_secs` of silence at
    /// the configured rate stand in for real input each iteration.
    pub fn new(
        pipeline: Arc<dyn VoicePipeline>,
        sink: S,
        sample_rate: SampleRate,
        input_buffer_secs: u64,
    ) -> Self {
        let input = AudioFrame::silence(
            Duration::from_secs(input_buffer_secs),
            sample_rate,
            Channels::Mono,
        );
        Self {
            pipeline,
            sink,
            input,
        }
    }

    /// Run until `stop` turns true
    ///
    /// Pipeline errors abort the current iteration's stream and the loop
    /// moves on; a sink write failure ends the run.
    pub async fn run(mut self, stop: watch::Receiver<bool>) -> Result<(), VoiceError> {
        let mut iteration: u64 = 0;

        while !*stop.borrow() {
            iteration += 1;
            tracing::info!(iteration, "Listening...");

            let mut events = self.pipeline.run(self.input.clone());
            while let Some(event) = events.next().await {
                match event {
                    Ok(VoiceEvent::Transcript(transcript)) => {
                        tracing::info!(text = %transcript.text, "Heard");
                    }
                    Ok(VoiceEvent::Audio(frame)) => {
                        self.sink.write(&frame)?;
                    }
                    Err(e) => {
                        tracing::error!(iteration, error = %e, "Pipeline run failed");
                        break;
                    }
                }
            }
        }

        tracing::info!(iterations = iteration, "Voice loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Result;
    use futures::stream;
    use parking_lot::Mutex;

    /// Sink that records every written frame
    #[derive(Clone, Default)]
    struct RecordingSink {
        frames: Arc<Mutex<Vec<AudioFrame>>>,
    }

    impl AudioSink for RecordingSink {
        fn write(&mut self, frame: &AudioFrame) -> Result<()> {
            self.frames.lock().push(frame.clone());
            Ok(())
        }
    }

    /// Pipeline yielding two audio chunks per run, stopping itself after
    /// `runs_before_stop` runs
    struct CountingPipeline {
        runs: Mutex<u64>,
        runs_before_stop: u64,
        stop_tx: watch::Sender<bool>,
    }

    impl VoicePipeline for CountingPipeline {
        fn run(&self, input: AudioFrame) -> crate::pipeline::VoiceStream {
            let mut runs = self.runs.lock();
            *runs += 1;
            if *runs >= self.runs_before_stop {
                let _ = self.stop_tx.send(true);
            }
            let base = (*runs - 1) * 2;

            let chunk = |seq| {
                let mut frame = input.split(480).into_iter().next().unwrap();
                frame.sequence = seq;
                Ok(VoiceEvent::Audio(frame))
            };
            Box::pin(stream::iter(vec![chunk(base), chunk(base + 1)]))
        }
    }

    #[tokio::test]
    async fn test_loop_stops_and_writes_in_order() {
        let (stop_tx, stop_rx) = watch::channel(false);
        let pipeline = Arc::new(CountingPipeline {
            runs: Mutex::new(0),
            runs_before_stop: 2,
            stop_tx,
        });
        let sink = RecordingSink::default();
        let frames = sink.frames.clone();

        let voice_loop = VoiceLoop::new(pipeline.clone(), sink, SampleRate::Hz24000, 1);
        voice_loop.run(stop_rx).await.unwrap();

        // Two iterations ran, each wrote its two chunks in arrival order.
        assert_eq!(*pipeline.runs.lock(), 2);
        let written = frames.lock();
        let sequences: Vec<u64> = written.iter().map(|f| f.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_already_stopped_loop_never_runs() {
        let (stop_tx, stop_rx) = watch::channel(true);
        let pipeline = Arc::new(CountingPipeline {
            runs: Mutex::new(0),
            runs_before_stop: u64::MAX,
            stop_tx,
        });
        let sink = RecordingSink::default();
        let frames = sink.frames.clone();

        VoiceLoop::new(pipeline.clone(), sink, SampleRate::Hz24000, 1)
            .run(stop_rx)
            .await
            .unwrap();

        assert_eq!(*pipeline.runs.lock(), 0);
        assert!(frames.lock().is_empty());
    }

    /// Pipeline whose run fails before streaming anything
    struct FailingPipeline {
        runs: Mutex<u64>,
        stop_tx: watch::Sender<bool>,
    }

    impl VoicePipeline for FailingPipeline {
        fn run(&self, _input: AudioFrame) -> crate::pipeline::VoiceStream {
            let mut runs = self.runs.lock();
            *runs += 1;
            if *runs >= 2 {
                let _ = self.stop_tx.send(true);
            }
            Box::pin(stream::iter(vec![Err(concierge_core::Error::runtime(
                "boom",
            ))]))
        }
    }

    #[tokio::test]
    async fn test_pipeline_error_does_not_end_loop() {
        let (stop_tx, stop_rx) = watch::channel(false);
        let pipeline = Arc::new(FailingPipeline {
            runs: Mutex::new(0),
            stop_tx,
        });

        VoiceLoop::new(pipeline.clone(), RecordingSink::default(), SampleRate::Hz24000, 1)
            .run(stop_rx)
            .await
            .unwrap();

        // Both iterations ran despite the errors.
        assert_eq!(*pipeline.runs.lock(), 2);
    }

    #[test]
    fn test_sample_rate_mapping() {
        assert!(matches!(sample_rate_from_hz(24000), Ok(SampleRate::Hz24000)));
        assert!(matches!(
            sample_rate_from_hz(22050),
            Err(VoiceError::UnsupportedSampleRate(22050))
        ));
    }
}
