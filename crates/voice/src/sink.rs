//! Audio output sink

use concierge_core::{AudioFrame, Result};

/// Where reply audio goes
///
/// Writes are buffered; a write returns once the frame is queued for
/// playback, not once it has been heard. Deliberately not `Send`: the cpal
/// stream is pinned to the thread that opened it, so the loop owns its sink
/// on the main task.
pub trait AudioSink {
    fn write(&mut self, frame: &AudioFrame) -> Result<()>;
}

#[cfg(feature = "audio-io")]
pub use cpal_sink::CpalSink;

#[cfg(feature = "audio-io")]
mod cpal_sink {
    use super::AudioSink;
    use concierge_core::{AudioFrame, Error, Result, SampleRate};

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Default output device sink, mono i16
    ///
    /// The callback drains a shared buffer; the voice loop is the only
    /// producer, the device callback the only consumer.
    pub struct CpalSink {
        // Held to keep the device stream alive.
        _stream: cpal::Stream,
        buffer: Arc<Mutex<VecDeque<i16>>>,
    }

    impl CpalSink {
        pub fn open(sample_rate: SampleRate) -> Result<Self> {
            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or_else(|| Error::AudioDevice("no output device available".to_string()))?;

            tracing::info!(
                device = %device.name().unwrap_or_else(|_| "unknown".to_string()),
                rate = sample_rate.as_u32(),
                "Opening audio output"
            );

            let config = cpal::StreamConfig {
                channels: 1,
                sample_rate: cpal::SampleRate(sample_rate.as_u32()),
                buffer_size: cpal::BufferSize::Default,
            };

            let buffer: Arc<Mutex<VecDeque<i16>>> = Arc::new(Mutex::new(VecDeque::new()));
            let callback_buffer = buffer.clone();

            let stream = device
                .build_output_stream(
                    &config,
                    move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                        let mut buf = callback_buffer.lock();
                        for slot in data.iter_mut() {
                            *slot = buf.pop_front().unwrap_or(0);
                        }
                    },
                    |err| {
                        tracing::error!("Audio output stream error: {}", err);
                    },
                    None,
                )
                .map_err(|e| Error::AudioDevice(format!("failed to build output stream: {}", e)))?;

            stream
                .play()
                .map_err(|e| Error::AudioDevice(format!("failed to start output stream: {}", e)))?;

            Ok(Self {
                _stream: stream,
                buffer,
            })
        }
    }

    impl AudioSink for CpalSink {
        fn write(&mut self, frame: &AudioFrame) -> Result<()> {
            let samples = frame.to_pcm16_samples();
            self.buffer.lock().extend(samples);
            Ok(())
        }
    }
}
