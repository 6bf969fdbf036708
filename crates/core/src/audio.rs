//! Audio frame types and utilities

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Supported audio sample rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SampleRate {
    /// 8kHz - Telephony
    Hz8000,
    /// 16kHz - Standard speech recognition
    Hz16000,
    /// 24kHz - Voice pipeline input/output
    #[default]
    Hz24000,
    /// 44.1kHz - CD quality
    Hz44100,
    /// 48kHz - Professional audio
    Hz48000,
}

impl SampleRate {
    /// Get sample rate as u32
    pub fn as_u32(&self) -> u32 {
        match self {
            SampleRate::Hz8000 => 8000,
            SampleRate::Hz16000 => 16000,
            SampleRate::Hz24000 => 24000,
            SampleRate::Hz44100 => 44100,
            SampleRate::Hz48000 => 48000,
        }
    }

    /// Get frame size for 20ms chunk
    pub fn frame_size_20ms(&self) -> usize {
        (self.as_u32() as usize * 20) / 1000
    }

    /// Get samples per millisecond
    pub fn samples_per_ms(&self) -> usize {
        self.as_u32() as usize / 1000
    }
}

/// Audio channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Channels {
    #[default]
    Mono,
    Stereo,
}

impl Channels {
    pub fn count(&self) -> usize {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

/// Audio frame with metadata
///
/// Internally stores samples as f32 normalized to [-1.0, 1.0]; the PCM16
/// helpers cover the 16-bit signed wire format the output device expects.
#[derive(Clone)]
pub struct AudioFrame {
    /// Raw audio samples (f32, normalized to [-1.0, 1.0])
    pub samples: Arc<[f32]>,
    /// Sample rate
    pub sample_rate: SampleRate,
    /// Number of channels
    pub channels: Channels,
    /// Frame sequence number for ordering
    pub sequence: u64,
    /// Duration of this frame
    pub duration: Duration,
}

impl std::fmt::Debug for AudioFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioFrame")
            .field("samples_len", &self.samples.len())
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .field("sequence", &self.sequence)
            .field("duration", &self.duration)
            .finish()
    }
}

impl AudioFrame {
    /// Create a new audio frame from f32 samples
    pub fn new(
        samples: Vec<f32>,
        sample_rate: SampleRate,
        channels: Channels,
        sequence: u64,
    ) -> Self {
        let duration = Duration::from_secs_f64(
            samples.len() as f64 / (sample_rate.as_u32() as f64 * channels.count() as f64),
        );

        Self {
            samples: samples.into(),
            sample_rate,
            channels,
            sequence,
            duration,
        }
    }

    /// Create a silent frame of the given duration
    ///
    /// The voice loop uses this as its fixed input placeholder; no microphone
    /// capture happens anywhere in this repository.
    pub fn silence(duration: Duration, sample_rate: SampleRate, channels: Channels) -> Self {
        let len = (sample_rate.as_u32() as f64
            * channels.count() as f64
            * duration.as_secs_f64()) as usize;
        Self::new(vec![0.0; len], sample_rate, channels, 0)
    }

    /// Convert from PCM16 bytes (little-endian)
    pub fn from_pcm16(
        bytes: &[u8],
        sample_rate: SampleRate,
        channels: Channels,
        sequence: u64,
    ) -> Self {
        const PCM16_NORMALIZE: f32 = 32768.0;

        let samples: Vec<f32> = bytes
            .chunks_exact(2)
            .map(|chunk| {
                let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
                sample as f32 / PCM16_NORMALIZE
            })
            .collect();

        Self::new(samples, sample_rate, channels, sequence)
    }

    /// Convert to 16-bit signed samples
    pub fn to_pcm16_samples(&self) -> Vec<i16> {
        const PCM16_SCALE: f32 = 32767.0;

        self.samples
            .iter()
            .map(|&sample| (sample.clamp(-1.0, 1.0) * PCM16_SCALE) as i16)
            .collect()
    }

    /// Convert to PCM16 bytes (little-endian)
    pub fn to_pcm16(&self) -> Vec<u8> {
        self.to_pcm16_samples()
            .into_iter()
            .flat_map(|pcm16| pcm16.to_le_bytes())
            .collect()
    }

    /// Get duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }

    /// Split frame into smaller chunks
    pub fn split(&self, chunk_samples: usize) -> Vec<AudioFrame> {
        let mut chunks = Vec::new();
        let mut seq = self.sequence;

        for chunk in self.samples.chunks(chunk_samples) {
            chunks.push(AudioFrame::new(
                chunk.to_vec(),
                self.sample_rate,
                self.channels,
                seq,
            ));
            seq += 1;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate_conversions() {
        assert_eq!(SampleRate::Hz24000.as_u32(), 24000);
        assert_eq!(SampleRate::Hz24000.frame_size_20ms(), 480);
        assert_eq!(SampleRate::Hz24000.samples_per_ms(), 24);
    }

    #[test]
    fn test_silence_buffer_size() {
        // 3 seconds at 24kHz mono, the voice loop's fixed input
        let frame = AudioFrame::silence(
            Duration::from_secs(3),
            SampleRate::Hz24000,
            Channels::Mono,
        );
        assert_eq!(frame.samples.len(), 24000 * 3);
        assert!(frame.samples.iter().all(|&s| s == 0.0));
        assert_eq!(frame.duration_ms(), 3000);
    }

    #[test]
    fn test_pcm16_round_trip() {
        let pcm16: Vec<u8> = vec![0x00, 0x40, 0x00, 0xC0]; // Two samples
        let frame = AudioFrame::from_pcm16(&pcm16, SampleRate::Hz24000, Channels::Mono, 0);

        assert_eq!(frame.samples.len(), 2);
        assert!(frame.samples[0] > 0.0); // Positive sample
        assert!(frame.samples[1] < 0.0); // Negative sample

        let samples = frame.to_pcm16_samples();
        assert!(samples[0] > 0);
        assert!(samples[1] < 0);
    }

    #[test]
    fn test_split_preserves_order() {
        let frame = AudioFrame::new(vec![0.1; 1000], SampleRate::Hz24000, Channels::Mono, 5);
        let chunks = frame.split(480);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].sequence, 5);
        assert_eq!(chunks[2].sequence, 7);
        assert_eq!(chunks[2].samples.len(), 40);
    }
}
