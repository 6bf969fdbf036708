//! OpenAI speech endpoint clients
//!
//! Thin clients for `/audio/transcriptions` and `/audio/speech`. The
//! transcription endpoint wants a container format, so frames are wrapped
//! in an in-memory WAV before upload; synthesis asks for raw PCM16 at
//! 24 kHz, which maps straight onto an `AudioFrame`.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::Cursor;
use std::time::Duration;

use concierge_config::{AgentConfig, VoiceConfig};
use concierge_core::{
    AudioFrame, Channels, Error, Result, SampleRate, SpeechToText, TextToSpeech, Transcript,
};

const API_KEY_ENV: &str = "OPENAI_API_KEY";

fn api_key() -> Result<String> {
    std::env::var(API_KEY_ENV).map_err(|_| Error::runtime(format!("{} is not set", API_KEY_ENV)))
}

fn http_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| Error::runtime(e.to_string()))
}

/// Encode a frame as a 16-bit PCM WAV in memory
fn encode_wav(frame: &AudioFrame) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: frame.channels.count() as u16,
        sample_rate: frame.sample_rate.as_u32(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| Error::SpeechToText(format!("wav encode: {}", e)))?;
        for sample in frame.to_pcm16_samples() {
            writer
                .write_sample(sample)
                .map_err(|e| Error::SpeechToText(format!("wav encode: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| Error::SpeechToText(format!("wav encode: {}", e)))?;
    }
    Ok(cursor.into_inner())
}

/// OpenAI transcription client
pub struct OpenAiSpeechToText {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiSpeechToText {
    pub fn from_config(agent: &AgentConfig, voice: &VoiceConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(agent.timeout_seconds)?,
            endpoint: agent.endpoint.trim_end_matches('/').to_string(),
            api_key: api_key()?,
            model: voice.stt_model.clone(),
        })
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[async_trait]
impl SpeechToText for OpenAiSpeechToText {
    async fn transcribe(&self, audio: &AudioFrame) -> Result<Transcript> {
        let wav = encode_wav(audio)?;

        let part = reqwest::multipart::Part::bytes(wav)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| Error::SpeechToText(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let url = format!("{}/audio/transcriptions", self.endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::SpeechToText(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SpeechToText(format!(
                "transcription failed with {}: {}",
                status, body
            )));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_response(e.to_string()))?;

        Ok(Transcript::new(parsed.text))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// OpenAI synthesis client
pub struct OpenAiTextToSpeech {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    voice: String,
}

impl OpenAiTextToSpeech {
    pub fn from_config(agent: &AgentConfig, voice: &VoiceConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(agent.timeout_seconds)?,
            endpoint: agent.endpoint.trim_end_matches('/').to_string(),
            api_key: api_key()?,
            model: voice.tts_model.clone(),
            voice: voice.tts_voice.clone(),
        })
    }
}

#[async_trait]
impl TextToSpeech for OpenAiTextToSpeech {
    async fn synthesize(&self, text: &str) -> Result<AudioFrame> {
        let url = format!("{}/audio/speech", self.endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "voice": self.voice,
                "input": text,
                "response_format": "pcm",
            }))
            .send()
            .await
            .map_err(|e| Error::TextToSpeech(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TextToSpeech(format!(
                "synthesis failed with {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::TextToSpeech(e.to_string()))?;

        // The pcm response format is 16-bit mono at 24 kHz.
        Ok(AudioFrame::from_pcm16(
            &bytes,
            SampleRate::Hz24000,
            Channels::Mono,
            0,
        ))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_encoding_shape() {
        let frame = AudioFrame::silence(
            Duration::from_millis(100),
            SampleRate::Hz24000,
            Channels::Mono,
        );
        let wav = encode_wav(&frame).unwrap();

        // RIFF header plus 2400 samples of 16-bit data.
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(wav.len(), 44 + 2400 * 2);
    }
}
