//! Speech synthesis via the OpenAI TTS API

use std::path::Path;

use crate::{Error, Result};

/// Environment variable holding the OpenAI API key
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI speech endpoint
const SPEECH_URL: &str = "https://api.openai.com/v1/audio/speech";

/// Voice preset offered by the TTS API
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    /// Wire name of the voice
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
            Self::Shimmer => "shimmer",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TTS model quality tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Model {
    /// Standard quality, lower latency
    #[value(name = "tts-1")]
    Tts1,
    /// High definition quality
    #[value(name = "tts-1-hd")]
    Tts1Hd,
}

impl Model {
    /// Wire name of the model
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tts1 => "tts-1",
            Self::Tts1Hd => "tts-1-hd",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesizes speech from text using `OpenAI`
pub struct Synthesizer {
    client: reqwest::Client,
    api_key: String,
}

impl Synthesizer {
    /// Create a new synthesizer
    ///
    /// # Errors
    ///
    /// Returns error if API key is empty
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config("OpenAI API key required for TTS".to_string()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }

    /// Create a synthesizer from the `OPENAI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns error if the variable is unset or empty
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} not set")))?;
        Self::new(api_key)
    }

    /// Synthesize text to speech
    ///
    /// # Returns
    ///
    /// Audio bytes (MP3 format)
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API reports an error
    pub async fn synthesize(&self, text: &str, voice: Voice, model: Model) -> Result<Vec<u8>> {
        #[derive(serde::Serialize)]
        struct SpeechRequest<'a> {
            model: &'a str,
            input: &'a str,
            voice: &'a str,
        }

        let request = SpeechRequest {
            model: model.as_str(),
            input: text,
            voice: voice.as_str(),
        };

        tracing::debug!(voice = %voice, model = %model, chars = text.len(), "synthesizing speech");

        let response = self
            .client
            .post(SPEECH_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Synthesis(format!("OpenAI TTS error {status}: {body}")));
        }

        let audio = response.bytes().await?;
        Ok(audio.to_vec())
    }

    /// Synthesize text and persist the audio at `path`
    ///
    /// The file is written only after the complete response has arrived, so a
    /// failed synthesis leaves no partial cache entry behind.
    ///
    /// # Errors
    ///
    /// Returns error if synthesis fails or the file cannot be written
    pub async fn synthesize_to(
        &self,
        text: &str,
        voice: Voice,
        model: Model,
        path: &Path,
    ) -> Result<()> {
        let audio = self.synthesize(text, voice, model).await?;
        tokio::fs::write(path, &audio).await?;
        tracing::debug!(path = %path.display(), bytes = audio.len(), "cached audio");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_wire_names() {
        assert_eq!(Voice::Alloy.as_str(), "alloy");
        assert_eq!(Voice::Shimmer.as_str(), "shimmer");
        assert_eq!(Voice::Nova.to_string(), "nova");
    }

    #[test]
    fn test_model_wire_names() {
        assert_eq!(Model::Tts1.as_str(), "tts-1");
        assert_eq!(Model::Tts1Hd.as_str(), "tts-1-hd");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            Synthesizer::new(String::new()),
            Err(Error::Config(_))
        ));
    }
}
