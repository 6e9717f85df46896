use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::{parse_reply, CompletionDelegate, DelegateError, DelegateScores};
use crate::config::OpenAiConfig;

/// Delegate backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiDelegate {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiDelegate {
    pub fn new(cfg: &OpenAiConfig, api_key: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: cfg.model.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_prompt(transcript: &str, expected_text: &str, duration_secs: u32) -> String {
        let expected = if expected_text.trim().is_empty() {
            "Free speech"
        } else {
            expected_text
        };

        format!(
            "Analyze this speech transcript for stammering patterns. Return ONLY valid JSON with no markdown.\n\
             Expected: \"{expected}\"\n\
             Transcript: \"{transcript}\"\n\
             Duration: {duration_secs}s\n\n\
             Return: {{\"confidence_score\":70,\"fluency_rate\":72,\"speech_rate_wpm\":110,\"blocks\":2,\
             \"repetitions\":1,\"prolongations\":1,\"filler_words\":3,\"voice_tremor\":15,\
             \"suggestions\":[\"tip1\",\"tip2\",\"tip3\"],\"recommended_exercises\":[\"Exercise1\",\"Exercise2\"]}}"
        )
    }
}

#[async_trait]
impl CompletionDelegate for OpenAiDelegate {
    async fn score_transcript(
        &self,
        transcript: &str,
        expected_text: &str,
        duration_secs: u32,
    ) -> Result<DelegateScores, DelegateError> {
        let body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": Self::build_prompt(transcript, expected_text, duration_secs),
            }],
            "temperature": 0.3,
        });

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let response = response
            .error_for_status()
            .map_err(|e| DelegateError::Transport(e.to_string()))?;

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DelegateError::Parse(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| DelegateError::Parse("empty completion".to_string()))?;

        debug!("delegate reply: {}", content);

        parse_reply(content)
    }
}

fn classify_transport_error(err: reqwest::Error) -> DelegateError {
    if err.is_timeout() {
        DelegateError::Timeout
    } else {
        DelegateError::Transport(err.to_string())
    }
}
