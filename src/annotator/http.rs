//! Chat-completions client for the remote punctuation service.
//!
//! Thin transport glue: build the instruction prompt, post it, pull the
//! first choice's content back out. Everything interesting about failure
//! handling lives in the pipeline's retry policy, not here.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AnnotateError, Annotator};
use crate::config::AnnotatorSettings;

/// Instruction prepended to every chunk: add punctuation, keep the
/// original wording and meaning.
const PROMPT_PREFIX: &str = "请为以下没有标点的文本添加合适的标点符号，保持原文语义不变：";

/// Sampling temperature; low, since this is a rewriting task.
const TEMPERATURE: f32 = 0.2;

/// [`Annotator`] backed by an OpenAI-style chat-completions endpoint.
pub struct HttpAnnotator {
    client: Client,
    settings: AnnotatorSettings,
}

impl HttpAnnotator {
    pub fn new(settings: AnnotatorSettings) -> Result<Self, AnnotateError> {
        let client = Client::builder().build()?;
        Ok(Self { client, settings })
    }

    /// Reuses an existing client, e.g. one shared across tools.
    pub fn with_client(client: Client, settings: AnnotatorSettings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl Annotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> Result<String, AnnotateError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: format!("{PROMPT_PREFIX}\n{text}"),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnnotateError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AnnotateError::EmptyCompletion)?;

        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
