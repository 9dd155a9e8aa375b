use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::ports::LlmClient,
    common::{LlmConfig, entities::app_errors::CoreError},
};

/// Relayed verbatim when the endpoint answers success with no usable
/// completion text.
pub const NO_RESPONSE_FALLBACK: &str = "No response from AI";

#[derive(Debug, Clone)]
pub struct OpenAiLlmClient {
    config: LlmConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl OpenAiLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CoreError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    fn timeout_error(&self) -> CoreError {
        CoreError::UpstreamTimeout {
            timeout_secs: self.config.request_timeout_secs,
        }
    }

    async fn call_chat_api(&self, request: ChatCompletionRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error()
                } else {
                    tracing::error!("inference request failed: {e}");
                    CoreError::ExternalServiceError(format!("inference request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| String::from("Unknown error"));
            tracing::error!(status, %message, "inference endpoint returned an error");
            return Err(CoreError::UpstreamStatus { status, message });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                tracing::error!("failed to parse inference response: {e}");
                CoreError::ExternalServiceError(format!("failed to parse inference response: {e}"))
            }
        })?;

        Ok(extract_completion_text(completion))
    }
}

/// First choice's message content, or the fallback sentinel. An empty string
/// counts as missing so callers always relay non-empty text on success.
fn extract_completion_text(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| String::from(NO_RESPONSE_FALLBACK))
}

impl LlmClient for OpenAiLlmClient {
    async fn complete_with_image(
        &self,
        prompt: String,
        image_base64: String,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{image_base64}"),
                        },
                    },
                ],
            }],
            max_tokens: self.config.max_completion_tokens,
        };

        self.call_chat_api(request).await
    }
}
