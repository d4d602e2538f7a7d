//! OpenAI-compatible chat completion provider.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ChatCompletionProvider;
use crate::config::AdviserConfig;
use crate::error::AdviserError;
use crate::types::ChatMessage;

const PROVIDER_NAME: &str = "openai";

#[derive(Debug, Serialize, PartialEq)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct OpenAiChatProvider {
    http_client: Client,
    config: AdviserConfig,
    api_key: String,
}

impl OpenAiChatProvider {
    pub fn new(config: AdviserConfig) -> Result<Self, AdviserError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AdviserError::MissingApiKey(PROVIDER_NAME.to_string()))?;
        Ok(Self {
            http_client: Client::new(),
            config,
            api_key,
        })
    }

    fn build_request<'a>(
        &'a self,
        history: &'a [ChatMessage],
        user_turn: &'a ChatMessage,
    ) -> CompletionRequest<'a> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: &self.config.system_prompt,
        });
        messages.extend(history.iter().chain(std::iter::once(user_turn)).map(|m| {
            WireMessage {
                role: m.role.as_wire_str(),
                content: &m.content,
            }
        }));

        CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
        }
    }
}

/// Extracts the first choice's text from a successful response body.
fn parse_completion(body: &str) -> Result<String, AdviserError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| AdviserError::invalid_response(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AdviserError::invalid_response("response contained no message"))
}

/// Builds an error from a non-success response body.
fn parse_error(status: u16, body: &str) -> AdviserError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(payload) => AdviserError::provider(payload.error.message),
        Err(_) => AdviserError::provider(format!("API returned status {}", status)),
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAiChatProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn complete(
        &self,
        history: &[ChatMessage],
        user_turn: &ChatMessage,
    ) -> Result<String, AdviserError> {
        let url = self.config.completions_url();
        let request = self.build_request(history, user_turn);
        debug!(
            "Sending {} messages to {} ({})",
            request.messages.len(),
            url,
            request.model
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = parse_error(status.as_u16(), &body);
            error!("Chat completion failed with status {}: {}", status, err);
            return Err(err);
        }

        parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAiChatProvider {
        OpenAiChatProvider::new(AdviserConfig {
            api_key: Some("sk-test".to_string()),
            ..AdviserConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = OpenAiChatProvider::new(AdviserConfig::default())
            .err()
            .unwrap();
        assert_eq!(err.code(), "MISSING_API_KEY");
    }

    #[test]
    fn test_request_puts_system_prompt_then_history_then_user_turn() {
        let provider = provider();
        let history = vec![
            ChatMessage::user("Should I invest?"),
            ChatMessage::assistant("Consider your risk tolerance."),
        ];
        let user_turn = ChatMessage::user("What about debt?");

        let request = provider.build_request(&history, &user_turn);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 250);
        let roles: Vec<&str> = json["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(json["messages"][3]["content"], "What about debt?");
    }

    #[test]
    fn test_parse_completion_reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Pay the card first."}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Pay the card first.");
    }

    #[test]
    fn test_parse_completion_rejects_empty_choices() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err.code(), "INVALID_RESPONSE");
    }

    #[test]
    fn test_parse_error_surfaces_api_message() {
        let err = parse_error(
            401,
            r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#,
        );
        assert_eq!(err.to_string(), "Provider error: Incorrect API key provided");

        let err = parse_error(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Provider error: API returned status 502");
    }
}
