//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the generation API directly.
//! Everything goes through the `TextGenerator` trait so handlers can be tested offline.
//!
//! The client reports what upstream said (status + decoded body) and nothing more.
//! Deciding what that means for the caller is `generation::classify`'s job.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no API key configured")]
    MissingCredential,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Body of a `generateContent` reply. Success and error replies share this shape;
/// every field is optional because upstream omits whatever does not apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if upstream produced one.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }

    /// Upstream's free-text error message, or `""` when there is none.
    pub fn error_message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .unwrap_or_default()
    }
}

/// One round-trip with upstream: the HTTP status and whatever JSON came back with it.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: GenerateContentResponse,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the generation proxy and the outside world.
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether an API credential is configured. Checked before any call is attempted.
    fn has_credential(&self) -> bool;

    /// Model identifier reported back to callers.
    fn model(&self) -> &str;

    /// Sends `prompt` upstream once. No retries.
    async fn generate_content(&self, prompt: &str) -> Result<UpstreamReply, LlmError>;
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.upstream_timeout,
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<UpstreamReply, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        // Upstream sends JSON on both success and failure; anything else is a transport fault.
        let bytes = response.bytes().await?;
        let body: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "Gemini replied {status} (candidates={}, error={:?})",
            body.candidates.as_ref().map_or(0, Vec::len),
            body.error.as_ref().and_then(|e| e.status.as_deref())
        );

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_from_first_candidate_first_part() {
        let body = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"first"},{"text":"second"}]}},
                {"content":{"parts":[{"text":"other"}]}}]}"#,
        );
        assert_eq!(body.text(), Some("first"));
    }

    #[test]
    fn test_text_absent_without_candidates() {
        assert_eq!(parse("{}").text(), None);
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), None);
        assert_eq!(parse(r#"{"candidates":[{"content":{}}]}"#).text(), None);
    }

    #[test]
    fn test_error_message_extracted() {
        let body = parse(
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert_eq!(body.error_message(), "Quota exceeded");
        assert_eq!(parse("{}").error_message(), "");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents":[{"role":"user","parts":[{"text":"hi"}]}]})
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            Some("k".into()),
            "gemini-2.5-flash".into(),
            "https://example.test/v1beta/".into(),
            None,
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.has_credential());
    }

    /// Serves one canned HTTP response on a local port and hands back the raw request.
    async fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                raw.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8(raw).unwrap()
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn test_error_status_keeps_decoded_body() {
        let (base_url, server) = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"error":{"code":400,"message":"RESOURCE_EXHAUSTED: quota","status":"FAILED_PRECONDITION"}}"#,
        )
        .await;
        let client = GeminiClient::new(Some("secret".into()), "m".into(), base_url, None).unwrap();

        let reply = client.generate_content("Summarize").await.unwrap();
        assert_eq!(reply.status, 400);
        assert!(!reply.is_success());
        assert_eq!(reply.body.error_message(), "RESOURCE_EXHAUSTED: quota");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let (base_url, server) = serve_once(
            "502 Bad Gateway",
            "text/html",
            "<html><body>upstream down</body></html>",
        )
        .await;
        let client = GeminiClient::new(Some("secret".into()), "m".into(), base_url, None).unwrap();

        let err = client.generate_content("Summarize").await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_carries_key_and_prompt() {
        let (base_url, server) = serve_once(
            "200 OK",
            "application/json",
            r#"{"candidates":[{"content":{"parts":[{"text":"Fine."}]}}]}"#,
        )
        .await;
        let client = GeminiClient::new(Some("secret".into()), "m".into(), base_url, None).unwrap();

        let reply = client.generate_content("Review chapter one").await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.text(), Some("Fine."));

        let raw = server.await.unwrap();
        let request_line = raw.lines().next().unwrap();
        assert!(
            request_line.starts_with("POST /v1beta/models/m:generateContent?key=secret "),
            "{request_line}"
        );
        let (_, body) = raw.split_once("\r\n\r\n").unwrap();
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["contents"][0]["role"], "user");
        assert_eq!(sent["contents"][0]["parts"][0]["text"], "Review chapter one");
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_out() {
        let client = GeminiClient::new(None, "m".into(), "http://127.0.0.1:9".into(), None).unwrap();
        assert!(!client.has_credential());
        let err = client.generate_content("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential));
    }
}
