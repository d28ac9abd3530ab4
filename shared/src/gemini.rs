//! Client for the Gemini `generateContent` endpoint.
//!
//! The HTTP layer is abstracted behind [`Transport`] so the same pipeline
//! runs in the browser (`gloo-net`) and on the server (`reqwest`).

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::extract::extract_analysis;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::prompt::build_prompt;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Media type the inline image is tagged with on the wire.
pub const INLINE_MIME_TYPE: &str = "image/png";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub role: &'a str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart<'a> {
    Text { text: &'a str },
    #[serde(rename_all = "camelCase")]
    Image { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData<'a> {
    pub mime_type: &'a str,
    pub data: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(prompt: &'a str, image_base64: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![
                    RequestPart::Text { text: prompt },
                    RequestPart::Image {
                        inline_data: InlineData { mime_type: INLINE_MIME_TYPE, data: image_base64 },
                    },
                ],
            }],
        }
    }
}

/// Where requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub api_base: String,
    pub model: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Endpoint {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_base: api_base.into(), model: model.into() }
    }

    pub fn url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base.trim_end_matches('/'),
            self.model,
            urlencoding::encode(api_key)
        )
    }
}

/// Raw HTTP outcome: whatever status came back plus the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST`. An `Err` means no response was received at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String>;
}

pub struct AnalysisClient<T> {
    endpoint: Endpoint,
    transport: T,
}

impl<T: Transport> AnalysisClient<T> {
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self { endpoint, transport }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// One request, no retry. Input problems are reported before anything
    /// goes over the wire.
    pub async fn analyze(&self, api_key: &str, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        if request.image_data.is_empty() {
            return Err(AnalysisError::no_image());
        }
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AnalysisError::missing_credential());
        }

        let prompt = build_prompt(request.platform);
        let body = serde_json::to_string(&GenerateContentRequest::new(&prompt, &request.image_data))
            .map_err(|e| AnalysisError::Transport(format!("Failed to encode request: {}", e)))?;

        log::debug!(
            "Dispatching {} analysis to model {} ({} bytes)",
            request.platform.label(),
            self.endpoint.model,
            body.len()
        );

        let reply = self
            .transport
            .post_json(&self.endpoint.url(api_key), body)
            .await
            .map_err(AnalysisError::Transport)?;

        if !reply.is_success() {
            log::warn!("Analysis endpoint answered {}", reply.status);
            return Err(AnalysisError::RemoteRejection { status: reply.status, body: reply.body });
        }

        extract_analysis(&reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;
    use futures::executor::block_on;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, String)>>>;

    struct MockTransport {
        reply: Result<HttpReply, String>,
        calls: Calls,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> (Self, Calls) {
            Self::with(Ok(HttpReply { status, body: body.to_string() }))
        }

        fn failing(message: &str) -> (Self, Calls) {
            Self::with(Err(message.to_string()))
        }

        fn with(reply: Result<HttpReply, String>) -> (Self, Calls) {
            let calls = Calls::default();
            (Self { reply, calls: Rc::clone(&calls) }, calls)
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String> {
            self.calls.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            image_data: "aGk=".into(),
            mime_type: "image/jpeg".into(),
            platform: Platform::Social,
        }
    }

    fn success_body(text: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
    }

    #[test]
    fn blank_credential_makes_no_call() {
        let (transport, calls) = MockTransport::replying(200, "{}");
        let client = AnalysisClient::new(Endpoint::default(), transport);

        let err = block_on(client.analyze("   ", &request())).unwrap_err();
        assert_eq!(err, AnalysisError::missing_credential());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn missing_image_makes_no_call() {
        let (transport, calls) = MockTransport::replying(200, "{}");
        let client = AnalysisClient::new(Endpoint::default(), transport);
        let mut req = request();
        req.image_data.clear();

        assert_eq!(block_on(client.analyze("key", &req)).unwrap_err(), AnalysisError::no_image());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn sends_prompt_and_inline_image() {
        let (transport, calls) = MockTransport::replying(200, &success_body("{\"overallScore\": 90}"));
        let client = AnalysisClient::new(Endpoint::new("https://example.test/", "gemini-test"), transport);

        let result = block_on(client.analyze(" my key ", &request())).unwrap();
        assert_eq!(result.overall_score, Some(90.0));

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let (url, body) = &calls[0];
        assert_eq!(url, "https://example.test/v1beta/models/gemini-test:generateContent?key=my%20key");

        let body: Value = serde_json::from_str(body).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts[0]["text"], json!(build_prompt(Platform::Social)));
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "aGk=");
    }

    #[test]
    fn rejection_keeps_status_and_body() {
        let (transport, calls) = MockTransport::replying(429, "quota exceeded");
        let client = AnalysisClient::new(Endpoint::default(), transport);

        let err = block_on(client.analyze("key", &request())).unwrap_err();
        assert_eq!(err, AnalysisError::RemoteRejection { status: 429, body: "quota exceeded".into() });
        let msg = err.user_message();
        assert!(msg.contains("429") && msg.contains("quota exceeded"));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn transport_failure_keeps_message() {
        let (transport, _) = MockTransport::failing("dns error: no such host");
        let client = AnalysisClient::new(Endpoint::default(), transport);

        let err = block_on(client.analyze("key", &request())).unwrap_err();
        assert_eq!(err, AnalysisError::Transport("dns error: no such host".into()));
    }

    #[test]
    fn non_json_text_is_parse_error() {
        let (transport, _) = MockTransport::replying(200, &success_body("not json at all"));
        let client = AnalysisClient::new(Endpoint::default(), transport);

        let err = block_on(client.analyze("key", &request())).unwrap_err();
        assert!(matches!(err, AnalysisError::PayloadParse(_)));
    }

    #[test]
    fn default_endpoint_url() {
        assert_eq!(
            Endpoint::default().url("abc"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=abc"
        );
    }
}
