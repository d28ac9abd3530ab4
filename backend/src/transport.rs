use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use shared::{HttpReply, Transport};

/// Server-side transport. No timeout is configured.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String> {
        // without_url keeps the API key in the query string out of messages
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.without_url().to_string())?;
        Ok(HttpReply { status, body })
    }
}
