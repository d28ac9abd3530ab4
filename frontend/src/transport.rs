use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{HttpReply, Transport};

/// Browser `fetch` via gloo-net.
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpReply { status, body })
    }
}
