//! JSON relay over the shared analysis pipeline for non-browser clients.
//! The browser app talks to the model endpoint directly.

use actix_files::Files;
use actix_web::error::InternalError;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::gemini::INLINE_MIME_TYPE;
use shared::ingest::check_mime;
use shared::{AnalysisClient, AnalysisError, AnalysisRequest, ImageData, Platform};

use crate::transport::ReqwestTransport;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Uploads arrive base64-encoded inside JSON, well past actix's 2 MiB default.
const MAX_JSON_BYTES: usize = 32 * 1024 * 1024;

pub type Client = AnalysisClient<ReqwestTransport>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzePayload {
    #[serde(default)]
    image_data: String,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    platform: Option<String>,
}

impl AnalyzePayload {
    fn into_request(self) -> Result<AnalysisRequest, AnalysisError> {
        let platform = self
            .platform
            .as_deref()
            .map(Platform::from_selector)
            .unwrap_or_default();

        let image = if self.image_data.starts_with("data:") {
            ImageData::from_data_uri(&self.image_data)?
        } else {
            let mime_type = self.mime_type.unwrap_or_else(|| INLINE_MIME_TYPE.to_string());
            check_mime(&mime_type)?;
            ImageData {
                mime_type,
                base64: self.image_data,
            }
        };

        if image.is_empty() {
            return Err(AnalysisError::no_image());
        }

        Ok(AnalysisRequest {
            image_data: image.base64,
            mime_type: image.mime_type,
            platform,
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/analyze").route(web::post().to(analyze)));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, _req| {
            let message =
                AnalysisError::InputValidation(format!("Invalid request body: {}", err)).user_message();
            warn!("Rejected analyze body: {}", err);
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse { error: message }),
            )
            .into()
        })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn analyze(
    client: web::Data<Client>,
    req: HttpRequest,
    payload: web::Json<AnalyzePayload>,
) -> HttpResponse {
    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let outcome = match payload.into_inner().into_request() {
        Ok(request) => {
            info!(
                "Analyzing {} image ({} base64 bytes) for {}",
                request.mime_type,
                request.image_data.len(),
                request.platform.label()
            );
            client.analyze(api_key, &request).await
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            info!("Analysis completed with score {:?}", result.overall_score);
            HttpResponse::Ok().json(result)
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &AnalysisError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.user_message(),
    };
    if err.is_input_error() {
        warn!("Analyze request rejected: {}", err);
        HttpResponse::BadRequest().json(body)
    } else {
        error!("Analysis failed: {}", err);
        HttpResponse::BadGateway().json(body)
    }
}
