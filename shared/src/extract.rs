//! Pulling the analysis out of the model's free-text answer.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::model::AnalysisResult;

const FENCE_WITH_TAG: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if the model sent one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

/// Drop every code-fence marker and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(FENCE_WITH_TAG, "").replace(FENCE, "").trim().to_string()
}

/// Parse the model's text as JSON after removing fences. Only syntax is
/// checked; shape gaps are left for the renderer.
pub fn parse_analysis_text(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(&cleaned)?;
    Ok(AnalysisResult::from_value(&value))
}

/// Full extraction from a raw success body.
pub fn extract_analysis(body: &str) -> Result<AnalysisResult, AnalysisError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::ResponseShape(format!("Failed to read response envelope: {}", e)))?;

    let text = envelope.first_text().ok_or_else(AnalysisError::no_analysis)?;
    log::debug!("Model returned {} characters of analysis text", text.len());
    parse_analysis_text(text)
}
