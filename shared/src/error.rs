use thiserror::Error;

/// Every way an analysis can fail, from picking the file to parsing the
/// model's answer. The UI shows all of them through the same banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InputValidation(String),
    #[error("{0}")]
    Transport(String),
    #[error("API request failed with status {status}: {body}")]
    RemoteRejection { status: u16, body: String },
    #[error("{0}")]
    ResponseShape(String),
    #[error("Failed to parse analysis JSON: {0}")]
    PayloadParse(String),
}

impl AnalysisError {
    pub fn no_image() -> Self {
        Self::InputValidation("Please upload an image first.".into())
    }

    pub fn not_an_image() -> Self {
        Self::InputValidation("Please upload a valid image file (PNG, JPG, etc.).".into())
    }

    pub fn missing_credential() -> Self {
        Self::InputValidation("Please enter your Gemini API key to proceed.".into())
    }

    pub fn busy() -> Self {
        Self::InputValidation("An analysis is already in progress.".into())
    }

    pub fn no_analysis() -> Self {
        Self::ResponseShape("Failed to get a valid analysis from the AI.".into())
    }

    /// Errors the user can fix locally; no request was ever sent.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputValidation(_))
    }

    /// Single line shown in the error banner.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        // Fixed texts end in a period; remote and transport text stays verbatim.
        let detail = match self {
            Self::InputValidation(_) | Self::ResponseShape(_) => text.strip_suffix('.').unwrap_or(&text),
            _ => &text,
        };
        format!("An error occurred: {}. Please try again.", detail)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::PayloadParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_common_prefix() {
        let errors = [
            AnalysisError::no_image(),
            AnalysisError::Transport("connection reset".into()),
            AnalysisError::RemoteRejection { status: 500, body: "boom".into() },
            AnalysisError::no_analysis(),
            AnalysisError::PayloadParse("expected value".into()),
        ];
        for err in errors {
            assert!(err.user_message().starts_with("An error occurred: "));
            assert!(err.user_message().ends_with(". Please try again."));
        }
    }

    #[test]
    fn rejection_carries_status_and_body() {
        let err = AnalysisError::RemoteRejection { status: 429, body: "quota exceeded".into() };
        let msg = err.user_message();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exceeded"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn trailing_period_not_doubled() {
        let msg = AnalysisError::no_image().user_message();
        assert_eq!(msg, "An error occurred: Please upload an image first. Please try again.");
    }

    #[test]
    fn remote_body_kept_verbatim() {
        let err = AnalysisError::RemoteRejection { status: 400, body: "...".into() };
        assert_eq!(
            err.user_message(),
            "An error occurred: API request failed with status 400: .... Please try again."
        );
    }
}
