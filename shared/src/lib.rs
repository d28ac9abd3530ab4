pub mod error;
pub mod extract;
pub mod gemini;
pub mod guide;
pub mod ingest;
pub mod model;
pub mod prompt;
pub mod render;
pub mod session;

pub use strum;

pub use error::AnalysisError;
pub use gemini::{AnalysisClient, Endpoint, HttpReply, Transport};
pub use ingest::ImageData;
pub use model::{AnalysisBreakdown, AnalysisItem, AnalysisRequest, AnalysisResult, Category, Platform};
pub use prompt::build_prompt;
pub use session::{AnalysisSession, Phase, Ticket};

/// Local-storage slot holding the user's Gemini API key.
pub const CREDENTIAL_STORAGE_KEY: &str = "geminiApiKey";
