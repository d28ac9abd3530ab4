use crate::model::Platform;

const PREAMBLE: &str = "As an expert marketing analyst, analyze the provided ad image.";

const SOCIAL_CONTEXT: &str = "The ad is for a social media feed (e.g., Facebook, Instagram). \
Prioritize analysis on thumb-stopping power, engagement potential, and clarity on a mobile device.";

const DISPLAY_CONTEXT: &str = "The ad is a display/banner ad (e.g., Google Display Network). \
Prioritize analysis on its ability to grab attention instantly, the clarity of a single \
call-to-action, and effectiveness in a small format.";

/// Output contract appended to every prompt, whatever the platform.
pub const SCHEMA_DIRECTIVE: &str = "Your response must be a valid JSON object. \
The overallScore is a predicted performance score from 0 to 100. \
The JSON should strictly follow this schema, with all fields present: \
{\"overallScore\": number, \"oneLiner\": \"string\", \"strengths\": [\"string\"], \
\"improvements\": [\"string\"], \"analysis\": {\
\"colorPalette\": {\"vibe\": \"string\", \"recommendation\": \"string\"}, \
\"subjectAndComposition\": {\"focus\": \"string\", \"type\": \"string\", \"recommendation\": \"string\"}, \
\"typographyAndText\": {\"clarity\": \"string\", \"hierarchy\": \"string\", \"recommendation\": \"string\"}, \
\"brandIntegration\": {\"logoVisibility\": \"string\", \"recommendation\": \"string\"}, \
\"callToAction\": {\"clarity\": \"string\", \"recommendation\": \"string\"}}}";

pub fn platform_context(platform: Platform) -> &'static str {
    match platform {
        Platform::Social => SOCIAL_CONTEXT,
        Platform::Display => DISPLAY_CONTEXT,
    }
}

/// Build the analysis prompt. Called fresh for every request.
pub fn build_prompt(platform: Platform) -> String {
    format!("{} {} {}", PREAMBLE, platform_context(platform), SCHEMA_DIRECTIVE)
}
