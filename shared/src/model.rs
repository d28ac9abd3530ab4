use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, EnumIter};

/// Advertising channel the analysis is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    Social,
    Display,
}

impl Platform {
    /// `"social"` selects the feed context; any other selector is treated as display.
    pub fn from_selector(selector: &str) -> Self {
        if selector == "social" { Platform::Social } else { Platform::Display }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Social => "Social Media",
            Platform::Display => "Display/Banner",
        }
    }
}

/// One submit's worth of input. Dropped once the remote call settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub image_data: String,
    pub mime_type: String,
    #[serde(default)]
    pub platform: Platform,
}

/// Free-form attributes of one breakdown category. Each category fills in
/// only the few that apply to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_visibility: Option<String>,
}

impl AnalysisItem {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            vibe: string_field(value, "vibe"),
            recommendation: string_field(value, "recommendation"),
            focus: string_field(value, "focus"),
            kind: string_field(value, "type"),
            clarity: string_field(value, "clarity"),
            hierarchy: string_field(value, "hierarchy"),
            logo_visibility: string_field(value, "logoVisibility"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Category {
    ColorPalette,
    SubjectAndComposition,
    TypographyAndText,
    BrandIntegration,
    CallToAction,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::ColorPalette => "colorPalette",
            Category::SubjectAndComposition => "subjectAndComposition",
            Category::TypographyAndText => "typographyAndText",
            Category::BrandIntegration => "brandIntegration",
            Category::CallToAction => "callToAction",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::ColorPalette => "Color Palette",
            Category::SubjectAndComposition => "Subject & Composition",
            Category::TypographyAndText => "Typography & Text",
            Category::BrandIntegration => "Brand Integration",
            Category::CallToAction => "Call to Action",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<AnalysisItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_and_composition: Option<AnalysisItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_and_text: Option<AnalysisItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_integration: Option<AnalysisItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<AnalysisItem>,
}

impl AnalysisBreakdown {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        let item = |category: Category| value.get(category.key()).and_then(AnalysisItem::from_value);
        Some(Self {
            color_palette: item(Category::ColorPalette),
            subject_and_composition: item(Category::SubjectAndComposition),
            typography_and_text: item(Category::TypographyAndText),
            brand_integration: item(Category::BrandIntegration),
            call_to_action: item(Category::CallToAction),
        })
    }

    pub fn item(&self, category: Category) -> Option<&AnalysisItem> {
        match category {
            Category::ColorPalette => self.color_palette.as_ref(),
            Category::SubjectAndComposition => self.subject_and_composition.as_ref(),
            Category::TypographyAndText => self.typography_and_text.as_ref(),
            Category::BrandIntegration => self.brand_integration.as_ref(),
            Category::CallToAction => self.call_to_action.as_ref(),
        }
    }
}

/// Structured verdict returned by the model. Every field may be missing;
/// gaps are filled with placeholders when rendered, not rejected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: Option<f64>,
    pub one_liner: Option<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub analysis: Option<AnalysisBreakdown>,
}

impl AnalysisResult {
    /// Lenient conversion from any JSON value. Fields with the wrong type
    /// are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            overall_score: value.get("overallScore").and_then(Value::as_f64),
            one_liner: string_field(value, "oneLiner"),
            strengths: string_list(value, "strengths"),
            improvements: string_list(value, "improvements"),
            analysis: value.get("analysis").and_then(AnalysisBreakdown::from_value),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selector_falls_back_to_display() {
        assert_eq!(Platform::from_selector("social"), Platform::Social);
        assert_eq!(Platform::from_selector("display"), Platform::Display);
        assert_eq!(Platform::from_selector("Social"), Platform::Display);
        assert_eq!(Platform::from_selector(""), Platform::Display);
    }

    #[test]
    fn full_payload_is_read() {
        let value = json!({
            "overallScore": 82,
            "oneLiner": "Bold and readable.",
            "strengths": ["High contrast", "Clear CTA"],
            "improvements": ["Smaller logo"],
            "analysis": {
                "colorPalette": { "vibe": "Energetic", "recommendation": "Keep it" },
                "subjectAndComposition": { "focus": "Product", "type": "Studio", "recommendation": "Crop tighter" },
                "typographyAndText": { "clarity": "High", "hierarchy": "Good", "recommendation": "None" },
                "brandIntegration": { "logoVisibility": "Top-left", "recommendation": "Enlarge" },
                "callToAction": { "clarity": "Obvious", "recommendation": "Add urgency" }
            }
        });

        let result = AnalysisResult::from_value(&value);
        assert_eq!(result.overall_score, Some(82.0));
        assert_eq!(result.one_liner.as_deref(), Some("Bold and readable."));
        assert_eq!(result.strengths, vec!["High contrast", "Clear CTA"]);
        let analysis = result.analysis.unwrap();
        assert_eq!(analysis.subject_and_composition.unwrap().kind.as_deref(), Some("Studio"));
        assert_eq!(analysis.brand_integration.unwrap().logo_visibility.as_deref(), Some("Top-left"));
    }

    #[test]
    fn mistyped_fields_become_absent() {
        let value = json!({
            "overallScore": "85",
            "oneLiner": 12,
            "strengths": ["ok", 3, null, "fine"],
            "improvements": "not a list",
            "analysis": { "colorPalette": "flat" }
        });

        let result = AnalysisResult::from_value(&value);
        assert_eq!(result.overall_score, None);
        assert_eq!(result.one_liner, None);
        assert_eq!(result.strengths, vec!["ok", "fine"]);
        assert!(result.improvements.is_empty());
        assert_eq!(result.analysis.unwrap().color_palette, None);
    }

    #[test]
    fn non_object_payload_is_empty_result() {
        assert_eq!(AnalysisResult::from_value(&json!([1, 2, 3])), AnalysisResult::default());
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = AnalysisResult {
            overall_score: Some(7.5),
            analysis: Some(AnalysisBreakdown {
                subject_and_composition: Some(AnalysisItem { kind: Some("Lifestyle".into()), ..Default::default() }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["overallScore"], json!(7.5));
        assert_eq!(value["analysis"]["subjectAndComposition"]["type"], json!("Lifestyle"));
    }

    #[test]
    fn request_reads_camel_case() {
        let request: AnalysisRequest = serde_json::from_value(json!({
            "imageData": "aGk=",
            "mimeType": "image/jpeg",
            "platform": "display"
        }))
        .unwrap();
        assert_eq!(request.platform, Platform::Display);
        assert_eq!(request.mime_type, "image/jpeg");
    }
}
