//! Placeholder substitution for the results view. Everything the UI prints
//! comes from here, so a sparse model answer never reaches the markup as a
//! hole.

use strum::IntoEnumIterator;

use crate::model::{AnalysisItem, AnalysisResult, Category};

pub const ONE_LINER_PLACEHOLDER: &str = "Analysis summary unavailable.";
pub const NO_ITEMS_PLACEHOLDER: &str = "No items to display.";
pub const NO_BREAKDOWN_PLACEHOLDER: &str = "Detailed analysis could not be loaded.";

/// Upper bound of the score scale the prompt asks for.
pub const SCORE_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
    Unknown,
}

impl ScoreBand {
    pub fn of(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Unknown,
            Some(s) if s >= 85.0 => ScoreBand::Good,
            Some(s) if s >= 60.0 => ScoreBand::Fair,
            Some(_) => ScoreBand::Poor,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Poor => "score-poor",
            ScoreBand::Unknown => "score-unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub title: &'static str,
    pub vibe: Option<String>,
    pub details: Vec<(&'static str, String)>,
    pub recommendation: Option<String>,
}

impl CategoryView {
    fn new(category: Category, item: Option<&AnalysisItem>) -> Self {
        let empty = AnalysisItem::default();
        let item = item.unwrap_or(&empty);

        let labelled: Vec<(&'static str, &Option<String>)> = match category {
            Category::ColorPalette => vec![],
            Category::SubjectAndComposition => vec![("Focus", &item.focus), ("Type", &item.kind)],
            Category::TypographyAndText => vec![("Clarity", &item.clarity), ("Hierarchy", &item.hierarchy)],
            Category::BrandIntegration => vec![("Logo Visibility", &item.logo_visibility)],
            Category::CallToAction => vec![("Clarity", &item.clarity)],
        };

        Self {
            title: category.title(),
            vibe: non_blank(&item.vibe),
            details: labelled
                .into_iter()
                .filter_map(|(label, value)| non_blank(value).map(|v| (label, v)))
                .collect(),
            recommendation: non_blank(&item.recommendation),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vibe.is_none() && self.details.is_empty() && self.recommendation.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub score: String,
    pub band: ScoreBand,
    pub one_liner: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub breakdown: Option<Vec<CategoryView>>,
}

impl ResultView {
    pub fn new(result: &AnalysisResult) -> Self {
        Self {
            score: format_score(result.overall_score),
            band: ScoreBand::of(result.overall_score),
            one_liner: non_blank(&result.one_liner).unwrap_or_else(|| ONE_LINER_PLACEHOLDER.to_string()),
            strengths: result.strengths.clone(),
            improvements: result.improvements.clone(),
            breakdown: result.analysis.as_ref().map(|analysis| {
                Category::iter()
                    .map(|category| CategoryView::new(category, analysis.item(category)))
                    .collect()
            }),
        }
    }
}

/// Whole numbers print without a fraction; a missing score prints as `0`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() && s.fract() == 0.0 => format!("{}", s as i64),
        Some(s) if s.is_finite() => format!("{:.1}", s),
        _ => "0".to_string(),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
