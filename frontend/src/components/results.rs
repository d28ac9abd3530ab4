use super::super::Model;
use shared::Phase;
use shared::render::{CategoryView, NO_BREAKDOWN_PLACEHOLDER, NO_ITEMS_PLACEHOLDER, ResultView, SCORE_SCALE};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    if model.session.phase() == Phase::AwaitingResponse {
        return html! {
            <div class="results-placeholder">
                <i class="fa-solid fa-spinner fa-spin fa-3x"></i>
                <h3>{"Running AI Analysis..."}</h3>
                <p>{"This may take a few moments."}</p>
            </div>
        };
    }

    let Some(result) = model.session.result() else {
        return html! {
            <div class="results-placeholder">
                <i class="fa-solid fa-file-image fa-3x"></i>
                <h3>{"Awaiting Analysis"}</h3>
                <p>{"Upload an image and click \"Analyze\" to see your ad's performance prediction."}</p>
            </div>
        };
    };

    let view = ResultView::new(result);

    html! {
        <div class="results-container">
            <div class="overall-score">
                <p class="meter-label">{"Predicted Performance Score"}</p>
                <div class={classes!("score-badge", view.band.css_class())}>
                    <span class="score-value">{ &view.score }</span>
                    <span class="score-scale">{ format!("/{}", SCORE_SCALE) }</span>
                </div>
                <p class="one-liner">{ format!("\"{}\"", view.one_liner) }</p>
            </div>
            <div class="feedback-grid">
                { render_feedback_card("Key Strengths", "fa-circle-check", &view.strengths) }
                { render_feedback_card("Areas for Improvement", "fa-circle-xmark", &view.improvements) }
            </div>
            { render_breakdown(view.breakdown.as_deref()) }
        </div>
    }
}

fn render_feedback_card(title: &str, icon: &'static str, items: &[String]) -> Html {
    html! {
        <div class="feedback-card">
            <h3><i class={classes!("fa-solid", icon)}></i>{" "}{title}</h3>
            <ul>
            {
                if items.is_empty() {
                    html! { <li class="no-results-message">{ NO_ITEMS_PLACEHOLDER }</li> }
                } else {
                    items.iter().map(|item| html! {
                        <li><i class="fa-solid fa-star"></i>{" "}{item}</li>
                    }).collect::<Html>()
                }
            }
            </ul>
        </div>
    }
}

fn render_breakdown(breakdown: Option<&[CategoryView]>) -> Html {
    let Some(categories) = breakdown else {
        return html! { <p class="no-results-message">{ NO_BREAKDOWN_PLACEHOLDER }</p> };
    };

    html! {
        <div class="detailed-results">
            <h3>{"Detailed Breakdown"}</h3>
            { for categories.iter().map(render_category) }
        </div>
    }
}

fn render_category(category: &CategoryView) -> Html {
    html! {
        <div class="result-item" key={category.title}>
            <h4>{ category.title }</h4>
            if let Some(vibe) = &category.vibe {
                <p><strong>{"Vibe:"}</strong>{" "}{vibe}</p>
            }
            { for category.details.iter().map(|(label, value)| html! {
                <p><strong>{ format!("{}:", label) }</strong>{" "}{value}</p>
            }) }
            if let Some(recommendation) = &category.recommendation {
                <p class="suggestion"><strong>{"Suggestion:"}</strong>{" "}{recommendation}</p>
            }
        </div>
    }
}
