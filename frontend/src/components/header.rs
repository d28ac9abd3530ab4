use super::super::{Model, Msg, Tab};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Ad"}<span class="brand-accent">{"Insight"}</span></h1>
            <p class="subtitle">{"AI-powered analysis to predict and improve the performance of your image ads."}</p>
        </header>
    }
}

pub fn render_tabs(active: Tab, link: &Scope<Model>) -> Html {
    let tab = |tab: Tab, icon: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("tab-button", (active == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetTab(tab))}
            >
                <i class={classes!("fa-solid", icon)}></i>{" "}{label}
            </button>
        }
    };

    html! {
        <nav class="tabs">
            { tab(Tab::Analyzer, "fa-chart-column", "Ad Analyzer") }
            { tab(Tab::Guide, "fa-lightbulb", "Performance Guide") }
        </nav>
    }
}
