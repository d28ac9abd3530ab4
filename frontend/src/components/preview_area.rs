use super::super::{Model, Msg};
use super::utils::debounce;
use shared::Phase;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            { render_image_preview(model, ctx) }
            <div class="button-container">
                <button
                    id="analyze-btn"
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Analyze)
                    })}
                    disabled={!model.session.can_submit()}
                >
                    { render_analyze_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_image_preview(model: &Model, ctx: &Context<Model>) -> Html {
    match model.session.image() {
        Some(image) => html! {
            <div class="preview-item">
                <h3>{"Image Preview:"}</h3>
                <img id="actual-image-preview" src={image.to_data_uri()} alt="Ad preview" />
                <button
                    class="remove-btn"
                    title="Remove image"
                    onclick={ctx.link().callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::RemoveImage
                    })}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        },
        None if model.reader.is_some() => html! {
            <div class="loading-preview">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Loading preview..."}</p>
            </div>
        },
        None => html! {},
    }
}

fn render_analyze_button_content(model: &Model) -> Html {
    if model.session.phase() == Phase::AwaitingResponse {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" 2. Analyze Ad Performance"}</> }
    }
}
