use super::super::{Model, Msg};
use shared::Platform;
use shared::strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_config_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let on_key_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetCredential(input.value())
    });

    html! {
        <div class="config-panel">
            <label for="api-key" class="field-label">{"Gemini API Key"}</label>
            <input
                type="password"
                id="api-key"
                class="text-input"
                placeholder="Enter your API key here"
                value={model.session.credential().to_string()}
                oninput={on_key_input}
            />

            <span class="field-label">{"Ad Platform"}</span>
            <div class="platform-toggle">
                { for Platform::iter().map(|platform| render_platform_button(model, ctx, platform)) }
            </div>
        </div>
    }
}

fn render_platform_button(model: &Model, ctx: &Context<Model>, platform: Platform) -> Html {
    let icon = match platform {
        Platform::Social => "fa-message",
        Platform::Display => "fa-display",
    };

    let selector: &str = platform.as_ref();

    html! {
        <button
            class={classes!("platform-btn", (model.session.platform() == platform).then_some("active"))}
            onclick={ctx.link().callback(move |_| Msg::SetPlatform(platform))}
            data-platform={selector.to_string()}
        >
            <i class={classes!("fa-solid", icon)}></i>{" "}{platform.label()}
        </button>
    }
}
