use shared::guide::PRINCIPLES;
use yew::prelude::*;

pub fn render_guide() -> Html {
    html! {
        <div class="guide-panel">
            <h2>{"Best Practices for High-Performing Ads"}</h2>
            <div class="guide-grid">
                { for PRINCIPLES.iter().map(|p| html! {
                    <div class="guide-card" key={p.title}>
                        <h3><i class={classes!("fa-solid", p.icon)}></i>{" "}{p.title}</h3>
                        <p>{ p.description }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
