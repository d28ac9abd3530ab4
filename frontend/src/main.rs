mod components;
mod storage;
mod transport;

use components::handlers;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::{AnalysisClient, AnalysisError, AnalysisResult, AnalysisSession, Endpoint, ImageData, Platform, Ticket};
use std::rc::Rc;
use transport::GlooTransport;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analyzer,
    Guide,
}

// Yew msg components
pub enum Msg {
    // Image operations
    FileOffered(GlooFile),
    ImageRead(Ticket, Result<ImageData, AnalysisError>),
    RemoveImage,

    // Analysis operations
    Analyze,
    AnalysisFinished(Ticket, Result<AnalysisResult, AnalysisError>),

    // Settings
    SetCredential(String),
    SetPlatform(Platform),

    // UI states
    SetTab(Tab),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    session: AnalysisSession,
    client: Rc<AnalysisClient<GlooTransport>>,
    reader: Option<FileReader>,
    active_tab: Tab,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: AnalysisSession::new(storage::load_credential()),
            client: Rc::new(AnalysisClient::new(Endpoint::default(), GlooTransport)),
            reader: None,
            active_tab: Tab::Analyzer,
            is_dragging: false,
            paste_listener: None,
            theme: "light".to_string(),
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image operations
            Msg::FileOffered(file) => handlers::handle_file_offered(self, ctx, file),
            Msg::ImageRead(ticket, outcome) => handlers::handle_image_read(self, ticket, outcome),
            Msg::RemoveImage => handlers::handle_remove_image(self),

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(ticket, outcome) => self.session.finish(ticket, outcome),

            // Settings
            Msg::SetCredential(value) => {
                storage::save_credential(&value);
                self.session.set_credential(value);
                true
            }
            Msg::SetPlatform(platform) => {
                self.session.set_platform(platform);
                true
            }

            // UI states
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="container">
                { components::header::render_header() }
                <div class="top-right">
                    { components::theme_toggle::render_theme_toggle(&self.theme, link) }
                </div>
                { components::header::render_tabs(self.active_tab, link) }

                <main class="main-content">
                {
                    match self.active_tab {
                        Tab::Analyzer => html! {
                            <div class="analyzer-grid">
                                <section class="panel">
                                    <h2>{"1. Configure & Upload"}</h2>
                                    { components::config_panel::render_config_panel(self, ctx) }
                                    { components::upload_section::render_upload_section(self, ctx) }
                                    { components::preview_area::render_preview_area(self, ctx) }
                                    { components::utils::render_error_message(self) }
                                </section>
                                <section class="panel">
                                    <h2>{"3. Performance Analysis"}</h2>
                                    { components::results::render_results(self) }
                                </section>
                            </div>
                        },
                        Tab::Guide => components::guide::render_guide(),
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"AdInsight | Powered by Gemini"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AdInsight starting...");
    yew::Renderer::<Model>::new().render();
}
