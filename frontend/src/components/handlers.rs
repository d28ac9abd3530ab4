use super::super::{Model, Msg};
use super::utils::first_file;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_bytes;
use shared::{AnalysisError, AnalysisResult, ImageData, Ticket};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn handle_file_offered(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let mime_type = file.raw_mime_type();

    let ticket = match model.session.offer_file(&mime_type) {
        Ok(ticket) => ticket,
        Err(_) => {
            log::warn!("Skipping non-image file: {} ({})", file.name(), mime_type);
            return true;
        }
    };

    let link = ctx.link().clone();
    let reader = read_as_bytes(&file, move |bytes| {
        let outcome = bytes
            .map_err(|e| AnalysisError::InputValidation(format!("Failed to read the selected file: {}", e)))
            .and_then(|bytes| ImageData::from_bytes(&mime_type, &bytes));
        link.send_message(Msg::ImageRead(ticket, outcome));
    });

    // Replacing the handle drops any read still in flight.
    model.reader = Some(reader);
    true
}

pub fn handle_image_read(
    model: &mut Model,
    ticket: Ticket,
    outcome: Result<ImageData, AnalysisError>,
) -> bool {
    model.reader = None;
    model.session.image_read(ticket, outcome)
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    model.reader = None;
    model.session.remove_image();
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let (ticket, request) = match model.session.submit() {
        Ok(submitted) => submitted,
        Err(e) => {
            log::warn!("Analysis not started: {}", e);
            return true;
        }
    };

    let client = Rc::clone(&model.client);
    let api_key = model.session.credential().to_string();
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome: Result<AnalysisResult, AnalysisError> = client.analyze(&api_key, &request).await;
        if let Err(e) = &outcome {
            log::error!("Analysis failed: {}", e);
        }
        link.send_message(Msg::AnalysisFinished(ticket, outcome));
    });

    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return false;
    };

    let result = if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode")
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode")
    };
    if let Err(e) = result {
        log::warn!("Failed to switch theme: {:?}", e);
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        process_file_list(ctx, file_list);
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, file_list);
                return true;
            }
        }
    }
    false
}

/// Only the first file is used; the rest are ignored.
pub fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    if file_list.length() > 1 {
        log::info!("{} files offered, using the first", file_list.length());
    }
    if let Some(file) = first_file(&file_list) {
        ctx.link().send_message(Msg::FileOffered(file));
    }
}
