#![cfg(target_arch = "wasm32")]
use constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::prompt;
use valentine_core::Widget;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(run);
        document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(dom::DomError::NoWindow)?;
    let document = window.document().ok_or(dom::DomError::NoDocument)?;
    for id in REQUIRED_IDS {
        document
            .get_element_by_id(id)
            .ok_or(dom::DomError::MissingElement(id))?;
    }

    set_personalized_question(&window, &document)?;

    let canvas = dom::canvas(&document, CANVAS_ID)?;
    dom::sync_canvas_full_viewport(&canvas, &dom::viewport());

    events::wire_input_handlers(events::InputWiring {
        zone: dom::html_element(&document, ZONE_ID)?,
        yes: dom::html_element(&document, YES_ID)?,
        no: dom::html_element(&document, NO_ID)?,
        hint: dom::html_element(&document, HINT_ID)?,
        result: dom::html_element(&document, RESULT_ID)?,
        canvas,
        widget: Rc::new(RefCell::new(Widget::new())),
    });
    Ok(())
}

/// Read `?name=` once and write the prompt as plain text.
fn set_personalized_question(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let search = window
        .location()
        .search()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let name = prompt::name_from_search(&search);
    let text = prompt::prompt_text(name.as_deref());
    let question = dom::html_element(document, QUESTION_ID)?;
    question.set_text_content(Some(&text));
    log::info!("[prompt] personalised={}", name.is_some());
    Ok(())
}
