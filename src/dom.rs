use crate::constants::{COARSE_POINTER_QUERY, SURFACE_CSS_HEIGHT, SURFACE_CSS_WIDTH};
use thiserror::Error;
use valentine_core::{Rect, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a {1}")]
    WrongType(&'static str, &'static str),
    #[error("2d context unavailable")]
    NoContext2d,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element(document: &web::Document, id: &'static str) -> Result<web::HtmlElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::WrongType(id, "HtmlElement"))
}

pub fn canvas(document: &web::Document, id: &'static str) -> Result<web::HtmlCanvasElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| DomError::WrongType(id, "HtmlCanvasElement"))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(DomError::NoContext2d)
}

/// Poll the window for the current viewport. Never cached.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
        .with_device_pixel_ratio(w.device_pixel_ratio())
        .with_touch(is_touch_device(&w))
}

fn is_touch_device(w: &web::Window) -> bool {
    let has_ontouchstart = js_sys::Reflect::has(w, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let coarse = w
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    has_ontouchstart || w.navigator().max_touch_points() > 0 || coarse
}

#[inline]
pub fn measure(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Size the particle surface to the full viewport at the current device pixel ratio.
pub fn sync_canvas_full_viewport(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", SURFACE_CSS_WIDTH);
    _ = style.set_property("height", SURFACE_CSS_HEIGHT);
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener that may call `preventDefault` on scroll-affecting events.
pub fn add_active_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// One-shot timer. Silently does nothing without a window.
pub fn set_timeout(delay_ms: f64, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms as i32)
    {
        log::error!("set_timeout failed: {:?}", e);
    }
}
