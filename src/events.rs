use crate::constants::{px, PLACED_INSETS, RELEASED_INSET};
use crate::dom;
use crate::frame;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::constants::{BASELINE_TRANSFORM, ORIENTATION_RESYNC_MS};
use valentine_core::{
    profile, scale_transform, Effect, PointerSample, Viewport, Widget, WidgetEvent, ZoneLayout,
};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub zone: web::HtmlElement,
    pub yes: web::HtmlElement,
    pub no: web::HtmlElement,
    pub hint: web::HtmlElement,
    pub result: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub widget: Rc<RefCell<Widget>>,
}

impl InputWiring {
    fn layout(&self) -> ZoneLayout {
        ZoneLayout {
            zone: dom::measure(&self.zone),
            control: dom::measure(&self.no),
        }
    }

    /// Measure, dispatch to the widget, then apply the returned effects in order.
    fn dispatch(&self, event: WidgetEvent, raw: Option<&web::Event>) {
        let layout = self.layout();
        let viewport = dom::viewport();
        let effects = self.widget.borrow_mut().dispatch(event, &layout, &viewport);
        for effect in effects {
            self.apply(effect, raw, &viewport);
        }
    }

    fn apply(&self, effect: Effect, raw: Option<&web::Event>, viewport: &Viewport) {
        match effect {
            Effect::PlaceNegative(offset) => {
                let style = self.no.style();
                _ = style.set_property("left", &px(offset.x));
                _ = style.set_property("top", &px(offset.y));
                _ = style.set_property("right", RELEASED_INSET);
                _ = style.set_property("transform", "none");
            }
            Effect::RestoreNegative => {
                let style = self.no.style();
                for inset in PLACED_INSETS {
                    _ = style.remove_property(inset);
                }
                _ = style.set_property("transform", BASELINE_TRANSFORM);
            }
            Effect::ScaleAffirmative(scale) => {
                _ = self.yes.style().set_property("transform", &scale_transform(scale));
            }
            Effect::SuppressDefault => {
                if let Some(ev) = raw {
                    ev.prevent_default();
                }
            }
            Effect::HideZone => overlay::hide(&self.zone),
            Effect::HideHint => overlay::hide(&self.hint),
            Effect::ShowResult => overlay::show_result(&self.result),
            Effect::SizeSurface => dom::sync_canvas_full_viewport(&self.canvas, viewport),
            Effect::StartCelebration(schedule) => {
                if let Err(e) = frame::start_celebration(&self.canvas, schedule, &profile(viewport)) {
                    log::error!("celebration error: {}", e);
                }
            }
        }
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_touchmove(&w);
    wire_pointerdown(&w);
    wire_negative_click(&w);
    wire_affirmative_click(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.zone, "pointermove", move |ev: web::PointerEvent| {
        let sample = PointerSample::mouse(ev.client_x() as f64, ev.client_y() as f64);
        let raw: &web::Event = ev.as_ref();
        w2.dispatch(WidgetEvent::Pointer(sample), Some(raw));
    });
}

fn wire_touchmove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_active_listener(&w.zone, "touchmove", move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let sample = PointerSample::touch(touch.client_x() as f64, touch.client_y() as f64);
        let raw: &web::Event = ev.as_ref();
        w2.dispatch(WidgetEvent::Pointer(sample), Some(raw));
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.no, "pointerdown", move |ev: web::PointerEvent| {
        let sample = PointerSample::press(ev.client_x() as f64, ev.client_y() as f64);
        let raw: &web::Event = ev.as_ref();
        w2.dispatch(WidgetEvent::Pointer(sample), Some(raw));
    });
}

fn wire_negative_click(w: &InputWiring) {
    dom::add_listener(&w.no, "click", |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}

fn wire_affirmative_click(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.yes, "click", move |ev: web::MouseEvent| {
        let raw: &web::Event = ev.as_ref();
        w2.dispatch(WidgetEvent::Activate, Some(raw));
    });
}

/// Canvas follows the window right away; the widget reset waits for the
/// debounce to settle.
fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let w2 = w.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_full_viewport(&w2.canvas, &dom::viewport());
        schedule_reset(&w2);
    });

    let w3 = w.clone();
    dom::add_listener(&window, "orientationchange", move |_ev: web::Event| {
        let canvas = w3.canvas.clone();
        dom::set_timeout(ORIENTATION_RESYNC_MS, move || {
            dom::sync_canvas_full_viewport(&canvas, &dom::viewport());
        });
        schedule_reset(&w3);
    });
}

fn schedule_reset(w: &InputWiring) {
    let (ticket, quiet_ms) = {
        let mut widget = w.widget.borrow_mut();
        (widget.arm_resize(), widget.resize_quiet_ms())
    };
    let w2 = w.clone();
    dom::set_timeout(quiet_ms, move || {
        let settled = w2.widget.borrow_mut().settle_resize(ticket);
        if settled {
            w2.dispatch(WidgetEvent::ResizeSettled, None);
        }
    });
}
