use crate::dom;
use crate::render;
use glam::DVec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{Celebration, CelebrationSchedule, ResponsiveProfile};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub celebration: Rc<RefCell<Celebration>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub started: Instant,
}

impl FrameContext {
    /// Run one animation frame. Returns false once the effect has finished.
    pub fn frame(&mut self) -> bool {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let (surface, scalar) = surface_of(&self.canvas);

        let mut celebration = self.celebration.borrow_mut();
        celebration.tick(elapsed_ms, surface, scalar, &mut *self.rng.borrow_mut());

        if celebration.is_finished(elapsed_ms) {
            render::clear(&self.ctx, surface.x, surface.y);
            log::info!("[celebrate] done after {:.0}ms", elapsed_ms);
            return false;
        }
        render::draw_field(&self.ctx, surface.x, surface.y, celebration.field());
        true
    }
}

/// Backing-pixel size of the surface and the particle size scalar (dpr, at least 1).
fn surface_of(canvas: &web::HtmlCanvasElement) -> (DVec2, f64) {
    let size = DVec2::new(canvas.width() as f64, canvas.height() as f64);
    (size, dom::viewport().device_pixel_ratio.max(1.0))
}

/// Kick off the burst loop and arm the finale timer. Runs once per page.
pub fn start_celebration(
    canvas: &web::HtmlCanvasElement,
    schedule: CelebrationSchedule,
    profile: &ResponsiveProfile,
) -> Result<(), dom::DomError> {
    let ctx = dom::context_2d(canvas)?;
    let celebration = Rc::new(RefCell::new(Celebration::new(profile)));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    log::info!(
        "[celebrate] start: {}ms loop, finale at {}ms",
        schedule.burst_loop_ms,
        schedule.finale_delay_ms
    );

    {
        let canvas = canvas.clone();
        let celebration = celebration.clone();
        let rng = rng.clone();
        dom::set_timeout(schedule.finale_delay_ms, move || {
            let (surface, scalar) = surface_of(&canvas);
            celebration
                .borrow_mut()
                .fire_finale(surface, scalar, &mut *rng.borrow_mut());
        });
    }

    start_loop(Rc::new(RefCell::new(FrameContext {
        canvas: canvas.clone(),
        ctx,
        celebration,
        rng,
        started: Instant::now(),
    })));
    Ok(())
}

/// requestAnimationFrame loop that stops rescheduling once `frame` returns false.
///
/// The first frame runs synchronously so the opening burst lands on activation.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if !frame_ctx.borrow_mut().frame() {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
