use valentine_core::ParticleField;
use web_sys as web;

/// Clear the surface and draw every live particle as a filled quad.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in field.iter() {
        let [a, b, c, d] = p.quad();
        ctx.set_global_alpha(p.opacity());
        ctx.set_fill_style_str(p.color);
        ctx.begin_path();
        ctx.move_to(a.x.floor(), a.y.floor());
        ctx.line_to(b.x.floor(), b.y.floor());
        ctx.line_to(c.x.floor(), c.y.floor());
        ctx.line_to(d.x.floor(), d.y.floor());
        ctx.close_path();
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}
