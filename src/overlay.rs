use crate::constants::{HIDDEN_CLASS, RESULT_DISPLAY};
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement, display: &str) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for pages without the CSS class
    _ = el.style().set_property("display", display);
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.style().set_property("display", "none");
}

#[inline]
pub fn show_result(el: &web::HtmlElement) {
    show(el, RESULT_DISPLAY);
}
