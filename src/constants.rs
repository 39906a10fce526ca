// Page contract for the web frontend: element ids and CSS values the DOM
// wiring relies on. Numeric tuning lives in `valentine_core::constants`.

// Element ids (see index.html)
pub const ZONE_ID: &str = "zone"; // interaction zone the "No" button lives in
pub const YES_ID: &str = "yesBtn";
pub const NO_ID: &str = "noBtn";
pub const RESULT_ID: &str = "result";
pub const HINT_ID: &str = "hint";
pub const QUESTION_ID: &str = "question";
pub const CANVAS_ID: &str = "confettiCanvas";

pub const REQUIRED_IDS: [&str; 7] = [
    ZONE_ID,
    YES_ID,
    NO_ID,
    RESULT_ID,
    HINT_ID,
    QUESTION_ID,
    CANVAS_ID,
];

// Inline insets set when the "No" button is placed; a restore removes them all.
// index.html anchors the button with `right`, so placing must release it.
pub const PLACED_INSETS: [&str; 3] = ["left", "top", "right"];
pub const RELEASED_INSET: &str = "auto";

// Visibility
pub const HIDDEN_CLASS: &str = "hidden";
pub const RESULT_DISPLAY: &str = "block";

// Full-viewport particle surface layout size
pub const SURFACE_CSS_WIDTH: &str = "100vw";
pub const SURFACE_CSS_HEIGHT: &str = "100vh";

// Media query that marks a touch-first device
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
