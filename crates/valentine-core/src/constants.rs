// Tuning constants for the valentine prompt. Distances are CSS pixels unless noted.

// Viewport width buckets (inclusive upper bounds)
pub const NARROW_MAX_WIDTH: f64 = 360.0;
pub const MEDIUM_MAX_WIDTH: f64 = 768.0;

// Widths at or below this count as a mobile device even without touch
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

// Evasion threshold / push speed / growth increment per bucket
pub const NARROW_THRESHOLD: f64 = 100.0;
pub const NARROW_PUSH_SPEED: f64 = 120.0;
pub const NARROW_GROWTH_INCREMENT: f64 = 0.08;

pub const MEDIUM_THRESHOLD: f64 = 120.0;
pub const MEDIUM_PUSH_SPEED: f64 = 140.0;
pub const MEDIUM_GROWTH_INCREMENT: f64 = 0.09;

pub const WIDE_THRESHOLD: f64 = 140.0;
pub const WIDE_PUSH_SPEED: f64 = 150.0;
pub const WIDE_GROWTH_INCREMENT: f64 = 0.1;

// Device class dependent values
pub const MOBILE_MAX_SCALE: f64 = 1.8;
pub const DESKTOP_MAX_SCALE: f64 = 2.2;
pub const MOBILE_CLAMP_PADDING: f64 = 10.0;
pub const DESKTOP_CLAMP_PADDING: f64 = 5.0;
pub const MOBILE_BURST_PARTICLES: u32 = 8;
pub const DESKTOP_BURST_PARTICLES: u32 = 12;
pub const MOBILE_FINALE_PARTICLES: u32 = 200;
pub const DESKTOP_FINALE_PARTICLES: u32 = 300;

// Growth baseline
pub const BASE_SCALE: f64 = 1.0;
// Transform both controls carry before any evasion (vertical centering)
pub const BASELINE_TRANSFORM: &str = "translateY(-50%)";

// Timing (milliseconds)
pub const BURST_LOOP_MS: f64 = 1600.0;
pub const FINALE_DELAY_MS: f64 = 300.0;
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const ORIENTATION_RESYNC_MS: f64 = 150.0;

// Small bursts emitted every frame of the loop
pub const BURST_SPREAD_DEG: f64 = 90.0;
pub const BURST_START_VELOCITY: f64 = 45.0;
pub const BURST_TICKS: u32 = 180;
pub const BURST_ORIGIN_Y_MAX: f64 = 0.3; // origins stay in the top 30% of the screen

// Centered finale
pub const FINALE_SPREAD_DEG: f64 = 140.0;
pub const FINALE_START_VELOCITY: f64 = 60.0;
pub const FINALE_TICKS: u32 = 220;
pub const FINALE_ORIGIN: [f64; 2] = [0.5, 0.55];

// Particle physics (per frame, in backing pixels scaled by dpr)
pub const LAUNCH_ANGLE_DEG: f64 = 90.0; // straight up
pub const PARTICLE_DECAY: f64 = 0.9;
pub const PARTICLE_GRAVITY: f64 = 3.0;
pub const PARTICLE_WOBBLE_RADIUS: f64 = 10.0;
pub const PARTICLE_TILT_STEP: f64 = 0.1;
pub const PARTICLE_WOBBLE_SPEED_MAX: f64 = 0.11;

pub const CONFETTI_COLORS: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

// Prompt text
pub const NAME_QUERY_KEY: &str = "name";
pub const DEFAULT_PROMPT: &str = "Will you be my Valentine?";
pub const PROMPT_SUFFIX: &str = ", will you be my Valentine?";
