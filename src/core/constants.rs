/// Interaction tuning constants.
///
/// Rates are per-tick lerp fractions in (0, 1). Delays are milliseconds unless
/// the name says otherwise.

// Cursor followers
pub const CURSOR_DOT_RATE: f32 = 0.3;
pub const CURSOR_OUTLINE_RATE: f32 = 0.15;

// Hero parallax
pub const PARALLAX_RATE: f32 = 0.1;
pub const PARALLAX_CONTENT_SCALE: f32 = 15.0; // px per unit of centered offset
pub const PARALLAX_BACKGROUND_SCALE: f32 = 8.0; // background moves slower for depth

// Magnetic buttons
pub const MAGNETIC_RATE: f32 = 0.2;
pub const MAGNETIC_SCALE: f32 = 10.0;

// Skill card tilt
pub const TILT_RATE: f32 = 0.15;
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const SETTLE_EPSILON: f32 = 0.01;

// Project card tilt (direct, not damped)
pub const PROJECT_TILT_DIVISOR: f32 = 20.0;
pub const PROJECT_TILT_LIFT_PX: f32 = -8.0;

// About section background gradient
pub const GRADIENT_RATE: f32 = 0.05;
pub const GRADIENT_CENTER_PERCENT: f32 = 50.0;

// Particle burst
pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_DISTANCE_PX: f32 = 60.0;
pub const PARTICLE_LIFETIME_MS: u32 = 800;

// Scroll reveal
pub const SECTION_THRESHOLD: f64 = 0.15;
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SECTION_WILL_CHANGE_RESET_MS: u32 = 600;
pub const PROJECT_STAGGER_STEP_MS: u32 = 100;
pub const PROJECT_WILL_CHANGE_RESET_MS: u32 = 500;
pub const ABOUT_THRESHOLD: f64 = 0.2;
pub const ABOUT_TEXT_DELAY_MS: u32 = 200;
pub const ABOUT_CARD_BASE_MS: u32 = 400;
pub const ABOUT_CARD_STEP_MS: u32 = 150;

// Letter reveal
pub const LETTER_DELAY_STEP_MS: u32 = 50;
pub const NBSP: char = '\u{00A0}';

// Contact form
pub const SUBMIT_RESET_MS: u32 = 3000;
pub const LABEL_SENDING: &str = "Sending...";
pub const LABEL_SENT: &str = "Message Sent!";
pub const LABEL_FAILED: &str = "Failed. Try Again";

// Button ripple
pub const RIPPLE_COLLAPSE_MS: u32 = 600;

// Capability hints at or below these values mark a low-end device
pub const LOW_END_MAX_CONCURRENCY: u32 = 2;
pub const LOW_END_MAX_MEMORY_GB: f64 = 2.0;
pub const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Diagnostics
pub const LONG_TASK_WARN_MS: f64 = 50.0;
pub const WILL_CHANGE_CLEANUP_MS: u32 = 2000;
