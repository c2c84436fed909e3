// Shared tuning constants for the page effects. Timings are milliseconds
// unless the name says otherwise; distances are CSS pixels.

// Particle field
pub const PARTICLE_SPACING_PX: f32 = 18.0; // one particle per this many px of viewport width
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.3; // per axis, px/frame
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_MAX: f32 = 0.6;
pub const LINK_DISTANCE_PX: f32 = 100.0;
pub const LINK_ALPHA_MAX: f32 = 0.08;
pub const LINK_WIDTH_PX: f32 = 1.0;
pub const PARTICLE_RGB: [u8; 3] = [99, 102, 241];

// Matrix rain
pub const RAIN_GLYPHS: &str = "アイウエオNABCDEFGHIJ01@#$%&*";
pub const RAIN_COLUMN_PITCH_PX: f32 = 14.0;
pub const RAIN_RESET_PROBABILITY: f32 = 0.025;
pub const RAIN_GREEN: &str = "#00ff41";
pub const RAIN_BRIGHT: &str = "#fff";

pub const AMBIENT_FONT_PX: f32 = 14.0;
pub const AMBIENT_FADE_ALPHA: f32 = 0.05;
pub const AMBIENT_BRIGHT_PROBABILITY: f32 = 0.06;
pub const AMBIENT_GLOW_BRIGHT: f32 = 8.0;
pub const AMBIENT_GLOW_NORMAL: f32 = 0.0;
pub const AMBIENT_INCREMENT: f32 = 0.5;
pub const AMBIENT_STAGGER_ROWS: f32 = 80.0;

pub const OVERLAY_FONT_PX: f32 = 13.0;
pub const OVERLAY_FADE_ALPHA: f32 = 0.07;
pub const OVERLAY_BRIGHT_PROBABILITY: f32 = 0.08;
pub const OVERLAY_GLOW_BRIGHT: f32 = 10.0;
pub const OVERLAY_GLOW_NORMAL: f32 = 2.0;
pub const OVERLAY_INCREMENT: f32 = 0.8; // faster than ambient
pub const OVERLAY_STAGGER_ROWS: f32 = 50.0;

// Hacker-mode transition
pub const HK_SETTLE_MS: u32 = 180;
pub const HK_CHAR_MS: u32 = 30;
pub const HK_LINE_PAUSE_MS: u32 = 90;
pub const HK_LAST_LINE_PAUSE_MS: u32 = 180;
pub const HK_STATUS_HOLD_MS: u32 = 450;
pub const HK_FADE_MS: u32 = 500;
pub const HK_FADE_WAIT_MS: u32 = 520; // fade plus margin
pub const HK_STATUS_GREEN: &str = "#00ff41";
pub const HK_STATUS_CYAN: &str = "#00d4ff";

// Typed hero text
pub const TYPE_CHAR_MS: u32 = 75;
pub const TYPE_HOLD_MS: u32 = 1800;
pub const TYPE_DELETE_MS: u32 = 40;
pub const TYPE_NEXT_PHRASE_MS: u32 = 200;

// Cursor follower
pub const FOLLOWER_EASING: f32 = 0.12;
pub const FOLLOWER_SIZE_PX: f32 = 36.0;
pub const FOLLOWER_HOVER_SIZE_PX: f32 = 56.0;
pub const FOLLOWER_BORDER: &str = "rgba(99,102,241,0.4)";
pub const FOLLOWER_HOVER_BORDER: &str = "rgba(99,102,241,0.8)";

// Scroll thresholds
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 400.0;

// Visibility triggers
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_STAGGER_SLOTS: usize = 4;
pub const REVEAL_STAGGER_SECS: f32 = 0.1;
pub const HERO_THRESHOLD: f64 = 0.5;
pub const BAR_THRESHOLD: f64 = 0.5;
pub const SECTION_ROOT_MARGIN: &str = "-40% 0px -55% 0px";
pub const TAB_REVEAL_REPLAY_MS: u32 = 50;

// Counters
pub const COUNTER_STEPS: u32 = 40;
pub const COUNTER_INTERVAL_MS: u32 = 40;

// Contact form
pub const FORM_SEND_DELAY_MS: u32 = 1500;
pub const FORM_RESTORE_DELAY_MS: u32 = 4000;

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";
