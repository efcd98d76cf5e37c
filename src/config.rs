use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Class names the page stylesheet knows about.
pub mod classes {
    pub const ACTIVE_NAV: &str = "bg-gray-200";
    pub const HEADER_SCROLLED: &str = "header-scrolled";
    pub const REVEAL: &str = "animate-fadeIn";
    pub const FIELD_ERROR: &str = "border-red-500";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const ERROR_MESSAGE_FULL: &str = "error-message text-red-500 text-sm mt-1";
    pub const SUBMIT_LOADING: &str = "loading";
    pub const SUCCESS_TOAST: &str =
        "fixed top-4 right-4 bg-green-500 text-white px-6 py-3 rounded-lg shadow-lg z-50";
}

/// Inline style applied to a decorative circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleStyle {
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub transform: &'static str,
}

pub const CIRCLE_HIGHLIGHT: CircleStyle = CircleStyle {
    border_color: "#6b7280",
    background_color: "#f3f4f6",
    transform: "scale(1.05)",
};

pub const CIRCLE_DEFAULT: CircleStyle = CircleStyle {
    border_color: "#d1d5db",
    background_color: "#f9fafb",
    transform: "scale(1)",
};

/// Timings, thresholds and copy used by the page components.
///
/// `Default` matches the production page. Tests shrink the delays.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub submit_delay_ms: u32,
    pub success_dismiss_ms: u32,
    pub typing_interval_ms: u32,
    pub welcome_text: String,
    pub scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub name_prompt: String,
    pub fallback_greeting: String,
    pub success_message: String,
    pub submit_label: String,
    pub busy_label: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1_500,
            success_dismiss_ms: 5_000,
            typing_interval_ms: 150,
            welcome_text: "Welcome".to_string(),
            scroll_threshold_px: 100.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            name_prompt: "Enter your name:".to_string(),
            fallback_greeting: "Welcome to my portfolio!".to_string(),
            success_message: "Thank you for your message! We will get back to you soon.".to_string(),
            submit_label: "Submit".to_string(),
            busy_label: "Sending...".to_string(),
        }
    }
}
