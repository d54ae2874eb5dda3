use log::Level;

/// Viewport width above which the desktop navigation is always shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Stand-in latency for the contact form delivery.
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
