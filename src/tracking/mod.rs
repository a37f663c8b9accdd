pub mod scroll_depth;

pub use crate::tracking::scroll_depth::{ScrollDepthTracker, SCROLL_MILESTONES};

/// Analytics stub for call-to-action clicks. Emits a structured event only;
/// nothing is wired to a real collector yet.
pub fn track_cta_click(location: Option<&str>) {
    tracing::info!(button_location = location.unwrap_or("unknown"), "cta_click");
}

/// Analytics stub fired once the backend accepts a signup.
pub fn track_signup(email: &str) {
    tracing::info!(signup_email = email, method = "email", "signup");
}
