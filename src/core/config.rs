//! Landing page configuration.
//!
//! Every selector, label, delay and style value the binders use lives here, with defaults
//! matching the stock "coming soon" markup.

use std::time::Duration;

/// Default delay simulating the subscription request latency
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Default time a success message stays on screen
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 4000;

/// Default duration of the message exit animation
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Default vertical scroll offset above which the navbar gets the heavy shadow
pub const DEFAULT_SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Default fraction of a section that must be visible before it is revealed
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Complete binder configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingConfig {
    pub newsletter: NewsletterConfig,
    pub navigation: NavigationConfig,
    pub fade_in: FadeInConfig,
}

/// Newsletter form settings
#[derive(Debug, Clone, PartialEq)]
pub struct NewsletterConfig {
    /// Identifier of the `<form>` element
    pub form_id: String,
    /// Selector of the email input, relative to the form
    pub email_selector: String,
    /// Selector of the submit control, relative to the form
    pub submit_selector: String,
    /// Submit label while the simulated request is running
    pub busy_label: String,
    pub invalid_email_message: String,
    pub success_message: String,
    pub submit_delay_ms: u64,
    pub success_display_ms: u64,
    pub exit_animation_ms: u64,
}

impl NewsletterConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form_id: "newsletterForm".to_string(),
            email_selector: r#"input[type="email"]"#.to_string(),
            submit_selector: r#"button[type="submit"]"#.to_string(),
            busy_label: "Subscribing...".to_string(),
            invalid_email_message: "Please enter a valid email address.".to_string(),
            success_message: "Thank you! Check your email for confirmation.".to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            exit_animation_ms: DEFAULT_EXIT_ANIMATION_MS,
        }
    }
}

/// Navbar, mobile menu and in-page anchor settings
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub navbar_selector: String,
    /// Collapsible mobile overlay
    pub overlay_selector: String,
    /// Control that opens and closes the overlay
    pub toggle_selector: String,
    /// Class present on the overlay while it is open
    pub open_class: String,
    pub anchor_selector: String,
    pub shadow_threshold_px: f64,
    pub light_shadow: String,
    pub heavy_shadow: String,
}

impl NavigationConfig {
    /// Shadow for a vertical scroll offset: light at or below the threshold, heavy above it
    pub fn shadow_for_offset(&self, offset_y: f64) -> &str {
        if offset_y > self.shadow_threshold_px {
            &self.heavy_shadow
        } else {
            &self.light_shadow
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".to_string(),
            overlay_selector: ".navbar-collapse".to_string(),
            toggle_selector: ".navbar-toggler".to_string(),
            open_class: "show".to_string(),
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            shadow_threshold_px: DEFAULT_SHADOW_THRESHOLD_PX,
            light_shadow: "0 2px 12px rgba(44, 47, 51, 0.08)".to_string(),
            heavy_shadow: "0 4px 16px rgba(44, 47, 51, 0.12)".to_string(),
        }
    }
}

/// Section reveal animation settings
#[derive(Debug, Clone, PartialEq)]
pub struct FadeInConfig {
    pub enabled: bool,
    pub section_selector: String,
    /// Fraction of the section that must be visible, in `[0, 1]`
    pub threshold: f64,
    /// Viewport margin in CSS syntax
    pub root_margin: String,
    pub hidden_transform: String,
    pub visible_transform: String,
    pub transition: String,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            section_selector: "section".to_string(),
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            root_margin: "0px 0px -100px 0px".to_string(),
            hidden_transform: "translateY(20px)".to_string(),
            visible_transform: "translateY(0)".to_string(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}
