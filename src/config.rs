//! Site-wide constants and build-time configuration.
//!
//! Runtime server settings (address, site root, reload port) come from
//! `[package.metadata.leptos]` through `leptos::config::get_configuration`.
//! Everything here is baked into both the server binary and the WASM bundle.

use chrono::{DateTime, Datelike};

/// Distance below the viewport top used to decide which section is active.
pub const ACTIVE_SECTION_PROBE: f64 = 200.0;
/// Height of the fixed header; smooth scrolling stops this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll offset past which the header switches to its compact style.
pub const COMPACT_HEADER_THRESHOLD: f64 = 50.0;
/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Fraction of a section that must be visible before it is revealed.
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.15;

/// Delay before the loader starts its exit animation.
pub const CONTENT_READY_DELAY_MS: f64 = 500.0;

/// Minimum spacing between two contact form sends.
pub const EMAIL_THROTTLE_MS: f64 = 10_000.0;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_SERVICE_ID: &str = "service_portfolio";
const DEFAULT_TEMPLATE_ID: &str = "template_contact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Identifiers captured from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`
    /// and `EMAILJS_PUBLIC_KEY` at compile time.
    ///
    /// The contact form is inert until all three are set for the build: the
    /// fallback ids only name placeholder resources, and without a public key
    /// every send fails with `EmailError::NotConfigured`.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let or_default = |v: Option<&str>, default: &str| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            service_id: or_default(service_id, DEFAULT_SERVICE_ID),
            template_id: or_default(template_id, DEFAULT_TEMPLATE_ID),
            public_key: public_key.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    /// A public key is the one identifier without a usable default.
    pub fn is_configured(&self) -> bool {
        !self.public_key.is_empty()
    }
}

/// Year the site was built, used for the footer copyright line.
pub fn build_year() -> i32 {
    parse_build_year(env!("BUILD_TIME")).unwrap_or(2025)
}

fn parse_build_year(raw: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emailjs_defaults() {
        let config = EmailJsConfig::from_values(None, Some("  "), None);
        assert_eq!(config.service_id, "service_portfolio");
        assert_eq!(config.template_id, "template_contact");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_emailjs_overrides() {
        let config =
            EmailJsConfig::from_values(Some("service_x"), Some("template_y"), Some(" key123 "));
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "key123");
        assert!(config.is_configured());
    }

    #[test]
    fn test_build_year() {
        assert_eq!(parse_build_year("2025-04-23T10:00:00+00:00"), Some(2025));
        assert_eq!(parse_build_year("not a date"), None);
        assert!(build_year() >= 2025);
    }
}
