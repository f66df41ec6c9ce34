//! Site configuration.
//!
//! Deserialized from `site.toml`, which is embedded at compile time. Every
//! field has a default, so partial files work. The site shell logs a broken
//! file and carries on with [`SiteConfig::default`].

use crate::error::Result;
use serde::Deserialize;

pub const SITE_TOML: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub contact: ContactConfig,
    pub logging: LoggingConfig,
}

/// Scroll tracking knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Lookahead added to the scroll offset, in CSS pixels. Matches the
    /// sticky bar plus some breathing room.
    pub bar_height: f64,
    /// Minimum scroll distance before the active section is recomputed.
    pub scroll_threshold_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            bar_height: 100.0,
            scroll_threshold_px: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub phone: String,
    /// How long inline status messages stay visible.
    pub status_dismiss_ms: u64,
    /// How long "copied" feedback stays on a copy button.
    pub copy_feedback_ms: u64,
    pub calendar: CalendarConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            recipient: "phinidygeorge01@gmail.com".into(),
            phone: "+254 757 390 844".into(),
            status_dismiss_ms: 5000,
            copy_feedback_ms: 2000,
            calendar: CalendarConfig::default(),
        }
    }
}

/// Defaults for the consultation event pre-filled in Google Calendar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub title: String,
    pub details: String,
    pub location: String,
    /// Local hour of the proposed slot on the next day.
    pub start_hour: u32,
    pub duration_minutes: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            title: "Consultation with Phinidy George".into(),
            details: "30-minute discovery call to discuss your project needs and how I can help \
                      with fintech CPA and data science solutions."
                .into(),
            location: "Video Call (Link to be provided)".into(),
            start_hour: 10,
            duration_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `portfolio=debug,info`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// The configuration shipped inside the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(SITE_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.navigation.bar_height, 100.0);
        assert_eq!(config.navigation.scroll_threshold_px, 4.0);
        assert_eq!(config.contact.status_dismiss_ms, 5000);
        assert_eq!(config.contact.calendar.start_hour, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::embedded().expect("embedded site.toml");
        assert_eq!(config.contact.recipient, "phinidygeorge01@gmail.com");
        assert_eq!(config.contact.calendar.duration_minutes, 30);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[navigation]
bar_height = 64.0

[contact.calendar]
start_hour = 14
"#,
        )
        .expect("partial config");

        assert_eq!(config.navigation.bar_height, 64.0);
        assert_eq!(config.navigation.scroll_threshold_px, 4.0);
        assert_eq!(config.contact.calendar.start_hour, 14);
        assert_eq!(config.contact.calendar.duration_minutes, 30);
        assert_eq!(config.contact.recipient, ContactConfig::default().recipient);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(SiteConfig::from_toml_str("navigation = 3").is_err());
    }
}
