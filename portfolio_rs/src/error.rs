//! Error types shared by the core and the browser shell.
//!
//! None of these are fatal: every variant has a degraded path (route
//! navigation, manual copy, direct email) that the caller falls back to.

use thiserror::Error;

/// Recoverable failures surfaced by navigation, contact and config code.
#[derive(Error, Debug)]
pub enum SiteError {
    /// The DOM anchor for a section was not found (content not rendered yet,
    /// or the item belongs to a different page).
    #[error("section anchor not found: #{0}")]
    SectionMissing(String),

    /// A browser API call returned an exception.
    #[error("browser call failed: {0}")]
    Browser(String),

    /// Writing to the clipboard was rejected or is unavailable.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// `window.open` returned no browsing context.
    #[error("popup blocked while opening {0}")]
    PopupBlocked(String),

    /// The embedded site configuration could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SiteError {
    pub fn browser(detail: impl Into<String>) -> Self {
        SiteError::Browser(detail.into())
    }

    pub fn clipboard(detail: impl Into<String>) -> Self {
        SiteError::Clipboard(detail.into())
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_target() {
        let err = SiteError::SectionMissing("portfolio".into());
        assert_eq!(err.to_string(), "section anchor not found: #portfolio");

        let err = SiteError::PopupBlocked("mailto:someone@example.com".into());
        assert!(err.to_string().contains("mailto:someone@example.com"));
    }

    #[test]
    fn config_errors_convert_with_question_mark() {
        fn parse(raw: &str) -> Result<toml::Table> {
            Ok(toml::from_str(raw)?)
        }

        let err = parse("[navigation\nbar_height = ").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
