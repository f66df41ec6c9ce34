//! Inline SVG pictograms.
//!
//! Simple 24x24 stroke icons, one path string per [`IconKind`].

use leptos::prelude::*;
use portfolio::content::IconKind;

/// Renders the stroke icon for `kind`.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Mail size="18" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::BarChart => ICON_BAR_CHART,
        IconKind::Brain => ICON_BRAIN,
        IconKind::Shield => ICON_SHIELD,
        IconKind::Calculator => ICON_CALCULATOR,
        IconKind::Database => ICON_DATABASE,
        IconKind::Zap => ICON_ZAP,
        IconKind::Target => ICON_TARGET,
        IconKind::TrendingUp => ICON_TRENDING_UP,
        IconKind::Users => ICON_USERS,
        IconKind::PieChart => ICON_PIE_CHART,
        IconKind::Dollar => ICON_DOLLAR,
        IconKind::Globe => ICON_GLOBE,
        IconKind::GraduationCap => ICON_GRADUATION_CAP,
        IconKind::Mail => ICON_MAIL,
        IconKind::Phone => ICON_PHONE,
        IconKind::MapPin => ICON_MAP_PIN,
        IconKind::Clock => ICON_CLOCK,
        IconKind::Calendar => ICON_CALENDAR,
        IconKind::Linkedin => ICON_LINKEDIN,
        IconKind::Github => ICON_GITHUB,
        IconKind::BookOpen => ICON_BOOK_OPEN,
    }
}

// =============================================================================
// Path data (24x24, stroke)
// =============================================================================

pub const ICON_BAR_CHART: &str = "M3 3v18h18M8 17v-5M13 17V8M18 17v-9";

pub const ICON_BRAIN: &str = "M12 5a3 3 0 0 0-6 0 3 3 0 0 0-2 5 3 3 0 0 0 2 5 3 3 0 0 0 6 0zM12 5a3 3 0 0 1 6 0 3 3 0 0 1 2 5 3 3 0 0 1-2 5 3 3 0 0 1-6 0M12 5v15";

pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

pub const ICON_CALCULATOR: &str = "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM8 6h8v4H8zM8 14h.01M12 14h.01M16 14h.01M8 18h.01M12 18h.01M16 18h.01";

pub const ICON_DATABASE: &str = "M4 5c0-1.7 3.6-3 8-3s8 1.3 8 3-3.6 3-8 3-8-1.3-8-3zM4 5v14c0 1.7 3.6 3 8 3s8-1.3 8-3V5M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3";

pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

pub const ICON_TARGET: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";

pub const ICON_TRENDING_UP: &str = "M22 7 13.5 15.5l-5-5L2 17M16 7h6v6";

pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8";

pub const ICON_PIE_CHART: &str = "M21.2 15.9A10 10 0 1 1 8 2.8M22 12A10 10 0 0 0 12 2v10z";

pub const ICON_DOLLAR: &str = "M12 1v22M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6";

pub const ICON_GLOBE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15 15 0 0 1 4 10 15 15 0 0 1-4 10 15 15 0 0 1-4-10 15 15 0 0 1 4-10z";

pub const ICON_GRADUATION_CAP: &str = "M22 10 12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5M22 10v6";

pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";

pub const ICON_PHONE: &str = "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z";

pub const ICON_MAP_PIN: &str = "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z";

pub const ICON_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";

pub const ICON_CALENDAR: &str = "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM16 2v4M8 2v4M3 10h18";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z";

pub const ICON_GITHUB: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.9a3.4 3.4 0 0 0-.9-2.6c3.1-.4 6.4-1.5 6.4-7A5.4 5.4 0 0 0 20 4.8 5 5 0 0 0 19.9 1S18.7.7 16 2.5a13.4 13.4 0 0 0-7 0C6.3.7 5.1 1 5.1 1A5 5 0 0 0 5 4.8a5.4 5.4 0 0 0-1.5 3.7c0 5.4 3.3 6.6 6.4 7a3.4 3.4 0 0 0-.9 2.6V22";

pub const ICON_BOOK_OPEN: &str = "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_content_icon_has_a_path() {
        use portfolio::content::{about, blog, contact, home, portfolio as projects, services};

        let kinds = home::STATS
            .iter()
            .map(|s| s.icon)
            .chain(home::FEATURED_SERVICES.iter().map(|s| s.icon))
            .chain(about::PILLARS.iter().map(|p| p.icon))
            .chain(services::MAIN_SERVICES.iter().map(|s| s.icon))
            .chain(services::ADD_ONS.iter().map(|s| s.icon))
            .chain(projects::PROJECTS.iter().map(|p| p.icon))
            .chain(blog::FEATURED_ARTICLES.iter().map(|a| a.icon))
            .chain(contact::DETAILS.iter().map(|d| d.icon));

        for kind in kinds {
            let path = icon_path(kind);
            assert!(path.starts_with('M'), "{kind:?}");
        }
    }
}
