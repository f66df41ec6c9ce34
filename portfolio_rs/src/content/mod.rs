//! Static page content.
//!
//! Plain records rendered by the presentation components. The navigation
//! core never looks at these; it only cares that each page section renders
//! an anchor with its [`SectionId`](crate::section::SectionId).

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

/// Pictograms used next to content items. The site maps each to an inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    BarChart,
    Brain,
    Shield,
    Calculator,
    Database,
    Zap,
    Target,
    TrendingUp,
    Users,
    PieChart,
    Dollar,
    Globe,
    GraduationCap,
    Mail,
    Phone,
    MapPin,
    Clock,
    Calendar,
    Linkedin,
    Github,
    BookOpen,
}

/// Color accent applied to an item (maps to a CSS modifier class).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Success,
    Warning,
    Info,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Success => "accent-success",
            Accent::Warning => "accent-warning",
            Accent::Info => "accent-info",
        }
    }
}

/// An outbound link to a profile on another site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/phinidy-george",
        icon: IconKind::Linkedin,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/BigTime5",
        icon: IconKind::Github,
    },
    SocialLink {
        label: "Medium",
        href: "https://medium.com/@phinidy.george",
        icon: IconKind::BookOpen,
    },
];

pub const BRAND_NAME: &str = "Phinidy George";

pub const BRAND_BLURB: &str = "Bridging the gap between finance and technology through innovative CPA \
services and cutting-edge data science solutions for the fintech industry.";

/// Every external URL the content tables link to.
pub fn external_links() -> impl Iterator<Item = &'static str> {
    SOCIAL_LINKS
        .iter()
        .map(|link| link.href)
        .chain(
            portfolio::PROJECTS
                .iter()
                .flat_map(|p| p.live_link.into_iter().chain(p.source_link)),
        )
        .chain(blog::FEATURED_ARTICLES.iter().map(|a| a.url))
        .chain(std::iter::once(blog::MEDIUM_PROFILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_are_https() {
        let mut count = 0;
        for href in external_links() {
            assert!(href.starts_with("https://"), "{href}");
            count += 1;
        }
        assert!(count >= 10);
    }

    #[test]
    fn accents_map_to_distinct_classes() {
        let classes =
            [Accent::Primary, Accent::Success, Accent::Warning, Accent::Info].map(Accent::class);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
