//! Page sections and the navigation items that point at them.
//!
//! The main page is one long document made of named anchor regions. Their
//! order is fixed (top to bottom) and their vertical offsets are measured by
//! the browser shell on demand, never stored.

use std::fmt;

/// Identifier of a section anchor (the element `id` in the document).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SectionId(&'static str);

impl SectionId {
    pub const HOME: SectionId = SectionId("home");
    pub const ABOUT: SectionId = SectionId("about");
    pub const SERVICES: SectionId = SectionId("services");
    pub const PORTFOLIO: SectionId = SectionId("portfolio");
    pub const BLOG: SectionId = SectionId("blog");
    pub const CONTACT: SectionId = SectionId("contact");

    pub const fn new(id: &'static str) -> Self {
        SectionId(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named content region of the main page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// Sections of the main page, in document order.
pub const SECTIONS: &[Section] = &[
    Section {
        id: SectionId::HOME,
        label: "Home",
    },
    Section {
        id: SectionId::ABOUT,
        label: "About",
    },
    Section {
        id: SectionId::SERVICES,
        label: "Services",
    },
    Section {
        id: SectionId::PORTFOLIO,
        label: "Portfolio",
    },
    Section {
        id: SectionId::BLOG,
        label: "Blog",
    },
    Section {
        id: SectionId::CONTACT,
        label: "Contact",
    },
];

/// A link in the navigation bar: a route path paired with the section it
/// scrolls to when that section is on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub href: &'static str,
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        href: "/",
        label: "Home",
        section: SectionId::HOME,
    },
    NavigationItem {
        href: "/about",
        label: "About",
        section: SectionId::ABOUT,
    },
    NavigationItem {
        href: "/services",
        label: "Services",
        section: SectionId::SERVICES,
    },
    NavigationItem {
        href: "/portfolio",
        label: "Portfolio",
        section: SectionId::PORTFOLIO,
    },
    NavigationItem {
        href: "/blog",
        label: "Blog",
        section: SectionId::BLOG,
    },
    NavigationItem {
        href: "/contact",
        label: "Contact",
        section: SectionId::CONTACT,
    },
];

/// The navigation item that targets `section`.
pub fn nav_item_for(section: SectionId) -> Option<&'static NavigationItem> {
    NAV_ITEMS.iter().find(|item| item.section == section)
}

/// The item behind the brand logo.
pub fn home_item() -> &'static NavigationItem {
    &NAV_ITEMS[0]
}

/// The item behind every "Get Started" / "Schedule Consultation" button.
pub fn contact_item() -> &'static NavigationItem {
    &NAV_ITEMS[NAV_ITEMS.len() - 1]
}

/// Measured start offset of a section that is present in the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: SectionId,
    pub top: f64,
}

impl SectionOffset {
    pub const fn new(id: SectionId, top: f64) -> Self {
        SectionOffset { id, top }
    }
}

/// Ordered offsets of the sections currently in the document.
///
/// Built by measuring the DOM; sections whose anchor is missing are simply
/// absent from the layout, so anything drawn from it is never stale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionLayout {
    offsets: Vec<SectionOffset>,
}

impl SectionLayout {
    pub fn new(offsets: Vec<SectionOffset>) -> Self {
        SectionLayout { offsets }
    }

    /// Measures every section in `sections` with `measure`, keeping document
    /// order and skipping sections whose anchor is not present.
    pub fn measure<F>(sections: &[Section], mut measure: F) -> Self
    where
        F: FnMut(SectionId) -> Option<f64>,
    {
        let offsets = sections
            .iter()
            .filter_map(|section| {
                measure(section.id).map(|top| SectionOffset::new(section.id, top))
            })
            .collect();
        SectionLayout { offsets }
    }

    pub fn offsets(&self) -> &[SectionOffset] {
        &self.offsets
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.offsets.iter().any(|offset| offset.id == id)
    }

    pub fn first(&self) -> Option<SectionId> {
        self.offsets.first().map(|offset| offset.id)
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.offsets.iter().map(|offset| offset.id)
    }
}

impl FromIterator<SectionOffset> for SectionLayout {
    fn from_iter<I: IntoIterator<Item = SectionOffset>>(iter: I) -> Self {
        SectionLayout::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_section_has_exactly_one_nav_item() {
        for section in SECTIONS {
            let items: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|item| item.section == section.id)
                .collect();
            assert_eq!(items.len(), 1, "section {} should have one nav item", section.id);
            assert_eq!(items[0].label, section.label);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn logo_and_cta_targets() {
        assert_eq!(home_item().section, SectionId::HOME);
        assert_eq!(home_item().href, "/");
        assert_eq!(contact_item().section, SectionId::CONTACT);
        assert_eq!(contact_item().href, "/contact");
    }

    #[test]
    fn measure_skips_missing_anchors_and_keeps_order() {
        let layout = SectionLayout::measure(SECTIONS, |id| match id.as_str() {
            "home" => Some(0.0),
            "services" => Some(1600.0),
            "contact" => Some(2400.0),
            _ => None,
        });

        let ids: Vec<_> = layout.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["home", "services", "contact"]);
        assert!(!layout.contains(SectionId::ABOUT));
        assert_eq!(layout.first(), Some(SectionId::HOME));
    }
}
