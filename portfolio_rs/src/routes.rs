//! Route paths and how they map onto sections.
//!
//! Every navigation href (plus `/home`) renders the same long main page, so
//! on those routes highlighting follows the scroll position. Anything else
//! (legal pages, not-found) uses plain route matching.

use crate::section::{NAV_ITEMS, NavigationItem, SectionId};

/// Alias kept for links that name the first section explicitly.
const HOME_ALIAS: &str = "/home";

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// The section a route path names, if it is one of the main-page routes.
pub fn section_for_path(path: &str) -> Option<SectionId> {
    let path = normalize(path);
    if path == HOME_ALIAS {
        return Some(SectionId::HOME);
    }
    NAV_ITEMS
        .iter()
        .find(|item| item.href == path)
        .map(|item| item.section)
}

/// Whether `path` renders the main page with in-page sections.
pub fn is_section_page(path: &str) -> bool {
    section_for_path(path).is_some()
}

/// Highlight rule for a navigation item.
///
/// On section pages the scroll-derived `active` id decides. Elsewhere `/` is
/// only active on `/` and other items are active for their whole subtree.
pub fn is_item_active(item: &NavigationItem, path: &str, active: Option<SectionId>) -> bool {
    if is_section_page(path) {
        return active == Some(item.section);
    }
    let path = normalize(path);
    if item.href == "/" {
        return path == "/";
    }
    path.starts_with(item.href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{NAV_ITEMS, nav_item_for};

    #[test]
    fn main_page_routes_name_their_section() {
        assert_eq!(section_for_path("/"), Some(SectionId::HOME));
        assert_eq!(section_for_path("/home"), Some(SectionId::HOME));
        assert_eq!(section_for_path("/about"), Some(SectionId::ABOUT));
        assert_eq!(section_for_path("/contact/"), Some(SectionId::CONTACT));
        assert_eq!(section_for_path(""), Some(SectionId::HOME));
    }

    #[test]
    fn other_routes_are_not_section_pages() {
        assert!(!is_section_page("/privacy"));
        assert!(!is_section_page("/terms"));
        assert!(!is_section_page("/blog/archive"));
        assert!(is_section_page("/portfolio"));
    }

    #[test]
    fn section_pages_follow_the_active_id() {
        let about = nav_item_for(SectionId::ABOUT).unwrap();
        let home = nav_item_for(SectionId::HOME).unwrap();

        assert!(is_item_active(about, "/", Some(SectionId::ABOUT)));
        assert!(!is_item_active(home, "/", Some(SectionId::ABOUT)));
        // URL says /about but the visitor scrolled back up
        assert!(is_item_active(home, "/about", Some(SectionId::HOME)));
        assert!(!is_item_active(about, "/about", None));
    }

    #[test]
    fn other_pages_use_route_matching() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| is_item_active(item, "/privacy", Some(SectionId::HOME)))
            .collect();
        assert!(active.is_empty());

        let blog = nav_item_for(SectionId::BLOG).unwrap();
        assert!(is_item_active(blog, "/blog/archive", None));
        let home = nav_item_for(SectionId::HOME).unwrap();
        assert!(!is_item_active(home, "/blog/archive", None));
    }
}
