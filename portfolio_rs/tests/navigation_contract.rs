//! End-to-end checks of the navigation core through the public API.

use portfolio::section::{contact_item, home_item, nav_item_for};
use portfolio::{
    NAV_ITEMS, NavOutcome, NavigationHost, Result, SECTIONS, SectionId, SectionLayout,
    SectionTracker, SiteError, is_item_active,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

/// A document with every section 800px tall.
fn full_page() -> SectionLayout {
    SectionLayout::measure(SECTIONS, |id| {
        SECTIONS
            .iter()
            .position(|section| section.id == id)
            .map(|index| index as f64 * 800.0)
    })
}

/// Records what the tracker asked the document to do.
struct Document {
    present: Vec<SectionId>,
    url: RefCell<String>,
    log: RefCell<Vec<String>>,
}

impl Document {
    fn new(layout: &SectionLayout, url: &str) -> Self {
        Document {
            present: layout.ids().collect(),
            url: RefCell::new(url.to_string()),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl NavigationHost for Document {
    fn section_present(&self, id: SectionId) -> bool {
        self.present.contains(&id)
    }

    fn scroll_to_section(&self, id: SectionId) -> Result<()> {
        if !self.section_present(id) {
            return Err(SiteError::SectionMissing(id.to_string()));
        }
        self.log.borrow_mut().push(format!("scroll {id}"));
        Ok(())
    }

    fn replace_path(&self, path: &str) -> Result<()> {
        *self.url.borrow_mut() = path.to_string();
        Ok(())
    }

    fn change_route(&self, path: &str) {
        self.log.borrow_mut().push(format!("route {path}"));
        *self.url.borrow_mut() = path.to_string();
    }
}

fn highlighted(path: &str, active: Option<SectionId>) -> Vec<&'static str> {
    NAV_ITEMS
        .iter()
        .filter(|item| is_item_active(item, path, active))
        .map(|item| item.label)
        .collect()
}

#[test]
fn scrolling_through_the_page_highlights_one_item_at_a_time() {
    let layout = full_page();
    let mut tracker = SectionTracker::new(100.0, 4.0);
    tracker.mount(&layout, "/");

    let mut seen = vec![tracker.active().unwrap()];
    let mut offset = 0.0;
    while offset < 5000.0 {
        offset += 25.0;
        if let Some(next) = tracker.on_scroll(&layout, offset) {
            seen.push(next);
        }
        assert_eq!(highlighted("/", tracker.active()).len(), 1);
    }

    let expected: Vec<_> = SECTIONS.iter().map(|section| section.id).collect();
    assert_eq!(seen, expected);
}

#[test]
fn click_then_scroll_back_up() {
    let layout = full_page();
    let doc = Document::new(&layout, "/");
    let mut tracker = SectionTracker::new(100.0, 4.0);
    tracker.mount(&layout, "/");

    let outcome = tracker.navigate_to_section(contact_item(), &doc);
    assert_eq!(
        outcome,
        NavOutcome::Scrolled {
            section: SectionId::CONTACT
        }
    );
    assert_eq!(*doc.url.borrow(), "/contact");
    assert_eq!(highlighted("/contact", tracker.active()), ["Contact"]);

    // the smooth scroll lands, then the visitor scrolls back to the top
    tracker.on_scroll(&layout, 4000.0);
    tracker.on_scroll(&layout, 0.0);
    assert_eq!(tracker.active(), Some(SectionId::HOME));
    assert_eq!(highlighted("/contact", tracker.active()), ["Home"]);

    tracker.navigate_to_section(home_item(), &doc);
    assert_eq!(*doc.url.borrow(), "/");
    assert_eq!(*doc.log.borrow(), ["scroll contact", "scroll home"]);
}

#[test]
fn deep_link_mount_then_missing_section_routes_away() {
    let layout: SectionLayout = full_page()
        .offsets()
        .iter()
        .copied()
        .filter(|offset| offset.id != SectionId::BLOG)
        .collect();
    let doc = Document::new(&layout, "/services");
    let mut tracker = SectionTracker::new(100.0, 4.0);

    assert_eq!(tracker.mount(&layout, "/services"), Some(SectionId::SERVICES));

    let blog = nav_item_for(SectionId::BLOG).unwrap();
    let outcome = tracker.navigate_to_section(blog, &doc);

    assert_eq!(outcome, NavOutcome::Routed { path: "/blog" });
    assert_eq!(tracker.active(), Some(SectionId::SERVICES));
    assert_eq!(*doc.log.borrow(), ["route /blog"]);
}

#[test]
fn legal_pages_use_route_highlighting() {
    let mut tracker = SectionTracker::new(100.0, 4.0);
    assert_eq!(tracker.mount(&SectionLayout::default(), "/privacy"), None);
    assert!(highlighted("/privacy", tracker.active()).is_empty());

    // leaving the main page tears the tracker down
    tracker.unmount();
    assert_eq!(tracker.on_scroll(&full_page(), 900.0), None);
    assert_eq!(tracker.active(), None);
}
