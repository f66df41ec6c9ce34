//! Active-section state shared by the navigation bar and in-page links.
//!
//! One [`SectionNav`] is provided per mounted layout. The navigation bar owns
//! the scroll subscription; any component can trigger a section link through
//! [`use_section_link`].

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use portfolio::{
    NavOutcome, NavigationItem, SectionId, SectionLayout, SectionTracker, SiteConfig,
    is_section_page,
};

use crate::dom::{self, BrowserHost};

#[derive(Clone, Copy)]
pub struct SectionNav {
    tracker: StoredValue<SectionTracker>,
    layout: StoredValue<SectionLayout>,
    frame_pending: StoredValue<bool>,
    active: RwSignal<Option<SectionId>>,
    menu_open: RwSignal<bool>,
}

impl SectionNav {
    pub fn provide(config: &SiteConfig) -> Self {
        let nav = SectionNav {
            tracker: StoredValue::new(SectionTracker::new(
                config.navigation.bar_height,
                config.navigation.scroll_threshold_px,
            )),
            layout: StoredValue::new(SectionLayout::default()),
            frame_pending: StoredValue::new(false),
            active: RwSignal::new(None),
            menu_open: RwSignal::new(false),
        };
        provide_context(nav);
        nav
    }

    pub fn expect() -> Self {
        expect_context::<SectionNav>()
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active.get()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    fn remount(&self, path: &str) {
        let layout = dom::measure_layout();
        let initial = self
            .tracker
            .try_update_value(|tracker| tracker.mount(&layout, path))
            .flatten();
        self.active.set(initial);
        let first = layout.first();
        self.layout.set_value(layout);

        // deep link to a section further down the page
        if let Some(id) = initial.filter(|id| Some(*id) != first) {
            if let Err(e) = dom::scroll_to_section(id) {
                tracing::warn!(%e, "could not scroll to deep-linked section");
            }
        }
    }

    fn unmount(&self) {
        self.tracker.update_value(SectionTracker::unmount);
        self.layout.set_value(SectionLayout::default());
        self.active.set(None);
    }

    /// Coalesces scroll events so the active section is resolved at most
    /// once per animation frame, always against the latest offset.
    fn schedule_scroll(&self) {
        if self.frame_pending.get_value() {
            return;
        }
        self.frame_pending.set_value(true);
        let nav = *self;
        request_animation_frame(move || {
            // the layout may have been disposed before the frame ran
            if nav.frame_pending.try_update_value(|pending| *pending = false).is_some() {
                nav.on_scroll();
            }
        });
    }

    fn on_scroll(&self) {
        let offset = dom::scroll_offset();
        let remeasure = self
            .tracker
            .try_update_value(|tracker| tracker.needs_measure(offset))
            .unwrap_or(false);
        if remeasure {
            self.layout.set_value(dom::measure_layout());
        }
        let changed = self
            .layout
            .try_with_value(|layout| {
                self.tracker.try_update_value(|tracker| tracker.on_scroll(layout, offset))
            })
            .flatten()
            .flatten();
        if let Some(next) = changed {
            self.active.set(Some(next));
        }
    }

    fn go<H: portfolio::NavigationHost>(&self, item: &'static NavigationItem, host: &H) {
        self.menu_open.set(false);
        let outcome = self
            .tracker
            .try_update_value(|tracker| tracker.navigate_to_section(item, host));
        if let Some(NavOutcome::Scrolled { section }) = outcome {
            self.active.set(Some(section));
        }
    }
}

/// Keeps the tracker mounted while the current route renders the main page.
///
/// Re-runs on every route change: the previous scroll listener is removed and
/// the tracker is remounted against the freshly rendered sections.
pub fn track_sections(nav: SectionNav) {
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        nav.unmount();
        if !is_section_page(&path) {
            return;
        }

        // sections render in the same tick; measure once they are laid out
        request_animation_frame(move || {
            if pathname.get_untracked() == path {
                nav.remount(&path);
            }
        });

        let handle = window_event_listener(ev::scroll, move |_| nav.schedule_scroll());
        on_cleanup(move || handle.remove());
    });
}

/// Returns a click handler that scrolls to (or routes to) a navigation item.
pub fn use_section_link() -> impl Fn(&'static NavigationItem) + Clone + 'static {
    let nav = SectionNav::expect();
    let navigate = use_navigate();
    move |item: &'static NavigationItem| {
        let host = BrowserHost::new(|path: &str| navigate(path, Default::default()));
        nav.go(item, &host);
    }
}
