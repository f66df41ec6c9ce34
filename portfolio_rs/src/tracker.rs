//! Scroll-driven active section tracking.
//!
//! [`resolve_active_section`] is the pure mapping from a scroll offset to the
//! section in view. [`SectionTracker`] owns the one piece of mutable UI state
//! (the active id) and applies the mount / scroll / click / unmount
//! transitions around it. The browser shell talks to the document through
//! [`NavigationHost`] so every transition can be exercised without a DOM.

use crate::error::{Result, SiteError};
use crate::routes::section_for_path;
use crate::section::{NavigationItem, SectionId, SectionLayout, SectionOffset};

/// Returns the last section whose top has been scrolled past.
///
/// `nav_bar_height` is a lookahead: a section counts as entered once its top
/// reaches the bottom edge of the sticky navigation bar. Sections are scanned
/// bottom-up, so when two share an offset the later one wins.
///
/// `None` means no section qualifies (the viewport is above the first one);
/// callers keep their previous id in that case.
pub fn resolve_active_section(
    sections: &[SectionOffset],
    scroll_offset: f64,
    nav_bar_height: f64,
) -> Option<SectionId> {
    let effective_offset = scroll_offset + nav_bar_height;
    sections
        .iter()
        .rev()
        .find(|section| section.top <= effective_offset)
        .map(|section| section.id)
}

/// Rate limit for re-measuring section offsets while scrolling.
///
/// Accepts an offset only when it moved by at least `threshold` pixels since
/// the last accepted one. The first offset after a reset is always accepted.
/// Resolution never goes through the throttle, only DOM measurement does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThrottle {
    threshold: f64,
    last: Option<f64>,
}

impl ScrollThrottle {
    pub fn new(threshold: f64) -> Self {
        ScrollThrottle {
            threshold: threshold.max(0.0),
            last: None,
        }
    }

    pub fn accept(&mut self, offset: f64) -> bool {
        match self.last {
            Some(last) if (offset - last).abs() < self.threshold => false,
            _ => {
                self.last = Some(offset);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Document operations needed to carry out a navigation click.
pub trait NavigationHost {
    /// Whether the anchor for `id` is currently rendered.
    fn section_present(&self, id: SectionId) -> bool;

    /// Smoothly scrolls the anchor for `id` to the top of the viewport.
    fn scroll_to_section(&self, id: SectionId) -> Result<()>;

    /// Replaces the visible URL path without adding a history entry.
    fn replace_path(&self, path: &str) -> Result<()>;

    /// Performs a full route change to `path`.
    fn change_route(&self, path: &str);
}

/// What a navigation click ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Scrolled within the current page; the active id is now `section`.
    Scrolled { section: SectionId },
    /// Left the page through the router.
    Routed { path: &'static str },
}

/// Owner of the active section for one mounted navigation component.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    nav_bar_height: f64,
    throttle: ScrollThrottle,
    active: Option<SectionId>,
    mounted: bool,
}

impl SectionTracker {
    pub fn new(nav_bar_height: f64, scroll_threshold: f64) -> Self {
        SectionTracker {
            nav_bar_height,
            throttle: ScrollThrottle::new(scroll_threshold),
            active: None,
            mounted: false,
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Starts tracking on a page whose sections are described by `layout`.
    ///
    /// The initial id is the section named by `path` when that section is
    /// present, otherwise the first section of the layout. Returns the
    /// initial id (`None` only for an empty layout).
    pub fn mount(&mut self, layout: &SectionLayout, path: &str) -> Option<SectionId> {
        self.mounted = true;
        self.throttle.reset();
        self.active = section_for_path(path)
            .filter(|id| layout.contains(*id))
            .or_else(|| layout.first());
        tracing::debug!(active = ?self.active, path, "section tracker mounted");
        self.active
    }

    /// Stops tracking. Scroll events delivered afterwards are ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!("section tracker unmounted");
        }
        self.mounted = false;
        self.active = None;
        self.throttle.reset();
    }

    /// Whether the section offsets should be measured again before handling
    /// a scroll to `scroll_offset`. Always true for the first scroll after
    /// mounting.
    pub fn needs_measure(&mut self, scroll_offset: f64) -> bool {
        self.mounted && self.throttle.accept(scroll_offset)
    }

    /// Handles one scroll event. Returns the new id only on a transition.
    ///
    /// Every event is resolved, so the id at rest always matches
    /// [`resolve_active_section`] for the final offset.
    pub fn on_scroll(&mut self, layout: &SectionLayout, scroll_offset: f64) -> Option<SectionId> {
        if !self.mounted {
            return None;
        }
        let resolved =
            resolve_active_section(layout.offsets(), scroll_offset, self.nav_bar_height)?;
        self.transition(resolved)
    }

    /// Handles a click on a navigation item.
    ///
    /// When the target section is on the current page this scrolls to it,
    /// switches the active id right away and rewrites the URL in place.
    /// Otherwise, or when scrolling fails, it falls back to a route change.
    pub fn navigate_to_section<H: NavigationHost + ?Sized>(
        &mut self,
        item: &NavigationItem,
        host: &H,
    ) -> NavOutcome {
        if self.mounted && host.section_present(item.section) {
            match host.scroll_to_section(item.section) {
                Ok(()) => {
                    self.transition(item.section);
                    if let Err(err) = host.replace_path(item.href) {
                        tracing::warn!(%err, href = item.href, "could not rewrite URL after scroll");
                    }
                    return NavOutcome::Scrolled {
                        section: item.section,
                    };
                }
                Err(err) => {
                    tracing::warn!(%err, "scroll failed, falling back to route navigation");
                }
            }
        } else if self.mounted {
            let err = SiteError::SectionMissing(item.section.to_string());
            tracing::warn!(%err, href = item.href, "falling back to route navigation");
        }

        tracing::info!(href = item.href, "route navigation");
        host.change_route(item.href);
        NavOutcome::Routed { path: item.href }
    }

    fn transition(&mut self, next: SectionId) -> Option<SectionId> {
        if self.active == Some(next) {
            return None;
        }
        tracing::debug!(from = ?self.active, to = %next, "active section changed");
        self.active = Some(next);
        Some(next)
    }
}
