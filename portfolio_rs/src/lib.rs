//! # portfolio
//!
//! **Browser-independent core** of the Phinidy George fintech CPA portfolio
//! site. Everything here compiles and tests on a native target; the Leptos
//! shell in `portfolio-site` only adapts it to the DOM.
//!
//! ## Features
//!
//! - **Section tracking** - Resolve the section in view from a scroll offset
//!   and drive click navigation with an optimistic active-id update
//! - **Routes** - Map URL paths onto main-page sections and decide which
//!   navigation item is highlighted
//! - **Contact flow** - Email checks, `mailto:` composition, calendar links
//!   and the small state machines behind the contact section
//! - **Content** - Static tables for every page section
//! - **Config** - `site.toml` embedded at compile time, with defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{SectionId, SectionLayout, SectionOffset, SectionTracker};
//!
//! let layout: SectionLayout = [
//!     SectionOffset::new(SectionId::HOME, 0.0),
//!     SectionOffset::new(SectionId::ABOUT, 800.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut tracker = SectionTracker::new(100.0, 4.0);
//! tracker.mount(&layout, "/");
//! assert_eq!(tracker.on_scroll(&layout, 750.0), Some(SectionId::ABOUT));
//! ```
//!
//! ## Composing a contact email
//!
//! ```rust
//! use portfolio::contact::ContactForm;
//!
//! let form = ContactForm {
//!     name: "Jane".into(),
//!     email: "jane@firm.com".into(),
//!     message: "Hello".into(),
//!     ..ContactForm::default()
//! };
//! let uri = form.to_mailto("owner@example.com").unwrap();
//! assert!(uri.starts_with("mailto:owner@example.com?subject=Contact%20Form"));
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod routes;
pub mod section;
pub mod tracker;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use routes::{is_item_active, is_section_page, section_for_path};
pub use section::{
    NAV_ITEMS, NavigationItem, SECTIONS, Section, SectionId, SectionLayout, SectionOffset,
};
pub use tracker::{
    NavOutcome, NavigationHost, ScrollThrottle, SectionTracker, resolve_active_section,
};
