//! Browser glue: DOM measurement, scrolling, history, popups and clipboard.
//!
//! Everything returns [`portfolio::Result`] so callers pick the fallback
//! (route change, details dialog, manual copy) instead of panicking.

use portfolio::{NavigationHost, Result, SECTIONS, SectionId, SectionLayout, SiteError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

fn browser_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::browser("no global window"))
}

/// Best-effort message out of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn section_element(id: SectionId) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id.as_str())?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Measures the start offset of every section currently in the document.
pub fn measure_layout() -> SectionLayout {
    SectionLayout::measure(SECTIONS, |id| {
        section_element(id).map(|element| f64::from(element.offset_top()))
    })
}

/// Current vertical scroll offset of the page, `0.0` if unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_section(id: SectionId) -> Result<()> {
    let element = section_element(id).ok_or_else(|| SiteError::SectionMissing(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// `history.replaceState` with a new path; no entry is pushed.
pub fn replace_path(path: &str) -> Result<()> {
    browser_window()?
        .history()
        .map_err(|e| SiteError::browser(js_message(&e)))?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| SiteError::browser(js_message(&e)))
}

/// Opens `url` in a new browsing context.
pub fn open_external(url: &str) -> Result<()> {
    match browser_window()?.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(SiteError::PopupBlocked(url.to_string())),
        Err(e) => Err(SiteError::browser(js_message(&e))),
    }
}

pub async fn copy_text(text: &str) -> Result<()> {
    let clipboard = browser_window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| SiteError::clipboard(js_message(&e)))
}

/// [`NavigationHost`] backed by the live document and the router.
pub struct BrowserHost<F> {
    change_route: F,
}

impl<F: Fn(&str)> BrowserHost<F> {
    pub fn new(change_route: F) -> Self {
        BrowserHost { change_route }
    }
}

impl<F: Fn(&str)> NavigationHost for BrowserHost<F> {
    fn section_present(&self, id: SectionId) -> bool {
        section_element(id).is_some()
    }

    fn scroll_to_section(&self, id: SectionId) -> Result<()> {
        scroll_to_section(id)
    }

    fn replace_path(&self, path: &str) -> Result<()> {
        replace_path(path)
    }

    fn change_route(&self, path: &str) {
        (self.change_route)(path)
    }
}
