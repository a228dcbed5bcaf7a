#[macro_use]
extern crate log;

mod utils;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use livenav::{HighlightRules, NavLinkHandle};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

/// An anchor in the live document.
#[derive(Debug)]
pub struct DomNavLink {
    element: Element,
}

impl DomNavLink {
    pub fn new(element: Element) -> DomNavLink {
        DomNavLink { element }
    }
}

impl NavLinkHandle for DomNavLink {
    fn target_path(&self) -> Option<String> {
        self.element.get_attribute("href")
    }

    fn mark_active(&mut self, marker: &str) {
        if let Err(e) = self.element.class_list().add_1(marker) {
            warn!("Couldn't add {:?} to {:?}: {:?}", marker, self.target_path(), e);
        }
    }
}

/// Every element in the document matching `selector`, in document order.
pub fn nav_links(document: &web_sys::Document, selector: &str) -> Result<Vec<DomNavLink>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut links = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                links.push(DomNavLink::new(element));
            }
        }
    }
    Ok(links)
}

/// The path of the page we're on, or an empty string if the browser won't tell us.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_default()
}

/// Mark the nav link for `current_path` in `document` using `rules`.
pub fn highlight(
    document: &web_sys::Document,
    rules: &HighlightRules,
    current_path: &str,
) -> Result<Option<usize>, JsValue> {
    let mut links = nav_links(document, &rules.selector)?;
    let marked = rules.apply(&mut links, current_path);
    match marked {
        Some(idx) => debug!("Marked nav link {} of {} live", idx, links.len()),
        None => debug!("No nav link for {:?}", current_path),
    }
    Ok(marked)
}

/// Highlight the current page's nav link with the stock rules.
#[wasm_bindgen]
pub fn highlight_document() -> Result<(), JsValue> {
    highlight(&document()?, HighlightRules::stock(), &current_path())?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    utils::set_panic_hook();
    // Someone else may have installed a logger already, which is fine.
    let _ = console_log::init_with_level(log::Level::Info);
    highlight_document()
}
