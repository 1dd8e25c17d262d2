//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to a no-op (or `None`) when the API is unavailable.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// First element matching a CSS selector.
pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Full URL of the current page.
pub fn location_href() -> Option<String> {
    window()?.location().href().ok()
}

/// Column labels authored in a results block (`:scope > div div`).
///
/// Returns an empty list when the block is absent.
pub fn authored_columns(block_selector: &str) -> Vec<String> {
    let Some(block) = query_selector(block_selector) else {
        return Vec::new();
    };
    let Ok(cells) = block.query_selector_all(":scope > div div") else {
        return Vec::new();
    };

    (0..cells.length())
        .filter_map(|idx| cells.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|cell| cell.inner_text().trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

/// Lock or restore page scrolling behind a modal.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Copy text to the clipboard through a detached, selected textarea.
///
/// Returns `true` if the browser reported a successful copy.
pub fn copy_to_clipboard(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let Some(document) = document() else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let _ = textarea.style().set_property("position", "absolute");
    let _ = textarea.style().set_property("left", "-9999px");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);

    copied
}

// =============================================================================
// Event Subscriptions
// =============================================================================

/// An event listener that is removed again when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Listen for `event` on `target`.
    ///
    /// Returns `None` if the browser refused the listener.
    pub fn listen(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
