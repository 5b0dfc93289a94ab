//! Direct DOM reads and writes used by the layout.
//!
//! Every helper is a no-op (or returns an empty/default answer) when there is
//! no browser, so components can call them from code that also runs during
//! server rendering.

use leptos::ev::MouseEvent;

use crate::state::{SectionBounds, SectionId};

#[cfg(feature = "hydrate")]
use crate::state::scroll::scroll_target;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Offsets of every `section[id]` that maps to a known section, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .filter_map(|el| {
                let id = el.id().parse::<SectionId>().ok()?;
                Some(SectionBounds {
                    id,
                    top: f64::from(el.offset_top()),
                    height: f64::from(el.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Smooth-scroll so the section sits just below the header. Returns false if
/// the section isn't in the document.
pub fn scroll_to_section(id: SectionId) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(el) = window
            .document()
            .and_then(|d| d.get_element_by_id(id.as_str()))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        smooth_scroll(&window, scroll_target(f64::from(el.offset_top())));
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll(&window, 0.0);
        }
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Touch-capable pointer: `ontouchstart` on window or any touch points.
pub fn is_touch_device() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let has_touch_start =
            js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        has_touch_start || window.navigator().max_touch_points() > 0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let classes = body.class_list();
            let _ = if on {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, on);
    }
}

/// Whether the event target is, or sits inside, an interactive element.
pub fn targets_interactive(ev: &MouseEvent) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::cursor::INTERACTIVE_SELECTOR;

        ev.target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        false
    }
}

/// A `mouseout` whose pointer left the document entirely.
pub fn leaves_document(ev: &MouseEvent) -> bool {
    ev.related_target().is_none()
}
