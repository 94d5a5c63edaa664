//! Window scroll and viewport helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the web-sys calls page components need (scroll offset,
//! smooth scrolling, element rects and one-shot visibility observers) so
//! components stay free of browser glue.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Current vertical scroll offset, `0.0` on the server.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll the element with DOM id `id` into view.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            log::warn!("section #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// `(top, height, viewport_height)` for `el`, relative to the viewport.
#[cfg(feature = "hydrate")]
pub fn viewport_rect(el: &web_sys::Element) -> Option<(f64, f64, f64)> {
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = el.get_bounding_client_rect();
    Some((rect.top(), rect.height(), viewport_height))
}

/// Set `revealed` once `el` is at least [`REVEAL_THRESHOLD`] visible, then
/// stop observing.
///
/// [`REVEAL_THRESHOLD`]: crate::state::ui::REVEAL_THRESHOLD
#[cfg(feature = "hydrate")]
pub fn observe_reveal(el: &web_sys::Element, revealed: RwSignal<bool>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::{Closure, JsValue};

    use crate::state::ui::{REVEAL_THRESHOLD, should_reveal};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if should_reveal(revealed.get_untracked(), entry.intersection_ratio()) {
                    revealed.set(true);
                    observer.disconnect();
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(el),
        // No observer support: show the content rather than hide it forever.
        Err(_) => revealed.set(true),
    }
    callback.forget();
}
