//! Theme initialization and persistence.
//!
//! Reads the stored preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering always produces the light theme.

use crate::state::theme::{PreferenceStore, Theme};

/// `window.localStorage`. Every operation is a no-op outside `hydrate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(key, value).is_err() {
                    log::warn!("preference {key} not saved");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Read the saved theme from localStorage. `Light` when absent or unknown.
pub fn read_preference() -> Theme {
    Theme::load(&LocalStorage)
}

/// Apply `theme` as the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, apply and persist the result.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    next.persist(&LocalStorage);
    next
}
