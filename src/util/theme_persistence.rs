//! Theme initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies the
//! `light-theme` class to `<body>`. Toggle writes back to `localStorage` and
//! updates the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! no-op so the theme logic stays testable.

#[cfg(test)]
#[path = "theme_persistence_test.rs"]
mod theme_persistence_test;

#[cfg(feature = "csr")]
use crate::config::THEME_STORAGE_KEY;
use crate::state::theme::Theme;

/// Read the stored theme preference. Defaults to dark.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().unwrap_or_default())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).unwrap_or_default());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Add or remove the `light-theme` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let result = if theme.is_light() {
            class_list.add_1("light-theme")
        } else {
            class_list.remove_1("light-theme")
        };
        if let Err(err) = result {
            log::warn!("could not apply theme: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(THEME_STORAGE_KEY, next.as_str()) {
                log::warn!("could not persist theme: {err:?}");
            }
        }
    }
    next
}
