use gloo::console::log;
use web_sys::{Document, Storage};

use kazari_core::theme::{Theme, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

/// Single persisted preference slot backed by browser-local storage. When
/// storage is unavailable the store degrades to the default theme and
/// silently skips writes.
pub(crate) struct PreferenceStore {
    storage: Option<Storage>,
}

impl PreferenceStore {
    pub(crate) fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log!("prefs: storage unavailable, falling back to defaults");
        }
        Self { storage }
    }

    pub(crate) fn read(&self) -> Theme {
        let Some(storage) = self.storage.as_ref() else {
            return Theme::default();
        };
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(value)) => Theme::parse(&value),
            _ => Theme::default(),
        }
    }

    /// Persists the theme and applies it as the document-root attribute
    /// consumed by the stylesheets.
    pub(crate) fn write(&self, document: &Document, theme: Theme) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}
