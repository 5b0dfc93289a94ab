use std::collections::HashMap;

use thiserror::Error;

use super::observable::{Observable, SubscriptionId};

pub const THEME_STORAGE_KEY: &str = "darkMode";
pub const THEME_EVENT_NAME: &str = "themeChange";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Value for the CSS `color-scheme` property.
    pub fn color_scheme(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Stored form: `"true"` means dark.
    pub fn storage_value(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn parse_stored(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

/// Key-value persistence for the theme flag.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Where the resolved theme becomes visible.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);

    /// Broadcast an explicit user change to listeners outside the app.
    fn announce(&mut self, _theme: Theme) {}
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Surface used while rendering on the server, where there is no document.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSurface;

impl ThemeSurface for DetachedSurface {
    fn apply(&mut self, _theme: Theme) {}
}

/// Single source of truth for the light/dark preference.
///
/// Until the user toggles explicitly, a manager that started without a stored
/// preference keeps following the operating system setting.
pub struct ThemeManager<S, D> {
    store: S,
    surface: D,
    state: Observable<Theme>,
    follow_system: bool,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeManager<S, D> {
    pub fn init(store: S, surface: D, system_prefers_dark: bool) -> Self {
        let stored = match store.get(THEME_STORAGE_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse_stored),
            Err(e) => {
                log::debug!("theme preference unavailable, using system setting: {e}");
                None
            }
        };
        let (theme, follow_system) = match stored {
            Some(theme) => (theme, false),
            None => (Theme::from_dark(system_prefers_dark), true),
        };

        let mut manager = Self {
            store,
            surface,
            state: Observable::new(theme),
            follow_system,
        };
        manager.surface.apply(theme);
        if follow_system {
            manager.persist(theme);
        }
        manager
    }

    pub fn current(&self) -> Theme {
        *self.state.get()
    }

    pub fn is_following_system(&self) -> bool {
        self.follow_system
    }

    pub fn toggle(&mut self) -> Theme {
        self.follow_system = false;
        let next = self.current().toggled();
        self.surface.apply(next);
        self.persist(next);
        self.surface.announce(next);
        self.state.publish(next);
        log::info!("Theme changed to {} mode", next.color_scheme());
        next
    }

    /// Returns true if the system change was applied.
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if !self.follow_system {
            return false;
        }
        let theme = Theme::from_dark(prefers_dark);
        if theme == self.current() {
            return false;
        }
        self.surface.apply(theme);
        self.persist(theme);
        self.state.publish(theme);
        true
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&Theme) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    fn persist(&mut self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.storage_value()) {
            log::debug!("theme preference kept in memory only: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentSurface, LocalPreferenceStore};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

    use super::*;

    /// `window.localStorage`, looked up on every access.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalPreferenceStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    impl PreferenceStore for LocalPreferenceStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
    }

    /// The `<html>` element: `dark` class plus inline `color-scheme`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DocumentSurface;

    impl ThemeSurface for DocumentSurface {
        fn apply(&mut self, theme: Theme) {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let class_list = root.class_list();
            let _ = if theme.is_dark() {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
            if let Some(html) = root.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("color-scheme", theme.color_scheme());
            }
        }

        fn announce(&mut self, theme: Theme) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let detail = js_sys::Object::new();
            let _ = js_sys::Reflect::set(
                &detail,
                &JsValue::from_str("isDarkMode"),
                &JsValue::from_bool(theme.is_dark()),
            );
            let init = CustomEventInit::new();
            init.set_detail(&detail);
            if let Ok(event) = CustomEvent::new_with_event_init_dict(THEME_EVENT_NAME, &init) {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSurface {
        applied: Vec<Theme>,
        announced: Vec<Theme>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&mut self, theme: Theme) {
            self.applied.push(theme);
        }

        fn announce(&mut self, theme: Theme) {
            self.announced.push(theme);
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn stored(manager: &ThemeManager<MemoryStore, RecordingSurface>) -> Option<String> {
        manager.store().get(THEME_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "true");
        let manager = ThemeManager::init(store, RecordingSurface::default(), false);
        assert_eq!(manager.current(), Theme::Dark);
        assert!(!manager.is_following_system());
        assert_eq!(manager.surface().applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_missing_preference_uses_and_persists_system() {
        let manager = ThemeManager::init(MemoryStore::default(), RecordingSurface::default(), true);
        assert_eq!(manager.current(), Theme::Dark);
        assert!(manager.is_following_system());
        assert_eq!(stored(&manager).as_deref(), Some("true"));
    }

    #[test]
    fn test_malformed_preference_is_treated_as_missing() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "maybe");
        let manager = ThemeManager::init(store, RecordingSurface::default(), false);
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(stored(&manager).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_twice_restores_everything() {
        let payloads = Arc::new(Mutex::new(Vec::new()));
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "false");
        let mut manager = ThemeManager::init(store, RecordingSurface::default(), false);
        {
            let payloads = payloads.clone();
            manager.subscribe(move |t| payloads.lock().unwrap().push(t.is_dark()));
        }

        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(stored(&manager).as_deref(), Some("true"));
        assert_eq!(manager.toggle(), Theme::Light);

        assert_eq!(stored(&manager).as_deref(), Some("false"));
        assert_eq!(manager.surface().applied.last(), Some(&Theme::Light));
        assert_eq!(manager.surface().announced, vec![Theme::Dark, Theme::Light]);
        assert_eq!(*payloads.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_system_changes_followed_until_toggle() {
        let mut manager =
            ThemeManager::init(MemoryStore::default(), RecordingSurface::default(), false);
        assert_eq!(manager.current(), Theme::Light);

        assert!(manager.system_changed(true));
        assert_eq!(manager.current(), Theme::Dark);
        assert_eq!(stored(&manager).as_deref(), Some("true"));
        // system changes are not broadcast as DOM events
        assert!(manager.surface().announced.is_empty());

        manager.toggle();
        assert_eq!(manager.current(), Theme::Light);
        assert!(!manager.system_changed(true));
        assert!(!manager.system_changed(false));
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(stored(&manager).as_deref(), Some("false"));
    }

    #[test]
    fn test_subscribers_see_system_changes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut manager = ThemeManager::init(MemoryStore::default(), DetachedSurface, false);
        {
            let seen = seen.clone();
            manager.subscribe(move |t| seen.lock().unwrap().push(*t));
        }
        manager.system_changed(true);
        manager.toggle();
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_system_change_ignored_with_stored_preference() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "false");
        let mut manager = ThemeManager::init(store, RecordingSurface::default(), false);
        assert!(!manager.system_changed(true));
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let mut manager = ThemeManager::init(BrokenStore, RecordingSurface::default(), true);
        assert_eq!(manager.current(), Theme::Dark);
        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(
            manager.surface().applied,
            vec![Theme::Dark, Theme::Light, Theme::Dark]
        );
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let calls = Arc::new(Mutex::new(0));
        let mut manager = ThemeManager::init(MemoryStore::default(), DetachedSurface, false);
        let id = {
            let calls = calls.clone();
            manager.subscribe(move |_| *calls.lock().unwrap() += 1)
        };
        manager.toggle();
        assert!(manager.unsubscribe(id));
        manager.toggle();
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
