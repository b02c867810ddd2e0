//! Two-state display theme with a persisted preference.

use leptos::prelude::*;

/// Key the preference is persisted under in the browser's local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Initial resolution order: persisted choice, then the OS preference,
/// then light.
pub fn resolve_initial(persisted: Option<Theme>, prefers_dark: bool) -> Theme {
    persisted.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Durable storage for the theme preference.
pub trait ThemePersistence {
    fn load(&self) -> Option<Theme>;
    fn store(&self, theme: Theme);
}

/// Browser local storage under [`THEME_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStore;

impl ThemePersistence for BrowserThemeStore {
    fn load(&self) -> Option<Theme> {
        let storage = window().local_storage().ok().flatten()?;
        let value = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
        Theme::parse(&value)
    }

    fn store(&self, theme: Theme) {
        if let Ok(Some(storage)) = window().local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

/// OS-level color-scheme preference; false when the query is unavailable.
pub fn system_prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn apply_document_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Owns the theme signal. Provided through context from `App`; every
/// consumer goes through this handle, nothing else writes the state.
#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
}

impl ThemeController {
    /// Creates the controller, wires the persistence/document effect, and
    /// provides the handle through context. The effect only runs on the
    /// client, so server-rendered markup carries the default until
    /// hydration resolves the real preference.
    pub fn install(store: impl ThemePersistence + 'static) -> Self {
        let theme = RwSignal::new(Theme::default());
        let controller = ThemeController { theme };

        Effect::new(move |prev: Option<()>| {
            if prev.is_none() {
                // First client run: resolve the stored/OS preference
                // before anything is written back.
                theme.set(resolve_initial(store.load(), system_prefers_dark()));
            }
            let current = theme.get();
            store.store(current);
            apply_document_theme(current);
        });

        provide_context(controller);
        controller
    }

    pub fn current(self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// The controller provided by the application root.
pub fn use_theme() -> ThemeController {
    expect_context::<ThemeController>()
}
