mod common;

#[cfg(test)]
pub mod theme_tests {
    use super::common::MemoryThemeStore;

    use devfolio::frontend::theme::{resolve_initial, Theme, ThemePersistence, THEME_STORAGE_KEY};

    #[test]
    fn test_persisted_preference_wins() {
        assert_eq!(resolve_initial(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(resolve_initial(Some(Theme::Light), true), Theme::Light);
    }

    #[test]
    fn test_os_preference_applies_without_persisted_value() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_storage_reflects_final_state_only() {
        let store = MemoryThemeStore::seeded(Theme::Light);

        // A double toggle writes on each change but lands on the original.
        let mut theme = resolve_initial(store.load(), false);
        theme = theme.toggled();
        store.store(theme);
        theme = theme.toggled();
        store.store(theme);

        assert_eq!(theme, Theme::Light);
        assert_eq!(store.persisted(), Some(Theme::Light));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_parse_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(THEME_STORAGE_KEY, "theme");
    }
}
