use super::*;

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_stored_reads_known_values() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn from_stored_falls_back_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("system")), Theme::Light);
}

#[test]
fn toggled_flips_and_round_trips_through_storage_form() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn toggle_label_names_the_other_theme() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    assert!(Theme::Dark.is_dark());
}

#[derive(Default)]
struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[test]
fn load_from_empty_store_is_light() {
    assert_eq!(Theme::load(&MemoryStore::default()), Theme::Light);
}

#[test]
fn persist_writes_under_theme_key() {
    let store = MemoryStore::default();
    Theme::Dark.persist(&store);
    assert_eq!(store.load(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(Theme::load(&store), Theme::Dark);

    Theme::Dark.toggled().persist(&store);
    assert_eq!(Theme::load(&store), Theme::Light);
}

#[test]
fn load_ignores_unknown_stored_value() {
    let store = MemoryStore::default();
    store.save(STORAGE_KEY, "sepia");
    assert_eq!(Theme::load(&store), Theme::Light);
}
