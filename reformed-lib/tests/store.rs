use reformed_lib::model::{Model, Value};
use reformed_lib::state::{
    ControlType, EventTarget, EventType, FieldFlags, FlagsPatch, FormStore, InputEvent,
};

// ============================================================================
// Model replacement
// ============================================================================

#[test]
fn test_set_property_replaces_model() {
    let mut store = FormStore::new(Model::new().with("name", "Ada"));
    let before = store.model().clone();

    let after = store.set_property("name", "Grace").clone();

    assert_eq!(before.get("name"), Some(&Value::from("Ada")));
    assert_eq!(after.get("name"), Some(&Value::from("Grace")));
    assert_eq!(store.model(), &after);
}

#[test]
fn test_set_model_returns_new_model() {
    let mut store = FormStore::default();
    let model: Model = [("a", 1), ("b", 2)].into_iter().collect();

    let returned = store.set_model(model.clone());

    assert_eq!(returned, &model);
    assert_eq!(store.model().len(), 2);
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_input_defaults_to_empty_string() {
    let mut store = FormStore::default();

    let binding = store.bind_input("email");

    assert_eq!(binding.name, "email");
    assert_eq!(binding.value, Value::from(""));
    assert!(store.input_flags().contains("email"));
    assert_eq!(store.input_flags().get("email"), FieldFlags::default());
}

#[test]
fn test_bind_input_keeps_existing_flags() {
    let mut store = FormStore::new(Model::new().with("email", "a@b.com"));
    store.set_input_flags("email", FlagsPatch::DIRTY);

    let binding = store.bind_input("email");

    assert_eq!(binding.value, Value::from("a@b.com"));
    assert!(store.input_flags().get("email").dirty);
}

#[test]
fn test_set_input_flags_keeps_old_snapshot() {
    let mut store = FormStore::default();
    store.bind_input("name");
    let before = store.input_flags().clone();

    store.set_input_flags("name", FlagsPatch::TOUCHED);

    assert!(!before.get("name").touched);
    assert!(store.input_flags().get("name").touched);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_change_event_sets_value_and_dirty() {
    let mut store = FormStore::default();
    let name = store.bind_input("name");

    store.on_input_event(name.change("Ada"));

    assert_eq!(store.model().get("name"), Some(&Value::from("Ada")));
    assert!(store.input_flags().get("name").dirty);
    assert!(!store.input_flags().get("name").touched);

    let last = store.last_input_event().unwrap();
    assert!(last.matches("name", EventType::Change));
}

#[test]
fn test_change_event_on_unbound_field() {
    let mut store = FormStore::default();

    store.on_input_event(InputEvent::change(
        EventTarget::new("city").with_value("Ghent"),
    ));

    assert_eq!(store.model().get("city"), Some(&Value::from("Ghent")));
    assert!(store.input_flags().get("city").dirty);
}

#[test]
fn test_focus_marks_touched() {
    let mut store = FormStore::default();
    let name = store.bind_input("name");

    store.on_input_event(name.focus());

    let flags = store.input_flags().get("name");
    assert!(flags.touched);
    assert!(!flags.dirty);
}

#[test]
fn test_blur_only_records_event() {
    let mut store = FormStore::default();
    let name = store.bind_input("name");
    let flags_before = store.input_flags().clone();

    store.on_input_event(name.blur());

    assert_eq!(store.input_flags(), &flags_before);
    assert!(store.model().is_empty());
    assert_eq!(
        store.last_input_event().map(|e| e.event_type),
        Some(EventType::Blur)
    );
}

#[test]
fn test_last_event_is_form_wide() {
    let mut store = FormStore::default();
    let a = store.bind_input("a");
    let b = store.bind_input("b");

    store.on_input_event(a.change("x"));
    store.on_input_event(b.focus());

    let last = store.last_input_event().unwrap();
    assert_eq!(last.name, "b");
    assert_eq!(last.event_type, EventType::Focus);
}

#[test]
fn test_flags_never_reset() {
    let mut store = FormStore::default();
    let name = store.bind_input("name");

    store.on_input_event(name.focus());
    store.on_input_event(name.change("x"));
    store.on_input_event(name.blur());
    store.bind_input("name");

    assert_eq!(
        store.input_flags().get("name"),
        FieldFlags {
            dirty: true,
            touched: true
        }
    );
}

// ============================================================================
// Checkbox groups
// ============================================================================

#[test]
fn test_checkbox_accumulation() {
    let mut store = FormStore::new(Model::new().with("colors", Vec::<String>::new()));
    let colors = store.bind_input("colors");

    store.on_input_event(colors.check("red", true));
    assert_eq!(store.model().get("colors"), Some(&Value::from(vec!["red"])));

    store.on_input_event(colors.check("red", false));
    assert_eq!(store.model().get("colors"), Some(&Value::List(vec![])));
}

#[test]
fn test_checkbox_starts_list_when_absent() {
    let mut store = FormStore::default();
    let tags = store.bind_input("tags");

    store.on_input_event(tags.check("rust", true));
    store.on_input_event(tags.check("web", true));

    assert_eq!(
        store.model().get("tags"),
        Some(&Value::from(vec!["rust", "web"]))
    );
}

#[test]
fn test_checkbox_duplicates_removed_together() {
    let mut store = FormStore::default();
    let tags = store.bind_input("tags");

    store.on_input_event(tags.check("rust", true));
    store.on_input_event(tags.check("rust", true));
    assert_eq!(
        store.model().get("tags"),
        Some(&Value::from(vec!["rust", "rust"]))
    );

    store.on_input_event(tags.check("rust", false));
    assert_eq!(store.model().get("tags"), Some(&Value::List(vec![])));
}

#[test]
fn test_non_checkbox_controls_replace_value() {
    let mut store = FormStore::new(Model::new().with("size", vec!["s"]));
    let size = store.bind_input("size");

    store.on_input_event(size.change_from(ControlType::Select, "m"));

    assert_eq!(store.model().get("size"), Some(&Value::from("m")));
}
