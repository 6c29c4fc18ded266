/// Integration tests for the template store: persistence merge, corruption
/// fallback, and the import collision contract, exercised through the
/// library exactly as the CLI drives it.
use dirforge::templates::{transfer, TemplateStore};
use tempfile::TempDir;

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

// ─── persistence ──────────────────────────────────────────────────────────────

#[test]
fn defaults_are_available_without_a_store_file() {
    let tmp = TempDir::new().unwrap();
    let store = TemplateStore::load(&tmp.path().join("templates.json"));
    assert!(store.contains("Web Project"));
    assert!(store.contains("Film / Video"));
}

#[test]
fn saved_user_template_overrides_the_default_of_the_same_name() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("templates.json");

    let mut store = TemplateStore::load(&file);
    store.insert("Web Project", paths(&["app", "app/routes"]));
    store.save(&file).unwrap();

    let reloaded = TemplateStore::load(&file);
    assert_eq!(
        reloaded.get("Web Project").unwrap(),
        paths(&["app", "app/routes"]).as_slice()
    );
    // The rest of the defaults survive the overlay.
    assert!(reloaded.contains("Data Science"));
}

#[test]
fn corrupt_store_is_non_fatal() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("templates.json");
    std::fs::write(&file, "not json at all").unwrap();

    let store = TemplateStore::load(&file);
    assert!(!store.is_empty());
    assert!(store.contains("Game Dev"));
}

#[test]
fn save_creates_missing_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("deep/nested/templates.json");
    TemplateStore::builtin().save(&file).unwrap();
    assert!(file.is_file());
}

// ─── import / export ──────────────────────────────────────────────────────────

#[test]
fn import_collision_appends_imported_then_numbers() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("web.json");
    transfer::export_template(&file, "Web Project", &paths(&["src"])).unwrap();

    let mut store = TemplateStore::builtin();

    let first = transfer::import_template(&file).unwrap();
    let name = store.unique_import_name(&first.template_name);
    assert_eq!(name, "Web Project (Imported)");
    store.insert(name, first.structure);

    let second = transfer::import_template(&file).unwrap();
    let name = store.unique_import_name(&second.template_name);
    assert_eq!(name, "Web Project (Imported 2)");
}

#[test]
fn imported_structure_lands_unchanged() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("layout.json");
    let structure = paths(&["a", "a/b", "c"]);
    transfer::export_template(&file, "Layout", &structure).unwrap();

    let mut store = TemplateStore::builtin();
    let incoming = transfer::import_template(&file).unwrap();
    let name = store.unique_import_name(&incoming.template_name);
    store.insert(name.clone(), incoming.structure);

    assert_eq!(store.get(&name).unwrap(), structure.as_slice());
}

#[test]
fn invalid_transfer_files_fail_without_touching_the_store() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("bad.json");
    std::fs::write(&file, r#"{"template_name": "x"}"#).unwrap();

    let store = TemplateStore::builtin();
    let before = store.len();
    assert!(transfer::import_template(&file).is_err());
    assert_eq!(store.len(), before);
}
