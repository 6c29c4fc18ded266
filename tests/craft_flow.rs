/// Integration tests for materialization: a stock template end to end,
/// idempotent re-runs, and the traversal guard.
use dirforge::codec;
use dirforge::materialize::craft_folders;
use dirforge::templates::TemplateStore;
use tempfile::TempDir;

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

#[test]
fn craft_a_builtin_template_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let store = TemplateStore::builtin();
    let template = store.get("Web Project").expect("stock template").to_vec();

    let report = craft_folders(tmp.path(), &template).unwrap();
    assert_eq!(report.processed, template.len());
    assert!(report.skipped.is_empty());
    assert!(tmp.path().join("src/components").is_dir());
    assert!(tmp.path().join("src/assets/images").is_dir());
    assert!(tmp.path().join("public").is_dir());
}

#[test]
fn second_run_reports_every_path_as_processed() {
    let tmp = TempDir::new().unwrap();
    let template = paths(&["a/b", "a/c", "d"]);

    craft_folders(tmp.path(), &template).unwrap();
    let again = craft_folders(tmp.path(), &template).unwrap();

    // All directories pre-exist; the accepted count still covers them all.
    assert_eq!(again.processed, template.len());
    assert!(again.skipped.is_empty());
}

#[test]
fn escape_entry_is_skipped_and_nothing_lands_outside_the_root() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("dest");
    let template = paths(&["kept", "../escape"]);

    let report = craft_folders(&dest, &template).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, paths(&["../escape"]));
    assert!(dest.join("kept").is_dir());
    assert!(!tmp.path().join("escape").exists());
}

#[test]
fn parsed_text_materializes_like_a_stored_template() {
    let tmp = TempDir::new().unwrap();
    let text = "src\n    components\n    styles\npublic\n";
    let parsed = codec::parse_indented_lines(text);

    let report = craft_folders(tmp.path(), &parsed).unwrap();
    assert_eq!(report.processed, 4);
    assert!(tmp.path().join("src/styles").is_dir());
    assert!(tmp.path().join("public").is_dir());
}
