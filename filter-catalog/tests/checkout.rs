use std::path::PathBuf;

use filter_catalog::{extract_record, scan_plugin_directories, MetadataError, Repository};
use url::Url;

fn fixture_checkout() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/checkout")
}

fn alice_foo() -> Repository {
    Repository {
        owner: "alice".to_string(),
        name: "foo".to_string(),
        full_name: "alice/foo".to_string(),
        clone_url: Url::parse("https://github.com/alice/foo.git").unwrap(),
        browse_url: Url::parse("https://github.com/alice/foo").unwrap(),
        default_branch: "main".to_string(),
    }
}

#[test]
fn scan_finds_descriptor_directories_only() {
    let plugins = scan_plugin_directories(&fixture_checkout()).unwrap();

    assert_eq!(plugins, ["bar", "broken", "no_filters", "readme_only"]);
}

#[test]
fn descriptor_description_takes_precedence() {
    let record = extract_record(&fixture_checkout(), "bar", &alice_foo()).unwrap();

    assert_eq!(record.name, "bar");
    assert_eq!(record.author, "alice");
    assert_eq!(record.url, "https://github.com/alice/foo/tree/main/bar");
    assert_eq!(record.language, "python");
    assert_eq!(record.description, "Bar filter");
}

#[test]
fn readme_fallback_uses_first_prose_line() {
    let record = extract_record(&fixture_checkout(), "readme_only", &alice_foo()).unwrap();

    assert_eq!(record.language, "nodejs");
    assert_eq!(record.description, "This filter converts assets.");
}

#[test]
fn bad_descriptors_are_isolated() {
    let checkout = fixture_checkout();
    let repository = alice_foo();

    let results: Vec<_> = scan_plugin_directories(&checkout)
        .unwrap()
        .into_iter()
        .map(|name| (name.clone(), extract_record(&checkout, &name, &repository)))
        .collect();

    let extracted: Vec<_> = results
        .iter()
        .filter_map(|(name, result)| result.as_ref().ok().map(|_| name.as_str()))
        .collect();
    assert_eq!(extracted, ["bar", "readme_only"]);

    assert!(results.iter().any(|(name, result)| name == "broken"
        && matches!(result, Err(MetadataError::JsonError { .. }))));
    assert!(results.iter().any(|(name, result)| name == "no_filters"
        && matches!(result, Err(MetadataError::NoFilters { .. }))));
}
