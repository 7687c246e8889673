//! Resolution of package paths to metadata handles.

use pkgmeta_core::{MetadataLayout, Resolver, StorageMode, resolve};
use pkgmeta_fs::NormalizedPath;
use pkgmeta_test_utils::{EMBEDDED_WIDGET_JS, PLAIN_WIDGET_JS, TestPackage};
use serde_json::json;

#[test]
fn test_lone_source_without_comment_or_manifest() {
    let pkg = TestPackage::new().with_file("widget.js", PLAIN_WIDGET_JS);

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(package.location(), Some(&NormalizedPath::new(pkg.path("widget.js"))));
    assert_eq!(package.data(), None);
}

#[test]
fn test_lone_source_with_comment() {
    let pkg = TestPackage::new().with_file("widget.js", EMBEDDED_WIDGET_JS);

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[test]
fn test_manifest_with_several_sources() {
    let pkg = TestPackage::new()
        .with_file("package.json", r#"{"name":"widget"}"#)
        .with_file("widget.js", PLAIN_WIDGET_JS)
        .with_file("helper.js", "var helper;\n");

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::DedicatedFile);
    assert_eq!(
        package.location(),
        Some(&NormalizedPath::new(pkg.root()).join("package.json"))
    );
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[test]
fn test_embedded_comment_wins_over_manifest() {
    let pkg = TestPackage::new()
        .with_file("package.json", r#"{"name":"from-file"}"#)
        .with_file("widget.js", EMBEDDED_WIDGET_JS);

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[test]
fn test_manifest_used_when_lone_source_has_no_comment() {
    let pkg = TestPackage::new()
        .with_file("package.json", r#"{"name":"from-file"}"#)
        .with_file("widget.js", PLAIN_WIDGET_JS);

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::DedicatedFile);
    assert_eq!(package.data(), Some(&json!({"name": "from-file"})));
}

#[test]
fn test_several_sources_without_manifest_has_no_location() {
    let pkg = TestPackage::new()
        .with_file("a.js", EMBEDDED_WIDGET_JS)
        .with_file("b.js", PLAIN_WIDGET_JS);

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert!(!package.has_location());
    assert_eq!(package.data(), None);
}

#[test]
fn test_empty_directory_has_no_location() {
    let pkg = TestPackage::new();

    let package = resolve(pkg.root()).unwrap();

    assert!(!package.has_location());
    assert_eq!(package.data(), None);
}

#[test]
fn test_source_subdirectories_are_ignored() {
    let pkg = TestPackage::new()
        .with_file("widget.js", EMBEDDED_WIDGET_JS)
        .with_dir("lib.js");

    let package = resolve(pkg.root()).unwrap();

    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[test]
fn test_file_path_resolves_embedded() {
    let pkg = TestPackage::new()
        .with_file("widget.js", EMBEDDED_WIDGET_JS)
        .with_file("other.js", PLAIN_WIDGET_JS);

    let package = resolve(pkg.path("widget.js")).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[test]
fn test_file_path_without_comment_has_no_data() {
    let pkg = TestPackage::new().with_file("widget.js", PLAIN_WIDGET_JS);

    let package = resolve(pkg.path("widget.js")).unwrap();

    assert!(package.has_location());
    assert_eq!(package.data(), None);
}

#[test]
fn test_missing_path_is_not_found() {
    let pkg = TestPackage::new();

    let err = resolve(pkg.path("missing")).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_malformed_embedded_json_is_error() {
    let pkg = TestPackage::new()
        .with_file("widget.js", "/*package.json {name: 'widget'} */\n")
        .with_file("package.json", r#"{"name":"widget"}"#);

    let err = resolve(pkg.root()).unwrap_err();

    assert!(err.is_malformed());
}

#[test]
fn test_malformed_manifest_is_error() {
    let pkg = TestPackage::new().with_file("package.json", "{ nope");

    let err = resolve(pkg.root()).unwrap_err();

    assert!(err.is_malformed());
}

#[test]
fn test_custom_layout() {
    let pkg = TestPackage::new()
        .with_file("widget.mjs", "/*meta {\"name\": \"widget\"} */\n")
        .with_file("main.js", PLAIN_WIDGET_JS)
        .with_file("app.js", PLAIN_WIDGET_JS);
    let layout = MetadataLayout {
        comment_keyword: "meta".into(),
        metadata_file: "meta.json".into(),
        source_suffix: ".mjs".into(),
    };

    let package = Resolver::with_layout(layout).unwrap().resolve(pkg.root()).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}

#[cfg(unix)]
#[test]
fn test_symlinked_lone_source() {
    let pkg = TestPackage::new()
        .with_file("real/widget.js", EMBEDDED_WIDGET_JS)
        .with_symlink("pkg/widget.js", "real/widget.js");

    let package = resolve(pkg.path("pkg")).unwrap();

    assert_eq!(package.storage_mode(), StorageMode::EmbeddedComment);
    assert_eq!(
        package.location(),
        Some(&NormalizedPath::new(pkg.path("pkg/widget.js")))
    );
    assert_eq!(package.data(), Some(&json!({"name": "widget"})));
}
