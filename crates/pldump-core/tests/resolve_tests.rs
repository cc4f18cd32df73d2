//! Tests for path resolution and document loading.

use std::path::{Path, PathBuf};

use pldump_core::{load, DumpError, Resolver};

const SAMPLE_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>city</key>
	<string>Berlin</string>
</dict>
</plist>
"#;

const ARRAY_ROOT_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<array>
	<integer>1</integer>
</array>
</plist>
"#;

/// Helper: a scratch directory under the system temp dir, cleaned per test.
fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pldump-core-{label}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("scratch dir must be creatable");
    dir
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn bare_name_joins_base_directory() {
    let resolver = Resolver::new("/etc/app");
    assert_eq!(
        resolver.resolve("collections"),
        Path::new("/etc/app/collections.plist")
    );
}

#[test]
fn trailing_extension_is_stripped_before_reappending() {
    let resolver = Resolver::new("/etc/app");
    assert_eq!(
        resolver.resolve("collections.plist"),
        Path::new("/etc/app/collections.plist")
    );
}

#[test]
fn dotted_name_keeps_all_its_dots() {
    let resolver = Resolver::new("/etc/app");
    assert_eq!(resolver.resolve("a.b"), Path::new("/etc/app/a.b.plist"));
    assert_eq!(
        resolver.resolve("a.b.plist"),
        Path::new("/etc/app/a.b.plist")
    );
}

#[test]
fn name_with_directory_component_is_used_verbatim() {
    let resolver = Resolver::new("/etc/app");
    assert_eq!(
        resolver.resolve("config/settings"),
        Path::new("config/settings.plist")
    );
    assert_eq!(
        resolver.resolve("/abs/path/settings.plist"),
        Path::new("/abs/path/settings.plist")
    );
}

#[test]
fn default_resolver_uses_current_directory() {
    let resolver = Resolver::default();
    assert_eq!(
        resolver.resolve("collections"),
        Path::new("./collections.plist")
    );
}

#[test]
fn stem_strips_only_a_trailing_extension() {
    assert_eq!(Resolver::stem("collections"), "collections");
    assert_eq!(Resolver::stem("collections.plist"), "collections");
    assert_eq!(Resolver::stem("a.b.plist"), "a.b");
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_returns_the_root_mapping() {
    let dir = scratch_dir("load-ok");
    let path = dir.join("sample.plist");
    std::fs::write(&path, SAMPLE_PLIST).unwrap();

    let root = load(&path).expect("sample must parse");
    assert_eq!(root.len(), 1);
    assert_eq!(
        root.get("city").and_then(|v| v.as_string()),
        Some("Berlin")
    );
}

#[test]
fn resolver_load_finds_file_in_base_directory() {
    let dir = scratch_dir("resolver-load");
    std::fs::write(dir.join("sample.plist"), SAMPLE_PLIST).unwrap();

    let resolver = Resolver::new(&dir);
    let root = resolver.load("sample").expect("sample must load");
    assert!(root.contains_key("city"));
}

#[test]
fn missing_file_reports_not_found_with_stem() {
    let dir = scratch_dir("missing");
    let resolver = Resolver::new(&dir);

    let err = resolver.load("does-not-exist").unwrap_err();
    assert!(matches!(err, DumpError::NotFound { .. }));
    assert_eq!(err.to_string(), "no does-not-exist.plist file found");

    // The stem stays stable when the user typed the extension themselves.
    let err = resolver.load("does-not-exist.plist").unwrap_err();
    assert_eq!(err.to_string(), "no does-not-exist.plist file found");
}

#[test]
fn non_mapping_root_is_rejected() {
    let dir = scratch_dir("array-root");
    let path = dir.join("roots.plist");
    std::fs::write(&path, ARRAY_ROOT_PLIST).unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, DumpError::RootNotMapping { .. }));
}

#[test]
fn unparseable_file_keeps_the_deserializer_message() {
    let dir = scratch_dir("garbage");
    let path = dir.join("garbage.plist");
    std::fs::write(&path, "this is not a property list").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, DumpError::Plist(_)));
}
