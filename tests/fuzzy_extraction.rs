// tests/fuzzy_extraction.rs

mod common;

use common::create_file;
use pathscan::{extract, extract_fuzzy_paths, ExtractOptions, Strategy};
use tempfile::tempdir;

#[test]
fn test_fuzzy_reports_only_existing_mentioned_files() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "src/engine.ts", "");
    create_file(temp.path(), "src/core.ts", "");

    let options = ExtractOptions::new()
        .strategy(Strategy::Fuzzy)
        .base_dir(temp.path());
    let paths = extract("I was editing engine.ts and also missing.ts", &options).unwrap();
    assert_eq!(paths, vec!["src/engine.ts"]);
}

#[test]
fn test_fuzzy_whole_word_only() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "lib/util.rs", "");
    create_file(temp.path(), "lib/io.rs", "");

    let paths = extract_fuzzy_paths("see myutil.rs and util.rsx, not radio.rs", temp.path());
    assert!(paths.is_empty(), "{paths:?}");
}

#[test]
fn test_fuzzy_reports_every_file_sharing_a_basename() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "a/mod.rs", "");
    create_file(temp.path(), "b/c/mod.rs", "");
    create_file(temp.path(), "b/other.rs", "");

    let paths = extract_fuzzy_paths("panic in mod.rs", temp.path());
    assert_eq!(paths, vec!["a/mod.rs", "b/c/mod.rs"]);
}

#[test]
fn test_fuzzy_skips_ignored_locations() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "node_modules/pkg/index.js", "");
    create_file(temp.path(), ".git/config", "");
    create_file(temp.path(), "dist/app.js", "");
    create_file(temp.path(), "package-lock.json", "");
    create_file(temp.path(), "web/app.js", "");

    let paths = extract_fuzzy_paths(
        "index.js config app.js package-lock.json",
        temp.path(),
    );
    assert_eq!(paths, vec!["web/app.js"]);
}

#[test]
fn test_fuzzy_ignores_gitignore_rules() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), ".gitignore", "secret.txt\n");
    create_file(temp.path(), "secret.txt", "");

    let paths = extract_fuzzy_paths("look at secret.txt", temp.path());
    assert_eq!(paths, vec!["secret.txt"]);
}

#[test]
fn test_fuzzy_names_with_regex_metacharacters() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "docs/notes (v2).md", "");
    create_file(temp.path(), "c++/a+b.cpp", "");

    let paths = extract_fuzzy_paths("compare notes (v2).md with a+b.cpp", temp.path());
    assert_eq!(paths, vec!["c++/a+b.cpp", "docs/notes (v2).md"]);
}

#[cfg(unix)]
#[test]
fn test_fuzzy_survives_unreadable_directory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    create_file(temp.path(), "locked/inner.rs", "");
    create_file(temp.path(), "open/visible.rs", "");
    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let paths = extract_fuzzy_paths("inner.rs visible.rs", temp.path());

    // Restore so the temp dir can be cleaned up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    // Privileged users may still read the locked directory.
    assert!(paths.contains(&"open/visible.rs".to_string()), "{paths:?}");
}

#[test]
fn test_both_strategies_pattern_results_first() {
    let temp = tempdir().unwrap();
    create_file(temp.path(), "src/engine.ts", "");

    let options = ExtractOptions::new()
        .strategy(Strategy::Both)
        .base_dir(temp.path());
    let paths = extract("broken: lib/a.rs and engine.ts", &options).unwrap();
    assert_eq!(paths, vec!["lib/a.rs", "engine.ts", "src/engine.ts"]);
}
