mod common;

use common::{child_names, create_fixture, default_tree_config};
use std::fs;
use tempfile::TempDir;
use treesnap::render::{render_tree, RenderConfig};
use treesnap::tree::{build_tree, build_ignore_set};

#[test]
fn test_deeply_nested_structure() {
    let tmp = create_fixture(&["a/b/c/d/e/f/leaf.txt"]);
    let root = build_tree(tmp.path(), &default_tree_config()).unwrap();

    let mut node = &root;
    for expected in ["a", "b", "c", "d", "e", "f"] {
        assert_eq!(node.children().len(), 1);
        node = &node.children()[0];
        assert_eq!(node.name(), expected);
    }
    assert_eq!(child_names(node), vec!["leaf.txt"]);

    let text = render_tree(&root, &RenderConfig::default());
    let last = text.lines().last().unwrap();
    // Six closed ancestor levels of blank indent before the leaf connector.
    assert_eq!(last, format!("{}└── leaf.txt", "    ".repeat(6)));
}

#[test]
fn test_names_with_spaces_and_unicode() {
    let tmp = create_fixture(&["my notes.txt", "données/", "données/café.md"]);
    let root = build_tree(tmp.path(), &default_tree_config()).unwrap();

    let names = child_names(&root);
    assert_eq!(names, vec!["données", "my notes.txt"]);

    let text = render_tree(&root, &RenderConfig::default());
    assert!(text.contains("café.md"));
}

#[test]
fn test_nested_empty_directories() {
    let tmp = create_fixture(&["outer/inner/"]);
    let root = build_tree(tmp.path(), &default_tree_config()).unwrap();

    let text = render_tree(&root, &RenderConfig::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "└── outer");
    assert_eq!(lines[2], "    └── inner");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_custom_indent_string() {
    let tmp = create_fixture(&["sub/", "sub/inner.txt", "z.txt"]);
    let root = build_tree(tmp.path(), &default_tree_config()).unwrap();

    let config = RenderConfig {
        indent: "  ".to_string(),
        ..RenderConfig::default()
    };
    let text = render_tree(&root, &config);
    let lines: Vec<&str> = text.lines().collect();
    // Two-character indent: open branches continue with "│ ".
    assert_eq!(lines[2], "│ └── inner.txt");
}

#[test]
fn test_ignore_pattern_matching_a_file() {
    let tmp = create_fixture(&["keep.rs", "skip.rs"]);
    let mut cfg = default_tree_config();
    cfg.ignore = build_ignore_set(&["skip.rs".to_string()]);
    let root = build_tree(tmp.path(), &cfg).unwrap();
    assert_eq!(child_names(&root), vec!["keep.rs"]);
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_is_terminal_without_follow() {
    let tmp = TempDir::new().unwrap();
    std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling")).unwrap();

    let root = build_tree(tmp.path(), &default_tree_config()).unwrap();
    assert_eq!(child_names(&root), vec!["dangling -> (symlink)"]);
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_aborts_build_when_following() {
    let tmp = TempDir::new().unwrap();
    std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling")).unwrap();

    let mut cfg = default_tree_config();
    cfg.follow_symlinks = true;
    // Fail-fast policy: resolving the dangling link is an I/O error and the
    // whole build aborts with no partial tree.
    assert!(build_tree(tmp.path(), &cfg).is_err());
}

#[test]
#[cfg(unix)]
fn test_root_symlink_resolves_to_target() {
    let tmp = create_fixture(&["real/", "real/file.txt"]);
    let link = tmp.path().join("entry");
    std::os::unix::fs::symlink(tmp.path().join("real"), &link).unwrap();

    let root = build_tree(&link, &default_tree_config()).unwrap();
    assert_eq!(root.name(), "real");
    assert_eq!(child_names(&root), vec!["file.txt"]);
}

#[test]
fn test_unreadable_directory_aborts_build() {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let tmp = create_fixture(&["locked/", "locked/secret.txt"]);
        let locked = tmp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = build_tree(tmp.path(), &default_tree_config());

        // Restore so TempDir cleanup succeeds.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root can skip this check: permissions do not apply.
        if !nix_is_root() {
            assert!(result.is_err(), "listing an unreadable dir must fail fast");
        }
    }
}

/// Whether the test runs as uid 0 (permission bits are not enforced then).
#[cfg(unix)]
fn nix_is_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
        .unwrap_or(false)
}
