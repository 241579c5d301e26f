use std::fs;
use tempfile::TempDir;
use treesnap::tree::{build_ignore_set, TreeConfig};

/// Default TreeConfig with the standard ignore patterns.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig {
        ignore: build_ignore_set(&[]),
        ..TreeConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Child names of a directory node, in stored order.
#[allow(dead_code)]
pub fn child_names(node: &treesnap::tree::TreeNode) -> Vec<String> {
    node.children()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}
