use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

use super::{SortPolicy, TreeConfig, TreeNode};
use crate::error::{Result, TreeError};

/// Patterns excluded when the caller supplies none of their own. Each pattern
/// names the directory itself at any depth; pruning before recursion makes
/// the exclusion transitive to everything underneath.
const DEFAULT_IGNORES: &[&str] = &[
    "**/node_modules",
    "**/.git",
    "**/dist",
    "**/build",
    "**/.next",
    "**/.turbo",
    "**/.cache",
];

/// Build a GlobSet from user patterns. An empty pattern list selects the
/// built-in default ignores; a non-empty list replaces them entirely.
/// Invalid patterns are skipped and reported to stderr.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    if user_patterns.is_empty() {
        for pattern in DEFAULT_IGNORES {
            if let Ok(g) = Glob::new(pattern) {
                builder.add(g);
            }
        }
    }
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        eprintln!(
            "treesnap: invalid ignore pattern(s), skipped: {:?}",
            invalid
        );
    }
    builder.build().unwrap_or_else(|e| {
        eprintln!("treesnap: failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}

/// Build the tree from a root path.
///
/// The root is resolved to an absolute path and must be a directory. Every
/// subtree is fully resolved before its parent node is returned, so the
/// result is a complete, immutable snapshot. Any I/O error while listing
/// aborts the whole build; there is no partial-tree recovery.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<TreeNode> {
    let abs_root = root.canonicalize()?;
    let meta = fs::symlink_metadata(&abs_root)?;
    if !meta.is_dir() {
        return Err(TreeError::NotADirectory(abs_root));
    }
    walk(&abs_root, &abs_root, 0, config)
}

/// A directory entry that survived filtering, carrying the readdir type hint
/// used for dirs-first ordering.
struct ChildEntry {
    name: String,
    path: PathBuf,
    is_dir_hint: bool,
}

fn walk(root: &Path, path: &Path, depth: usize, config: &TreeConfig) -> Result<TreeNode> {
    let name = base_name(path);
    let lst = fs::symlink_metadata(path)?;

    // Symlinks become terminal file-like nodes unless followed. This is the
    // only cycle-prevention mechanism: the link target is never stat'ed, so
    // traversal terminates even for cyclic links.
    if lst.file_type().is_symlink() && !config.follow_symlinks {
        return Ok(TreeNode::File {
            name: format!("{name} -> (symlink)"),
            path: path.to_path_buf(),
            size: None,
        });
    }

    let meta = if lst.file_type().is_symlink() {
        fs::metadata(path)?
    } else {
        lst
    };

    if meta.is_dir() {
        // At or past the depth limit the directory still appears, so callers
        // can see that truncated branches exist.
        if config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(TreeNode::Dir {
                name,
                path: path.to_path_buf(),
                children: Vec::new(),
            });
        }

        let mut entries = list_entries(root, path, config)?;
        sort_entries(&mut entries, config.sort);

        let mut children = Vec::with_capacity(entries.len());
        for entry in &entries {
            children.push(walk(root, &entry.path, depth + 1, config)?);
        }

        return Ok(TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
        });
    }

    if meta.is_file() {
        return Ok(TreeNode::File {
            name,
            path: path.to_path_buf(),
            size: config.include_sizes.then(|| meta.len()),
        });
    }

    // Other types (fifo, socket, device, ...).
    Ok(TreeNode::File {
        name: format!("{name} (special)"),
        path: path.to_path_buf(),
        size: None,
    })
}

/// List a directory, dropping hidden and ignored entries before recursion so
/// excluded directories are never stat'ed further.
fn list_entries(root: &Path, dir: &Path, config: &TreeConfig) -> Result<Vec<ChildEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();

        if !config.include_hidden && name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if config.ignore.is_match(relative_for_match(root, &path)) {
            continue;
        }

        let is_dir_hint = entry.file_type()?.is_dir();
        entries.push(ChildEntry {
            name,
            path,
            is_dir_hint,
        });
    }
    Ok(entries)
}

/// Root-relative path with separators normalized to forward slashes, the form
/// ignore patterns are matched against regardless of host convention.
fn relative_for_match(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let s = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Sort the filtered entry list in place, per level, before recursing.
/// Name comparison is case-sensitive ascending. Under dirs-first, the readdir
/// type hint decides the class, so an unfollowed symlink to a directory sorts
/// with the files it will be rendered among.
fn sort_entries(entries: &mut [ChildEntry], policy: SortPolicy) {
    entries.sort_by(|a, b| {
        if policy == SortPolicy::DirsFirst && a.is_dir_hint != b.is_dir_hint {
            return if a.is_dir_hint {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            };
        }
        a.name.cmp(&b.name)
    });
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
