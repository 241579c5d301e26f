//! Tree building: filesystem traversal, filtering and sorting.

pub(crate) mod walk;

use globset::GlobSet;
use std::path::{Path, PathBuf};

pub use walk::{build_ignore_set, build_tree};

/// A node in the directory tree.
///
/// The tree is an owned, acyclic structure: each directory exclusively owns
/// its children, in their final sorted order. It is built once, fully, before
/// any rendering, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A regular file, or any entry rendered as a leaf (symlinks when not
    /// followed, sockets, fifos, ...). `size` is present only when size
    /// collection is enabled and the entry is a regular file.
    File {
        name: String,
        path: PathBuf,
        size: Option<u64>,
    },
    /// A directory with its sorted children. An empty `children` vector is
    /// valid: the directory may be empty, or pruned by the depth limit.
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Display name (filename component only; the root node carries the base
    /// name of the resolved root path).
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Dir { name, .. } => name,
        }
    }

    /// Full filesystem path.
    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } | TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory node; empty slice for file nodes.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}

/// Ordering policy for siblings within a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortPolicy {
    /// Directories before files, then ascending name order within each class.
    #[default]
    DirsFirst,
    /// Ascending name order regardless of entry type.
    Name,
}

/// Configuration for tree building.
pub struct TreeConfig {
    /// Maximum traversal depth (`None` for unlimited). The root is depth 0;
    /// directories at the limit still appear, but unexpanded.
    pub max_depth: Option<usize>,
    /// Whether to include hidden entries (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symbolic links. When false, symlinks become terminal
    /// file-like nodes and are never traversed into.
    pub follow_symlinks: bool,
    /// Whether regular file nodes record their byte size.
    pub include_sizes: bool,
    /// Glob patterns for entries to exclude, matched against the path
    /// relative to the build root.
    pub ignore: GlobSet,
    /// Sibling ordering policy.
    pub sort: SortPolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: false,
            follow_symlinks: false,
            include_sizes: false,
            ignore: build_ignore_set(&[]),
            sort: SortPolicy::default(),
        }
    }
}
