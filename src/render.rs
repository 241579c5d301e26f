//! Tree-to-text rendering with box-drawing connectors.
//!
//! Rendering is a pure function of an already-built tree and a
//! [`RenderConfig`]: no I/O, no shared state, byte-identical output for
//! identical input.

use crate::tree::TreeNode;

/// Configuration for the rendering pipeline.
pub struct RenderConfig {
    /// Label nodes with their absolute path instead of the base name.
    pub show_full_path: bool,
    /// Append a human-readable size suffix to file nodes that carry one.
    pub show_sizes: bool,
    /// String used to extend the prefix for each nesting level.
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_full_path: false,
            show_sizes: false,
            indent: "    ".to_string(),
        }
    }
}

/// Render a tree into one text block. Lines are joined with `\n`; no trailing
/// newline is appended.
pub fn render_tree(node: &TreeNode, config: &RenderConfig) -> String {
    let mut lines = Vec::new();

    // The root label gets no connector.
    lines.push(label(node, config));
    let children = node.children();
    for (idx, child) in children.iter().enumerate() {
        draw(child, "", idx == children.len() - 1, config, &mut lines);
    }

    lines.join("\n")
}

fn draw(node: &TreeNode, prefix: &str, is_last: bool, config: &RenderConfig, lines: &mut Vec<String>) {
    let branch = if is_last {
        "\u{2514}\u{2500}\u{2500} " // └──
    } else {
        "\u{251c}\u{2500}\u{2500} " // ├──
    };
    lines.push(format!("{prefix}{branch}{}", label(node, config)));

    let children = node.children();
    if children.is_empty() {
        return;
    }

    let child_prefix = format!("{prefix}{}", continuation(&config.indent, is_last));
    for (idx, child) in children.iter().enumerate() {
        draw(child, &child_prefix, idx == children.len() - 1, config, lines);
    }
}

/// Prefix extension below a just-rendered directory: plain indent when the
/// directory closed its sibling group, otherwise a vertical continuation bar
/// followed by the indent minus its last character, keeping columns aligned.
fn continuation(indent: &str, is_last: bool) -> String {
    if is_last {
        return indent.to_string();
    }
    let keep = indent.chars().count().saturating_sub(1);
    let mut out = String::from("\u{2502}"); // │
    out.extend(indent.chars().take(keep));
    out
}

fn label(node: &TreeNode, config: &RenderConfig) -> String {
    let base = if config.show_full_path {
        node.path().display().to_string()
    } else {
        node.name().to_string()
    };
    if config.show_sizes {
        if let TreeNode::File {
            size: Some(bytes), ..
        } = node
        {
            return format!("{base} ({})", format_size(*bytes));
        }
    }
    base
}

/// Human-readable byte size: divide through B, KB, MB, GB, TB, stopping below
/// 1024 or at the last unit. Bytes render as an integer; any divided unit
/// with exactly one decimal digit.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut i = 0;
    while size >= 1024.0 && i < UNITS.len() - 1 {
        size /= 1024.0;
        i += 1;
    }
    if i == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{size:.1} {}", UNITS[i])
    }
}
