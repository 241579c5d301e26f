#![forbid(unsafe_code)]
//! TreeSnap — print a snapshot of a directory as an ASCII tree.
//!
//! The crate is split into two halves used in sequence: [`tree`] walks the
//! filesystem and builds an owned, immutable [`tree::TreeNode`], and
//! [`render`] turns that tree into a multi-line text block with box-drawing
//! connectors.

pub mod cli;
pub mod error;
pub mod render;
pub mod tree;
