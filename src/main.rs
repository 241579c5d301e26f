#![forbid(unsafe_code)]
mod cli;
mod error;
mod render;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use render::RenderConfig;
use tree::{build_ignore_set, TreeConfig};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treesnap: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();

    let tree_config = TreeConfig {
        max_depth: args.max_depth,
        include_hidden: args.include_hidden,
        follow_symlinks: args.follow_symlinks,
        include_sizes: args.sizes,
        ignore: build_ignore_set(&args.ignore),
        sort: args.sort,
    };

    let root = tree::build_tree(&args.path, &tree_config)
        .with_context(|| format!("{}", args.path.display()))?;

    let render_config = RenderConfig {
        show_full_path: args.full_path,
        show_sizes: args.sizes,
        ..RenderConfig::default()
    };

    println!("{}", render::render_tree(&root, &render_config));
    Ok(())
}
