use clap::Parser;
use std::path::PathBuf;

use crate::tree::SortPolicy;

const EXAMPLES: &str = "\
Examples:
  treesnap                        Print the current directory
  treesnap -L 2 src               Limit the tree to two levels
  treesnap -I '*.log' -I 'tmp'    Replace the default ignore list
  treesnap -a --sizes             Include dotfiles and show file sizes
";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treesnap",
    version,
    about = "Directory tree snapshot printer",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to print (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Max display depth
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Glob patterns to exclude, replacing the default list (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub include_hidden: bool,

    /// Follow symbolic links
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Show file sizes
    #[arg(short = 's', long = "sizes")]
    pub sizes: bool,

    /// Print absolute paths instead of base names
    #[arg(long = "full-path")]
    pub full_path: bool,

    /// Sibling ordering policy
    #[arg(long = "sort", value_enum, default_value_t = SortPolicy::DirsFirst)]
    pub sort: SortPolicy,
}
