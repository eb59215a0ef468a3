use std::path::PathBuf;

use clap::Parser;

/// Pick a window from a menu and focus it
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "swayswitch", version, about)]
pub struct Cli {
    /// Prompt shown by the picker
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Config file (default: $XDG_CONFIG_HOME/swayswitch/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the menu instead of running the picker
    #[arg(long)]
    pub dry_run: bool,

    /// Print every window as `group<TAB>id<TAB>name` and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
