//! swayswitch: list every sway window in a picker and focus the chosen one.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod switcher;

pub use cli::Cli;
pub use config::{AppConfig, ConfigManager};
pub use error::{CliError, CliResult};
pub use switcher::{SwitchOutcome, Switcher};

use std::io::Write;

/// Run the CLI with parsed arguments, writing any listing to `out`
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    if let Some(prompt) = cli.prompt.clone() {
        config.picker.prompt = prompt;
    }

    logging::init_logging(logging::resolve_level(cli.verbose, cli.quiet, &config.log_level));
    tracing::debug!(config_path = %manager.config_path().display(), "Starting");

    if cli.print_config {
        write_out(out, &config.to_toml()?)?;
        return Ok(());
    }

    let switcher = Switcher::new(config)?;

    if cli.list || cli.dry_run {
        let windows = switcher.query_windows().await?;
        let text = if cli.list {
            switcher::format_listing(&windows)
        } else {
            swayswitch_tree::format_menu(&windows)
        };
        write_out(out, &text)?;
        return Ok(());
    }

    let outcome = switcher.switch().await?;
    tracing::debug!(?outcome, "Done");
    Ok(())
}

fn write_out<W: Write>(out: &mut W, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
