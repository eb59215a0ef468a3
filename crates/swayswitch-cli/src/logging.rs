//! Logging setup for the CLI: diagnostics go to stderr so stdout stays free
//! for --list and --dry-run output.

use tracing::Level;

/// Pick the max level from CLI flags, falling back to the configured level
pub fn resolve_level(verbose: bool, quiet: bool, configured: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }
    if verbose {
        return Level::DEBUG;
    }
    match configured.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Initialize the tracing subscriber
pub fn init_logging(level: Level) {
    let detailed = level >= Level::DEBUG;

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(detailed)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_win_over_config() {
        assert_eq!(resolve_level(false, true, "trace"), Level::ERROR);
        assert_eq!(resolve_level(true, false, "error"), Level::DEBUG);
    }

    #[test]
    fn test_configured_level() {
        assert_eq!(resolve_level(false, false, "INFO"), Level::INFO);
        assert_eq!(resolve_level(false, false, "trace"), Level::TRACE);
    }

    #[test]
    fn test_unknown_level_falls_back_to_warn() {
        assert_eq!(resolve_level(false, false, "loud"), Level::WARN);
    }
}
