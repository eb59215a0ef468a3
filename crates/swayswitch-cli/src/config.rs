//! Configuration loading: optional TOML file layered under `SWAYSWITCH_*`
//! environment variables

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use swayswitch_process::{PipeConfig, DEFAULT_READ_BUFFER_SIZE, MAX_READ_BUFFER_SIZE};

use crate::error::{CliError, CliResult};

/// Placeholder in picker arguments replaced by the prompt text
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

const ENV_PREFIX: &str = "SWAYSWITCH";

/// Effective application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// tracing level used when neither -v nor -q is given
    pub log_level: String,
    pub sway: SwayConfig,
    pub picker: PickerConfig,
    pub pipe: PipeSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    /// IPC client used for both the tree query and the focus command
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub program: String,
    pub prompt: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeSettings {
    pub read_buffer_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            sway: SwayConfig::default(),
            picker: PickerConfig::default(),
            pipe: PipeSettings::default(),
        }
    }
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            program: "swaymsg".to_string(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            program: "wofi".to_string(),
            prompt: "Windows: ".to_string(),
            args: ["-p", PROMPT_PLACEHOLDER, "-d", "-i", "-m", "-k", "/dev/null", "--hide-scroll"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for PipeSettings {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            timeout_secs: None,
        }
    }
}

impl PickerConfig {
    /// Arguments with the prompt substituted in
    pub fn resolved_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(PROMPT_PLACEHOLDER, &self.prompt))
            .collect()
    }
}

impl AppConfig {
    pub fn validate(&self) -> CliResult<()> {
        if self.sway.program.trim().is_empty() {
            return Err(CliError::Config("sway.program must not be empty".to_string()));
        }
        if self.picker.program.trim().is_empty() {
            return Err(CliError::Config("picker.program must not be empty".to_string()));
        }
        if self.pipe.read_buffer_size == 0 {
            return Err(CliError::Config(
                "pipe.read_buffer_size must be greater than 0".to_string(),
            ));
        }
        if self.pipe.read_buffer_size > MAX_READ_BUFFER_SIZE {
            return Err(CliError::Config(format!(
                "pipe.read_buffer_size must be at most {}",
                MAX_READ_BUFFER_SIZE
            )));
        }
        if self.pipe.timeout_secs == Some(0) {
            return Err(CliError::Config(
                "pipe.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Pipe settings for the process runner
    pub fn pipe_config(&self) -> PipeConfig {
        let config = PipeConfig::new().read_buffer_size(self.pipe.read_buffer_size);
        match self.pipe.timeout_secs {
            Some(secs) => config.timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager for the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swayswitch")
            .join("config.toml")
    }

    /// Load and validate the configuration. A missing file is not an error.
    pub fn load(&self) -> CliResult<AppConfig> {
        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.validate()?;

        tracing::debug!(path = %self.config_path.display(), "Configuration loaded");
        Ok(app_config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manager_for(contents: &str) -> (tempfile::NamedTempFile, ConfigManager) {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let manager = ConfigManager::with_path(file.path()).with_env_prefix("SWAYSWITCH_UNIT_TEST");
        (file, manager)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("absent.toml"))
            .with_env_prefix("SWAYSWITCH_UNIT_TEST");
        assert_eq!(manager.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let (_file, manager) = manager_for(
            r#"
log_level = "debug"

[picker]
program = "fuzzel"
args = ["--dmenu", "--prompt", "{prompt}"]

[pipe]
timeout_secs = 30
"#,
        );
        let config = manager.load().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sway.program, "swaymsg");
        assert_eq!(config.picker.program, "fuzzel");
        assert_eq!(config.picker.resolved_args(), ["--dmenu", "--prompt", "Windows: "]);
        assert_eq!(config.pipe.timeout_secs, Some(30));
        assert_eq!(config.pipe_config().timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let (_file, manager) = manager_for("[pipe]\nread_buffer_size = 0\n");
        assert!(matches!(manager.load(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_oversized_buffer_rejected() {
        let (_file, manager) = manager_for("[pipe]\nread_buffer_size = 1099511627776\n");
        assert!(matches!(manager.load(), Err(CliError::Config(_))));

        let mut config = AppConfig::default();
        config.pipe.read_buffer_size = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_picker_args() {
        let args = PickerConfig::default().resolved_args();
        assert_eq!(
            args,
            ["-p", "Windows: ", "-d", "-i", "-m", "-k", "/dev/null", "--hide-scroll"]
        );
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let rendered = AppConfig::default().to_toml().unwrap();
        assert!(rendered.contains("program = \"swaymsg\""));
        assert!(!rendered.contains("timeout_secs"));
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
