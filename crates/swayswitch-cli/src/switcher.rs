//! Query the tree, run the picker, focus the chosen container

use swayswitch_process::{CommandSpec, PipeRunner};
use swayswitch_tree::{format_menu, parse_selection, parse_tree, workspace_windows, TreeError, WorkspaceWindow};
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// What a switch attempt ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Focused(i64),
    /// Picker closed without a selection
    Cancelled,
    NoWindows,
}

pub struct Switcher {
    runner: PipeRunner,
    config: AppConfig,
}

impl Switcher {
    pub fn new(config: AppConfig) -> CliResult<Self> {
        let runner = PipeRunner::with_config(config.pipe_config())?;
        Ok(Self { runner, config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Every window on every workspace, in tree order
    pub async fn query_windows(&self) -> CliResult<Vec<WorkspaceWindow>> {
        let cmd = CommandSpec::new(&self.config.sway.program).args(["-t", "get_tree"]);
        let output = self
            .runner
            .run_capturing_output(&cmd)
            .await
            .and_then(|output| output.ensure_success())
            .map_err(CliError::TreeQuery)?;

        let root = parse_tree(output.stdout())?;
        Ok(workspace_windows(&root))
    }

    /// Show the menu and return the picked container id, if any
    pub async fn pick(&self, windows: &[WorkspaceWindow]) -> CliResult<Option<i64>> {
        let cmd = CommandSpec::new(&self.config.picker.program).args(self.config.picker.resolved_args());
        let menu = format_menu(windows);

        let output = self
            .runner
            .run_feeding_and_capturing(&cmd, menu.as_bytes())
            .await
            .map_err(CliError::Picker)?;

        let selection = output.stdout_lossy();
        if !output.success() {
            if selection.trim().is_empty() {
                debug!(code = ?output.code(), "Picker closed without a selection");
                return Ok(None);
            }
            warn!(code = ?output.code(), "Picker exited unsuccessfully, using its output anyway");
        }

        // only the first line counts if the picker returned several
        let line = selection.lines().next().unwrap_or("");
        match parse_selection(line) {
            Ok(id) => Ok(Some(id)),
            Err(TreeError::EmptySelection) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Focus a container by id
    pub async fn focus(&self, con_id: i64) -> CliResult<()> {
        let cmd = CommandSpec::new(&self.config.sway.program).args([format!("[con_id={}]", con_id), "focus".to_string()]);
        self.runner
            .run(&cmd)
            .await
            .and_then(|report| report.ensure_success())
            .map_err(CliError::Focus)?;

        info!(con_id, "Focused window");
        Ok(())
    }

    /// Full query, pick, focus sequence
    pub async fn switch(&self) -> CliResult<SwitchOutcome> {
        let windows = self.query_windows().await?;
        if windows.is_empty() {
            info!("No windows to switch to");
            return Ok(SwitchOutcome::NoWindows);
        }

        match self.pick(&windows).await? {
            Some(con_id) => {
                self.focus(con_id).await?;
                Ok(SwitchOutcome::Focused(con_id))
            }
            None => Ok(SwitchOutcome::Cancelled),
        }
    }
}

/// Tab-separated listing used by `--list`
pub fn format_listing(windows: &[WorkspaceWindow]) -> String {
    windows
        .iter()
        .map(|w| format!("{}\t{}\t{}\n", w.group, w.node.id, w.node.display_name()))
        .collect()
}
