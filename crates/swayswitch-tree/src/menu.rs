//! Menu lines for the picker and parsing the chosen line back

use std::fmt::Write as _;

use crate::{
    error::{Result, TreeError},
    extract::WorkspaceWindow,
};

/// Render one line per window: `<b>GROUP: </b>NAME [ID]`
///
/// Line breaks in a name are rendered as spaces so a window never spans
/// more than one menu line.
pub fn format_menu(windows: &[WorkspaceWindow]) -> String {
    let mut menu = String::new();
    for window in windows {
        // writing to a String cannot fail
        let _ = writeln!(
            menu,
            "<b>{}: </b>{} [{}]",
            window.group,
            window.node.display_name().replace(['\n', '\r'], " "),
            window.node.id
        );
    }
    menu
}

/// Extract the container id from a selected menu line.
///
/// The id sits between the last `[` and the closing `]`, so window names
/// that contain brackets themselves are fine.
pub fn parse_selection(line: &str) -> Result<i64> {
    let line = line.trim_end();
    if line.is_empty() {
        return Err(TreeError::EmptySelection);
    }

    let malformed = || TreeError::MalformedSelection(line.to_string());
    let inner = line.strip_suffix(']').ok_or_else(malformed)?;
    let start = inner.rfind('[').ok_or_else(malformed)?;
    inner[start + 1..].trim().parse().map_err(|_| malformed())
}
