//! # swayswitch-tree
//!
//! Turns the compositor's window tree into the flat, numbered window list
//! shown in the picker, and maps a picked line back to a container id.

pub mod error;
pub mod extract;
pub mod menu;
pub mod node;

pub use error::{Result, TreeError};
pub use extract::{extract_leaf_nodes, workspace_windows, WorkspaceWindow};
pub use menu::{format_menu, parse_selection};
pub use node::{parse_tree, Node, NodeType};
