//! Flattening the tree into per-workspace window lists

use tracing::debug;

use crate::node::{Node, NodeType};

/// Name of the internal output that holds the scratchpad
const SCRATCHPAD_OUTPUT: &str = "__i3";

/// A window together with the 1-based number of the workspace group it was
/// found in
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceWindow {
    pub group: usize,
    pub node: Node,
}

/// Collect the tiled leaves below `node`, depth-first in document order.
///
/// Floating children are not visited.
pub fn extract_leaf_nodes(node: &Node) -> Vec<&Node> {
    let mut leaves = Vec::new();
    collect_leaves(node, &mut leaves);
    leaves
}

fn collect_leaves<'a>(node: &'a Node, leaves: &mut Vec<&'a Node>) {
    for child in &node.nodes {
        if child.is_leaf() {
            leaves.push(child);
        } else {
            collect_leaves(child, leaves);
        }
    }
}

/// List every window on every real output.
///
/// Each workspace starts a new group; its floating windows come before its
/// tiled ones.
pub fn workspace_windows(root: &Node) -> Vec<WorkspaceWindow> {
    let mut windows = Vec::new();
    let mut group = 0;

    let outputs = root
        .nodes
        .iter()
        .filter(|o| o.node_type == NodeType::Output && o.name.as_deref() != Some(SCRATCHPAD_OUTPUT));

    for output in outputs {
        for workspace in output
            .nodes
            .iter()
            .filter(|w| w.node_type == NodeType::Workspace)
        {
            group += 1;
            let floating = workspace.floating_nodes.iter();
            let tiled = extract_leaf_nodes(workspace).into_iter();
            windows.extend(floating.chain(tiled).map(|node| WorkspaceWindow {
                group,
                node: node.clone(),
            }));
        }
    }

    debug!(workspaces = group, windows = windows.len(), "Flattened window tree");
    windows
}
