//! Window tree document model

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Container kind reported by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Root,
    Output,
    Workspace,
    Con,
    FloatingCon,
    Dockarea,
    #[serde(other)]
    Unknown,
}

/// One container of the tree.
///
/// Only the fields the switcher reads are modelled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default = "unknown_type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub floating_nodes: Vec<Node>,
}

fn unknown_type() -> NodeType {
    NodeType::Unknown
}

impl Node {
    pub fn new(id: i64, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id,
            name: Some(name.into()),
            node_type,
            nodes: vec![],
            floating_nodes: vec![],
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_floating(mut self, floating: Vec<Node>) -> Self {
        self.floating_nodes = floating;
        self
    }

    /// Name, or an empty string for unnamed containers
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// A node without tiled children
    pub fn is_leaf(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parse the JSON tree document printed by `swaymsg -t get_tree`
pub fn parse_tree(bytes: &[u8]) -> Result<Node> {
    Ok(serde_json::from_slice(bytes)?)
}
