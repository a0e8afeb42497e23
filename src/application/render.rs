//! Output rendering for a finished org tree

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termtree::Tree;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::OrgNode;

/// How the tree is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// Text org chart
    Tree,
}

pub fn render(root: &OrgNode, format: OutputFormat) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(root).map_err(render_err),
        OutputFormat::Pretty => serde_json::to_string_pretty(root).map_err(render_err),
        OutputFormat::Tree => Ok(to_text_tree(root).to_string().trim_end().to_string()),
    }
}

fn render_err(e: serde_json::Error) -> ApplicationError {
    ApplicationError::Render {
        message: e.to_string(),
    }
}

/// Org chart as a `termtree`, one `name [type]` line per node.
pub fn to_text_tree(node: &OrgNode) -> Tree<String> {
    let label = format!("{} [{}]", node.name(), node.level_kind());
    let leaves: Vec<_> = node.children().iter().map(to_text_tree).collect();
    Tree::new(label).with_leaves(leaves)
}
