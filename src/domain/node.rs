//! Recursive org-chart node

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Number;

use crate::domain::level::LevelKind;

/// Name of the root government node.
pub const ROOT_NAME: &str = "Yukon";

/// One organizational unit and the units directly below it.
///
/// Children keep first-seen order. A private name index makes sibling lookup
/// O(1); it always points at the first child carrying a given name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgNode {
    #[serde(rename = "type")]
    level_kind: LevelKind,
    name: String,
    order: Option<Number>,
    mailcode: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<OrgNode>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl OrgNode {
    pub fn new(level_kind: LevelKind, name: impl Into<String>) -> Self {
        Self::with_metadata(level_kind, name, None, None)
    }

    pub fn with_metadata(
        level_kind: LevelKind,
        name: impl Into<String>,
        order: Option<Number>,
        mailcode: Option<String>,
    ) -> Self {
        Self {
            level_kind,
            name: name.into(),
            order,
            mailcode,
            children: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The fixed `government` root: `Yukon`, order 0, no mailcode.
    pub fn root() -> Self {
        Self::with_metadata(LevelKind::Government, ROOT_NAME, Some(Number::from(0)), None)
    }

    pub fn level_kind(&self) -> LevelKind {
        self.level_kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> Option<&Number> {
        self.order.as_ref()
    }

    pub fn mailcode(&self) -> Option<&str> {
        self.mailcode.as_deref()
    }

    pub fn children(&self) -> &[OrgNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Level of this node's children, `None` at `unit`.
    pub fn child_level_kind(&self) -> Option<LevelKind> {
        self.level_kind.child()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// First direct child named `name`. A miss is not an error.
    pub fn get_child(&self, name: &str) -> Option<&OrgNode> {
        self.index.get(name).map(|&pos| &self.children[pos])
    }

    pub fn get_child_mut(&mut self, name: &str) -> Option<&mut OrgNode> {
        let pos = *self.index.get(name)?;
        self.children.get_mut(pos)
    }

    /// Append a child with unset order and mailcode.
    ///
    /// No duplicate check: callers wanting dedup ask `has_child` first.
    pub fn add_child(&mut self, level_kind: LevelKind, name: impl Into<String>) -> &mut OrgNode {
        self.add_child_node(OrgNode::new(level_kind, name))
    }

    /// Append an already populated child. No duplicate check.
    pub fn add_child_node(&mut self, child: OrgNode) -> &mut OrgNode {
        let pos = self.children.len();
        self.index.entry(child.name.clone()).or_insert(pos);
        self.children.push(child);
        &mut self.children[pos]
    }

    /// Number of levels in this subtree, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OrgNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in this subtree, counting this node.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }
}

pub struct NodeIter<'a> {
    stack: Vec<&'a OrgNode>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}
