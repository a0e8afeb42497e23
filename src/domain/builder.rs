//! Hierarchy builder: folds flat records into an org tree.

use std::borrow::Borrow;

use tracing::{debug, instrument, trace};

use crate::domain::node::OrgNode;
use crate::domain::record::{DivisionRecord, Nullable};

/// Builds the organization tree from `divisions` records.
///
/// Each record names a chain from department down to unit. Levels are strictly
/// nested: a branch is only considered when the same record names a division,
/// a unit only when it names a branch. Siblings are deduplicated by exact name
/// and the first record to introduce a node supplies its order and mailcode.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    skipped: usize,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records ignored by the last `build` for lacking a department.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[instrument(level = "debug", skip_all)]
    pub fn build<I>(&mut self, records: I) -> OrgNode
    where
        I: IntoIterator,
        I::Item: Borrow<DivisionRecord>,
    {
        self.skipped = 0;
        let mut root = OrgNode::root();

        for (pos, record) in records.into_iter().enumerate() {
            let record = record.borrow();
            if !Self::insert_record(&mut root, record) {
                debug!("record {}: no department, skipped", pos);
                self.skipped += 1;
            }
        }

        // Children stay in first-seen order; `order` is carried but not applied.
        root
    }

    /// Walk down from the root, creating missing nodes. Returns false when the
    /// record contributed nothing.
    fn insert_record(root: &mut OrgNode, record: &DivisionRecord) -> bool {
        let Some(department) = record.department_name() else {
            return false;
        };
        let Some(mut current) = Self::descend(root, department, record) else {
            return true;
        };

        for level in [&record.division, &record.branch, &record.unit] {
            let Nullable::Value(name) = level else {
                break;
            };
            match Self::descend(current, name, record) {
                Some(next) => current = next,
                None => break,
            }
        }
        true
    }

    /// Child `name` of `parent`, created from `record` if missing.
    fn descend<'a>(
        parent: &'a mut OrgNode,
        name: &str,
        record: &DivisionRecord,
    ) -> Option<&'a mut OrgNode> {
        let level_kind = parent.child_level_kind()?;
        if !parent.has_child(name) {
            trace!("new {} {:?} under {:?}", level_kind, name, parent.name());
            parent.add_child_node(OrgNode::with_metadata(
                level_kind,
                name,
                record.order.clone().into_option(),
                record.mailcode.clone().into_option(),
            ));
        }
        parent.get_child_mut(name)
    }
}
