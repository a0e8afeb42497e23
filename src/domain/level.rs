//! Fixed organizational levels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank of a node in the organization, from the root down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Government,
    Department,
    Division,
    Branch,
    Unit,
}

impl LevelKind {
    /// Level one step below this one, `None` for `Unit`.
    pub fn child(self) -> Option<LevelKind> {
        match self {
            LevelKind::Government => Some(LevelKind::Department),
            LevelKind::Department => Some(LevelKind::Division),
            LevelKind::Division => Some(LevelKind::Branch),
            LevelKind::Branch => Some(LevelKind::Unit),
            LevelKind::Unit => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LevelKind::Government => "government",
            LevelKind::Department => "department",
            LevelKind::Division => "division",
            LevelKind::Branch => "branch",
            LevelKind::Unit => "unit",
        }
    }
}

impl fmt::Display for LevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
