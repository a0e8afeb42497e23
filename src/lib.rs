//! Fold flat organizational records into a nested org-chart tree.
//!
//! Records name a chain of department, division, branch and unit. The
//! [`domain::HierarchyBuilder`] merges them under a fixed `government` root,
//! deduplicating siblings by name.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{DivisionRecord, HierarchyBuilder, LevelKind, OrgNode};
