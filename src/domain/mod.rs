//! Domain layer: org tree types and the hierarchy builder
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod level;
pub mod node;
pub mod record;

pub use builder::HierarchyBuilder;
pub use level::LevelKind;
pub use node::{NodeIter, OrgNode, ROOT_NAME};
pub use record::{DivisionRecord, Nullable};
