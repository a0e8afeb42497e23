//! Conversion service
//!
//! Reads a flat divisions document and folds it into the org tree.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DivisionRecord, HierarchyBuilder, OrgNode};
use crate::infrastructure::traits::FileSystem;

/// Default name of the top-level array holding the records.
pub const DEFAULT_RECORDS_KEY: &str = "divisions";

/// Service turning a divisions file into an `OrgNode` tree.
pub struct ConversionService {
    fs: Arc<dyn FileSystem>,
    records_key: String,
}

impl ConversionService {
    /// Create a new conversion service.
    pub fn new(fs: Arc<dyn FileSystem>, records_key: impl Into<String>) -> Self {
        Self {
            fs,
            records_key: records_key.into(),
        }
    }

    /// Read, parse and build in one go.
    #[instrument(level = "debug", skip(self))]
    pub fn convert(&self, path: Option<&Path>) -> ApplicationResult<OrgNode> {
        let records = self.read_records(path)?;
        let mut builder = HierarchyBuilder::new();
        let root = builder.build(&records);
        debug!(
            "convert: {} records, {} skipped, {} nodes",
            records.len(),
            builder.skipped(),
            root.node_count()
        );
        Ok(root)
    }

    /// Load the records from `path`.
    ///
    /// Fails fast on a missing or empty path, an unreadable file, unreadable
    /// content or invalid JSON.
    pub fn read_records(&self, path: Option<&Path>) -> ApplicationResult<Vec<DivisionRecord>> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(ApplicationError::MissingInput),
        };
        if !self.fs.is_readable(path) {
            return Err(ApplicationError::Unreadable {
                path: path.to_path_buf(),
            });
        }
        let content = self.fs.read_to_string(path).with_read_context(path)?;
        self.parse_records(&content)
    }

    /// Parse a divisions document.
    ///
    /// The top level must be an object. A missing or `null` records array means
    /// no records. Entries that are not objects or whose department has the
    /// wrong type are skipped.
    pub fn parse_records(&self, content: &str) -> ApplicationResult<Vec<DivisionRecord>> {
        let mut document: Map<String, Value> = serde_json::from_str(content)?;

        let items = match document.remove(&self.records_key) {
            None | Some(Value::Null) => {
                debug!("no `{}` array, treating as empty", self.records_key);
                Vec::new()
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                let msg = format!("`{}` is not an array", self.records_key);
                return Err(ApplicationError::Parse(serde::de::Error::custom(msg)));
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .filter_map(|(pos, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("record {}: ignored, {}", pos, e);
                    None
                }
            })
            .collect();
        Ok(records)
    }
}
