//! Error conversion helpers for common I/O operations

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the path whose content could not be read.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path).with_read_context(&path)?;
    /// ```
    fn with_read_context(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_read_context(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
