//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any fatal error: missing argument, unreadable input, invalid JSON, bad config
pub const FAILURE: i32 = 1;
