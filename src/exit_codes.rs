//! Exit code constants for the fixture-render CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed input files)
//! - 2: Record construction failure (missing key, wrong shape)
//! - 3: Rendered output does not match the expected fixture

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown profile, unreadable or malformed files.
pub const USER_ERROR: i32 = 1;

/// The supplied values could not be assembled into a record.
pub const BUILD_FAILURE: i32 = 2;

/// `check` found a difference between rendered and expected output.
pub const MISMATCH: i32 = 3;
