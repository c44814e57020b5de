//! Stable exit codes for toybox commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid arguments or configuration, or any other error.
pub const INVALID: i32 = 1;
/// `toybox grid --strict` left at least one word unplaced.
pub const UNPLACED: i32 = 2;
