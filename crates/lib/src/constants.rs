//! Constants used throughout the pathwise library.
//!
//! This module provides central definitions for the reserved characters of the
//! path syntax and the limits of the compiled qualifier form.

/// Delimiter used between path segments when none is configured.
pub const DEFAULT_DELIMITER: char = '.';

/// Escape character. Escapes the delimiter, itself, or any other character.
/// It can never be used as a delimiter.
pub const ESCAPE: char = '\\';

/// Segment that appends a new element when setting into a list.
pub const APPEND_MARKER: &str = "+";

/// Maximum number of segments a compiled qualifier may hold.
pub const MAX_SEGMENTS: usize = 254;

/// Length reported by [`Value::len`](crate::Value::len) for values that have none.
pub const NO_LEN: isize = -1;
