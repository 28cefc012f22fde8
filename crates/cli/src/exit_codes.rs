//! CLI Exit Code Registry
//!
//! Single source of truth for `scholar-stats` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 1    | General error (unspecified)               |
//! | 2    | Usage error (bad args)                    |
//! | 3    | Cannot read input / write output          |
//! | 4    | Records or taxonomy are not valid JSON    |
//! | 5    | Engine config failed to parse or validate |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// File could not be read or written.
pub const EXIT_IO: u8 = 3;

/// Records or taxonomy document could not be parsed.
pub const EXIT_PARSE: u8 = 4;

/// Engine config override is malformed or fails validation.
pub const EXIT_INVALID_CONFIG: u8 = 5;
