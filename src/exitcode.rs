//! Stable exit codes, one per user-error kind

/// Successful termination (unreachable on the happy path: the process
/// image is replaced before it could exit 0)
pub const OK: i32 = 0;

/// Dispatcher invoked under its own name instead of a tool symlink
pub const CALLED_DIRECTLY: i32 = 1;

/// Argument words resolved to a directory, not a leaf executable
pub const NO_COMMAND_SPECIFIED: i32 = 2;

/// Explicitly specified context directory lacks the marker file
pub const CONTEXT_NOT_FOUND: i32 = 3;

/// Configured subcommand directory does not exist; also: context present
/// but subcommand not executable
pub const EXEC_PATH_MISSING: i32 = 4;

/// rc file exists but is not executable
pub const CONFIG_NOT_EXECUTABLE: i32 = 5;

/// Subcommand directory env var not set
pub const EXEC_PATH_NOT_CONFIGURED: i32 = 6;

/// No matching executable for the given argument words
pub const UNKNOWN_SUBCOMMAND: i32 = 7;

/// System error outside the user-error taxonomy (e.g. exec failed after
/// all checks passed), sysexits.h compatible
pub const OSERR: i32 = 71;
