//! Generic subcommand dispatcher.
//!
//! One binary, symlinked under many tool names, exposes a directory of
//! executables as a single multi-level CLI. Invoked as `mytool db migrate`,
//! it bounces once through `~/.mytoolrc`, walks `db migrate` as a path under
//! `$MYTOOL_EXEC_PATH`, picks up an optional `.mytool.context` executable
//! from the working directory's ancestry, and execs the result in place of
//! itself. No per-subcommand dispatch code required; being an executable
//! file in the right place is the whole plugin API.

pub mod context;
pub mod dispatch;
pub mod errors;
pub mod exec_path;
pub mod exitcode;
pub mod identity;
pub mod launcher;
pub mod rcfile;
pub mod resolver;
pub mod util;
