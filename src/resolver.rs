//! Subcommand resolution: argument words walked as a path under the exec path

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::util::path::PathAccessExt;

/// Outcome of walking the argument words under the exec path.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A leaf executable plus the unconsumed argument tail.
    Command { path: PathBuf, args: Vec<String> },
    /// The words ran out inside a directory (zero words lands on the exec
    /// path root). The caller treats this as "no command specified".
    Directory(PathBuf),
}

/// Consume argument words left to right, extending a candidate path one
/// segment at a time under `exec_path`.
///
/// Each extended candidate must be readable and executable by the current
/// user; the first regular file encountered is the subcommand and everything
/// after it is the argument tail. An inaccessible candidate fails
/// immediately, naming only the words consumed so far. At most one path
/// extension per argument word.
pub fn resolve(
    exec_path: &Path,
    args: &[String],
    main_name: &str,
) -> SubcommanderResult<Resolved> {
    let mut candidate = exec_path.to_path_buf();

    for (n, word) in args.iter().enumerate() {
        candidate.push(word);

        if !candidate.is_readable_executable() {
            return Err(SubcommanderError::UnknownSubcommand {
                main_name: main_name.to_string(),
                command: args[..=n].join(" "),
            });
        }

        if candidate.is_file() {
            debug!(subcommand = %candidate.display(), "resolved subcommand");
            return Ok(Resolved::Command {
                path: candidate,
                args: args[n + 1..].to_vec(),
            });
        }
        // a directory: keep consuming words
    }

    Ok(Resolved::Directory(candidate))
}
