//! Final launch: context env handoff and process-image replacement

use std::convert::Infallible;
use std::env;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::identity::Identity;
use crate::util::path::PathAccessExt;
use crate::util::process::replace_process;

/// Prepare `$<NAME>_CONTEXT` for the process about to be exec'd.
///
/// With a context present and the subcommand readable+executable, the
/// variable is set to the marker file's containing directory, overwriting
/// whatever the caller had it set to. A readable-but-not-executable
/// subcommand under a context is an error even though the context, not the
/// subcommand, is what gets exec'd. In every other case the variable is
/// removed so no stale context leaks into a subcommand that never asked
/// for one. The check order is deliberate and mirrors the original tool.
pub fn apply_context_env(
    identity: &Identity,
    subcommand: &Path,
    contextfile: Option<&Path>,
) -> SubcommanderResult<()> {
    match contextfile {
        Some(context_file) if subcommand.is_readable_executable() => {
            let context_dir = context_file.parent().unwrap_or(Path::new("/"));
            env::set_var(&identity.context_env_var, context_dir);
        }
        Some(context_file) if subcommand.is_readable() => {
            return Err(SubcommanderError::ContextRequiresExecutable(
                context_file.to_path_buf(),
            ));
        }
        _ => {
            env::remove_var(&identity.context_env_var);
        }
    }
    Ok(())
}

/// Replace this process with the context executable (handed the subcommand
/// as its first argument) or with the subcommand directly.
///
/// Does not return on success. A failing exec at this point means the
/// filesystem changed underneath us after the permission checks passed;
/// that race is accepted, not defended against, and surfaces as a fatal
/// I/O error.
pub fn launch(
    identity: &Identity,
    subcommand: &Path,
    args: &[String],
    contextfile: Option<&Path>,
) -> SubcommanderResult<Infallible> {
    apply_context_env(identity, subcommand, contextfile)?;

    let cmd = match contextfile {
        Some(context_file) => {
            debug!(
                context = %context_file.display(),
                subcommand = %subcommand.display(),
                "launching via context"
            );
            let mut cmd = Command::new(context_file);
            cmd.arg(subcommand).args(args);
            cmd
        }
        None => {
            debug!(subcommand = %subcommand.display(), "launching subcommand");
            let mut cmd = Command::new(subcommand);
            cmd.args(args);
            cmd
        }
    };

    let target = contextfile.unwrap_or(subcommand);
    let err = replace_process(cmd);
    Err(SubcommanderError::io(
        format!("failed to exec {}", target.display()),
        err,
    ))
}
