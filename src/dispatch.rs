//! The resolution pipeline, start to (non-)finish

use std::convert::Infallible;
use std::path::Path;
use std::process::Command;

use directories::UserDirs;
use tracing::{debug, error};

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::identity::Identity;
use crate::resolver::Resolved;
use crate::util::path::PathAccessExt;
use crate::{context, exec_path, launcher, rcfile, resolver};

/// Run one dispatch: derive identity from argv0, bounce through the rc
/// file, resolve the subcommand under the exec path, pick up a context,
/// and replace this process with the result.
///
/// On success this never returns; two stages (rc bounce, launch) swap in a
/// new process image. Every return is an error carrying its exit code.
pub fn run(argv0: &str, args: Vec<String>) -> SubcommanderResult<Infallible> {
    let home = home_dir()?;
    let identity = Identity::derive(argv0, &home);
    debug!(main_name = %identity.main_name, "derived identity");
    identity.export();
    identity.verify_not_called_directly()?;

    let args = rcfile::bounce(&identity, argv0, args)?;
    let exec_path = exec_path::resolve(&identity)?;

    match resolver::resolve(&exec_path, &args, &identity.main_name)? {
        Resolved::Directory(dir) => {
            show_help(&dir, &identity);
            Err(SubcommanderError::NoCommandSpecified)
        }
        Resolved::Command { path, args } => {
            let contextfile = context::locate(&identity)?;
            launcher::launch(&identity, &path, &args, contextfile.as_deref())
        }
    }
}

/// Invoke the `help` executable under `dir` with no arguments and wait for
/// it; fall back to a one-line usage message. Help's exit status is
/// ignored, the pipeline exits 2 either way.
fn show_help(dir: &Path, identity: &Identity) {
    let help_executable = dir.join("help");
    if help_executable.is_readable_executable() {
        if let Err(e) = Command::new(&help_executable).status() {
            error!(
                "failed to run {}: {}",
                help_executable.display(),
                e
            );
        }
    } else {
        error!("usage: {} COMMAND [ARGS...]", identity.main_name);
    }
}

fn home_dir() -> SubcommanderResult<std::path::PathBuf> {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| {
            SubcommanderError::io(
                "cannot determine home directory".to_string(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory"),
            )
        })
}
