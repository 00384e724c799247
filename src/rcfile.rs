//! RC bounce: re-exec through the user's per-tool init script exactly once

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::identity::Identity;
use crate::util::path::PathAccessExt;
use crate::util::process::replace_process;

/// First-argument sentinel marking an invocation that already went through
/// the rc file.
pub const SKIP_SENTINEL: &str = "--subcommander-skip-rcfile";

/// If the first argument is the skip sentinel, strip exactly one occurrence
/// and return the tail. `None` means "not yet bounced".
pub fn strip_skip_sentinel(args: &[String]) -> Option<Vec<String>> {
    match args.first() {
        Some(first) if first == SKIP_SENTINEL => Some(args[1..].to_vec()),
        _ => None,
    }
}

/// Run the user's rc file before resolution, then hand control back to this
/// same dispatcher as a fresh process.
///
/// Returns the remaining arguments when the sentinel shows we already
/// bounced. Otherwise the rc file is created if absent, then the current
/// process image is replaced with
/// `rcfile argv0 --subcommander-skip-rcfile args...`; the rc script is
/// expected to `exec "$@"` its argv tail, which restarts us with the
/// sentinel in place. One bounce, not a loop. An rc file that fails to
/// re-exec simply ends the process, which is the user's doing.
pub fn bounce(identity: &Identity, argv0: &str, args: Vec<String>) -> SubcommanderResult<Vec<String>> {
    if let Some(tail) = strip_skip_sentinel(&args) {
        debug!("skip sentinel present, rc bounce already done");
        return Ok(tail);
    }

    if !identity.rc_file.exists() {
        create_rc_file(&identity.rc_file, identity)?;
    }
    if !identity.rc_file.is_executable() {
        return Err(SubcommanderError::ConfigNotExecutable(
            identity.rc_file.clone(),
        ));
    }

    let mut cmd = Command::new(&identity.rc_file);
    cmd.arg(argv0).arg(SKIP_SENTINEL).args(&args);
    debug!(rc_file = %identity.rc_file.display(), "bouncing through rc file");
    let err = replace_process(cmd);
    Err(SubcommanderError::io(
        format!("failed to exec rc file {}", identity.rc_file.display()),
        err,
    ))
}

/// Write a fresh rc file prepopulated with helpful comments, owner-executable.
pub fn create_rc_file(rc_file: &Path, identity: &Identity) -> SubcommanderResult<()> {
    warn!("Creating rcfile {}.", rc_file.display());

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(rc_file)
        .map_err(|e| {
            SubcommanderError::io(format!("cannot create rc file {}", rc_file.display()), e)
        })?;
    file.write_all(rc_template(identity).as_bytes())
        .map_err(|e| {
            SubcommanderError::io(format!("cannot write rc file {}", rc_file.display()), e)
        })?;
    fs::set_permissions(rc_file, fs::Permissions::from_mode(0o755)).map_err(|e| {
        SubcommanderError::io(
            format!("cannot set permissions on rc file {}", rc_file.display()),
            e,
        )
    })?;
    Ok(())
}

fn rc_template(identity: &Identity) -> String {
    let main = &identity.main_name;
    let exec_path_var = &identity.exec_path_env_var;
    format!(
        r#"#!/bin/sh

# This file is executed by '{main}' every time you run a '{main}'
# subcommand. You can edit this script, or replace it with your own
# executable script or compiled program, so long as you take care to
# exec() the command passed in as arguments, as is done below.

# This line sets {exec_path_var} to ~/usr/lib/{main} unless it is
# overridden in the environment.
export {exec_path_var}="${{{exec_path_var}:-~/usr/lib/{main}}}"

# If you have hooks to execute or customizations to make to the
# environment, you may do so here.

# The following line must be present for '{main}' to function. It ends
# the script; any lines after it will never be reached.
exec "$@"
"#
    )
}
