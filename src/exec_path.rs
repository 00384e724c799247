//! Exec-path resolution: where the subcommand tree lives

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::identity::Identity;

/// Read and validate `$<NAME>_EXEC_PATH`.
///
/// The variable must be set (else the user never configured the tool, so
/// the message points at the rc file) and must name an existing directory
/// after tilde expansion.
pub fn resolve(identity: &Identity) -> SubcommanderResult<PathBuf> {
    let raw = env::var(&identity.exec_path_env_var).map_err(|_| {
        SubcommanderError::ExecPathNotConfigured {
            env_var: identity.exec_path_env_var.clone(),
            rc_file: identity.rc_file.clone(),
        }
    })?;

    let exec_path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    debug!(exec_path = %exec_path.display(), "resolved exec path");

    if !exec_path.is_dir() {
        return Err(SubcommanderError::ExecPathMissing(exec_path));
    }
    Ok(exec_path)
}
