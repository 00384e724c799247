//! Context discovery: marker files in the working directory's ancestry

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{SubcommanderError, SubcommanderResult};
use crate::identity::Identity;
use crate::util::path::same_file;

/// Locate the context marker file for this invocation, if any.
///
/// Reads `$<NAME>_CONTEXT` and the current working directory, then defers
/// to [`locate_from`]. Split this way so the discovery and reconciliation
/// rules can be exercised without touching ambient process state.
pub fn locate(identity: &Identity) -> SubcommanderResult<Option<PathBuf>> {
    let override_dir = env::var(&identity.context_env_var).ok();
    let cwd = env::current_dir()
        .map_err(|e| SubcommanderError::io("cannot determine working directory", e))?;
    locate_from(identity, override_dir.as_deref(), &cwd)
}

/// Reconcile an explicit override directory against ancestry discovery.
///
/// An override must actually contain the marker file, else
/// `ContextNotFound`. When both an override and a discovered marker exist
/// and they are not the same underlying file, the override wins and a
/// warning flags the discrepancy; sameness is inode identity, so two
/// spellings of one file stay silent. With no override the discovered
/// marker is used; no marker anywhere is simply no context.
pub fn locate_from(
    identity: &Identity,
    override_dir: Option<&str>,
    cwd: &Path,
) -> SubcommanderResult<Option<PathBuf>> {
    // an empty value is "unset", not an override rooted at ""
    let override_dir = override_dir.filter(|dir| !dir.is_empty());
    let marker = identity.context_filename();
    let discovered = discover(cwd, &marker)?;

    let overridden = match override_dir {
        Some(dir) => {
            let context_file = Path::new(dir).join(&marker);
            if !context_file.exists() {
                return Err(SubcommanderError::ContextNotFound {
                    env_var: identity.context_env_var.clone(),
                    context_file,
                });
            }
            Some(context_file)
        }
        None => None,
    };

    if let (Some(chosen), Some(found)) = (&overridden, &discovered) {
        if !same_file(chosen, found) {
            warn!(
                "Context specified by {}={} differs from and overrides context \
                 discovered at {}. Be sure that this is what you intend.",
                identity.context_env_var,
                override_dir.unwrap_or_default(),
                found.display()
            );
        }
    }

    Ok(overridden.or(discovered))
}

/// Walk the ancestry of `cwd`, most specific directory first, down to the
/// filesystem root, returning the first marker file found.
///
/// The walk starts from the symlink-resolved directory so that a project
/// reached through a symlink still finds its real ancestors.
fn discover(cwd: &Path, marker: &str) -> SubcommanderResult<Option<PathBuf>> {
    let real_cwd = cwd
        .canonicalize()
        .map_err(|e| SubcommanderError::io("cannot resolve working directory", e))?;

    for dir in real_cwd.ancestors() {
        let context_file = dir.join(marker);
        if context_file.exists() {
            debug!(context_file = %context_file.display(), "discovered context");
            return Ok(Some(context_file));
        }
    }
    Ok(None)
}
