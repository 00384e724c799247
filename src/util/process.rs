use std::os::unix::process::CommandExt;
use std::process::Command;

/// Replace the current process image with `cmd` via execvp(2): on success
/// the call never returns and the replacement inherits our PID and
/// environment.
///
/// The crate is unix-only (permission checks and the rc-file mode bits
/// assume it); a port to a platform without an image-replace primitive
/// would have to emulate the observable contract by spawning the child,
/// waiting, and exiting with its status, which preserves exit behavior
/// but not PID identity.
///
/// Returns only on failure to exec.
pub fn replace_process(mut cmd: Command) -> std::io::Error {
    cmd.exec()
}
