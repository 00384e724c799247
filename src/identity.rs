//! Invocation identity: names derived from how the binary was invoked

use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{SubcommanderError, SubcommanderResult};

/// Identifiers derived from the invoked program name (argv0).
///
/// One binary serves arbitrarily many differently-named tools via symlinks;
/// everything the dispatcher touches (env vars, rc file, context marker) is
/// namespaced by the invoked basename. Derivation is a pure function of the
/// name: recomputing from the same argv0 always yields the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Basename of argv0, e.g. `mytool`
    pub main_name: String,
    /// `MYTOOL_EXEC_PATH`: directory of subcommands (user-provided)
    pub exec_path_env_var: String,
    /// `MYTOOL_CONTEXT`: context override in, resolved context dir out
    pub context_env_var: String,
    /// `MYTOOL_MAIN`: exported for downstream consumption
    pub main_env_var: String,
    /// `MYTOOL_NAME`: exported for downstream consumption
    pub name_env_var: String,
    /// `$HOME/.mytoolrc`
    pub rc_file: PathBuf,
}

impl Identity {
    /// Derive all identifiers from the invoked program name.
    ///
    /// Env var names are uppercased with spaces mapped to underscores so
    /// that invoked names containing spaces still yield valid identifiers.
    pub fn derive(argv0: &str, home: &Path) -> Self {
        let main_name = Path::new(argv0)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| argv0.to_string());
        let prefix = main_name.to_uppercase().replace(' ', "_");

        Identity {
            exec_path_env_var: format!("{prefix}_EXEC_PATH"),
            context_env_var: format!("{prefix}_CONTEXT"),
            main_env_var: format!("{prefix}_MAIN"),
            name_env_var: format!("{prefix}_NAME"),
            rc_file: home.join(format!(".{main_name}rc")),
            main_name,
        }
    }

    /// Marker filename that designates a context directory, `.mytool.context`.
    pub fn context_filename(&self) -> String {
        format!(".{}.context", self.main_name)
    }

    /// Export `<NAME>_MAIN` and `<NAME>_NAME` so the rc script and the
    /// eventual subcommand/context process can read the invoked name.
    pub fn export(&self) {
        env::set_var(&self.main_env_var, &self.main_name);
        env::set_var(&self.name_env_var, &self.main_name);
    }

    /// The dispatcher is an abstraction; running it under its own name is
    /// a usage error, not a resolvable invocation.
    pub fn verify_not_called_directly(&self) -> SubcommanderResult<()> {
        if self.main_name.starts_with("subcommander") {
            return Err(SubcommanderError::CalledDirectly);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mytool", "MYTOOL_EXEC_PATH", "MYTOOL_CONTEXT")]
    #[case("/usr/local/bin/mytool", "MYTOOL_EXEC_PATH", "MYTOOL_CONTEXT")]
    #[case("My Tool", "MY_TOOL_EXEC_PATH", "MY_TOOL_CONTEXT")]
    #[case("git2", "GIT2_EXEC_PATH", "GIT2_CONTEXT")]
    fn derives_env_var_names(
        #[case] argv0: &str,
        #[case] exec_path_var: &str,
        #[case] context_var: &str,
    ) {
        let id = Identity::derive(argv0, Path::new("/home/u"));
        assert_eq!(id.exec_path_env_var, exec_path_var);
        assert_eq!(id.context_env_var, context_var);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = Identity::derive("mytool", Path::new("/home/u"));
        let b = Identity::derive("mytool", Path::new("/home/u"));
        assert_eq!(a, b);
    }

    #[test]
    fn rc_file_lives_in_home() {
        let id = Identity::derive("/opt/bin/mytool", Path::new("/home/u"));
        assert_eq!(id.rc_file, PathBuf::from("/home/u/.mytoolrc"));
    }

    #[test]
    fn context_filename_is_hidden_marker() {
        let id = Identity::derive("mytool", Path::new("/home/u"));
        assert_eq!(id.context_filename(), ".mytool.context");
    }

    #[test]
    fn rejects_direct_invocation() {
        let id = Identity::derive("/usr/bin/subcommander", Path::new("/home/u"));
        assert!(matches!(
            id.verify_not_called_directly(),
            Err(SubcommanderError::CalledDirectly)
        ));
    }

    #[test]
    fn accepts_symlinked_invocation() {
        let id = Identity::derive("mytool", Path::new("/home/u"));
        assert!(id.verify_not_called_directly().is_ok());
    }
}
