//! User-error taxonomy and exit-code mapping

use std::path::PathBuf;
use thiserror::Error;

use crate::exitcode;

/// The closed set of configuration/usage errors a user can trigger.
///
/// Each variant carries a fixed exit code and a single-line message,
/// optionally naming the offending path. Anything not representable here
/// (exec failing after all checks passed, unreadable cwd) is an `Io`
/// failure: environment corruption outside this tool's control.
#[derive(Error, Debug)]
pub enum SubcommanderError {
    #[error(
        "Subcommander is an abstraction that is not meant to be run under its \
         own name. Instead, create a symlink to it, with a different name. And \
         read the instructions."
    )]
    CalledDirectly,

    #[error("No COMMAND specified.")]
    NoCommandSpecified,

    #[error("The context specified by {} does not exist: {}", .env_var, .context_file.display())]
    ContextNotFound {
        env_var: String,
        context_file: PathBuf,
    },

    #[error(
        "Subcommands directory does not exist. Place executable files here to \
         enable them as sub-commands: {}", .0.display()
    )]
    ExecPathMissing(PathBuf),

    #[error("Context file must be executable: {}", .0.display())]
    ContextRequiresExecutable(PathBuf),

    #[error("Configuration file is not executable: {}", .0.display())]
    ConfigNotExecutable(PathBuf),

    #[error(
        "Could not find {} set in the environment. This should specify \
         the path to subcommands. Recommend adding it to {}.",
        .env_var, .rc_file.display()
    )]
    ExecPathNotConfigured { env_var: String, rc_file: PathBuf },

    #[error("Unknown {} command: {}", .main_name, .command)]
    UnknownSubcommand { main_name: String, command: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for all dispatcher stages.
pub type SubcommanderResult<T> = Result<T, SubcommanderError>;

impl SubcommanderError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the stable exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CalledDirectly => exitcode::CALLED_DIRECTLY,
            Self::NoCommandSpecified => exitcode::NO_COMMAND_SPECIFIED,
            Self::ContextNotFound { .. } => exitcode::CONTEXT_NOT_FOUND,
            Self::ExecPathMissing(_) | Self::ContextRequiresExecutable(_) => {
                exitcode::EXEC_PATH_MISSING
            }
            Self::ConfigNotExecutable(_) => exitcode::CONFIG_NOT_EXECUTABLE,
            Self::ExecPathNotConfigured { .. } => exitcode::EXEC_PATH_NOT_CONFIGURED,
            Self::UnknownSubcommand { .. } => exitcode::UNKNOWN_SUBCOMMAND,
            Self::Io { .. } => exitcode::OSERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn exit_codes_are_stable() {
        let cases: Vec<(SubcommanderError, i32)> = vec![
            (SubcommanderError::CalledDirectly, 1),
            (SubcommanderError::NoCommandSpecified, 2),
            (
                SubcommanderError::ContextNotFound {
                    env_var: "TOOL_CONTEXT".into(),
                    context_file: Path::new("/p/.tool.context").into(),
                },
                3,
            ),
            (SubcommanderError::ExecPathMissing("/nope".into()), 4),
            (
                SubcommanderError::ContextRequiresExecutable("/p/.tool.context".into()),
                4,
            ),
            (SubcommanderError::ConfigNotExecutable("/h/.toolrc".into()), 5),
            (
                SubcommanderError::ExecPathNotConfigured {
                    env_var: "TOOL_EXEC_PATH".into(),
                    rc_file: "/h/.toolrc".into(),
                },
                6,
            ),
            (
                SubcommanderError::UnknownSubcommand {
                    main_name: "tool".into(),
                    command: "db frobnicate".into(),
                },
                7,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "wrong code for {err}");
        }
    }

    #[test]
    fn unknown_subcommand_names_consumed_words() {
        let err = SubcommanderError::UnknownSubcommand {
            main_name: "tool".into(),
            command: "db frobnicate".into(),
        };
        assert_eq!(err.to_string(), "Unknown tool command: db frobnicate");
    }

    #[test]
    fn exec_path_not_configured_names_var_and_rcfile() {
        let err = SubcommanderError::ExecPathNotConfigured {
            env_var: "TOOL_EXEC_PATH".into(),
            rc_file: "/home/u/.toolrc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("TOOL_EXEC_PATH"));
        assert!(msg.contains("/home/u/.toolrc"));
    }
}
