//! Operating system opener
//!
//! Hands a file to its default application or reveals a folder in the
//! native file manager. The platform specific commands are chosen once at
//! startup; callers only see the [`OsOpener`] capability.

use crate::types::OpenTarget;
use log::debug;
use std::{
    fmt,
    path::Path,
    process::{Command, ExitStatus},
};

/// Opens paths with the operating system's native mechanism
pub trait OsOpener: Send + Sync {
    /// Opens `path` and waits for the launcher to exit
    fn open(&self, target: OpenTarget, path: &Path) -> Result<(), OpenError>;
}

/// Why an open request failed
#[derive(Debug)]
pub enum OpenError {
    /// The launcher program could not be started
    Launch {
        /// Program that was invoked
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// The launcher ran but reported failure
    ExitStatus {
        /// Program that was invoked
        program: String,
        /// Its exit status
        status: ExitStatus,
    },
    /// The requested target does not exist
    Missing,
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Launch { program, source } => {
                write!(f, "failed to launch '{program}': {source}")
            }
            OpenError::ExitStatus { program, status } => {
                write!(f, "'{program}' exited with {status}")
            }
            OpenError::Missing => f.write_str("target does not exist"),
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenError::Launch { source, .. } => Some(source),
            OpenError::ExitStatus { .. } | OpenError::Missing => None,
        }
    }
}

/// A launcher program and the arguments placed before the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCommand {
    program: String,
    args: Vec<String>,
}

impl OpenCommand {
    /// Creates a command running `program` with leading `args`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The launcher program
    pub fn program(&self) -> &str {
        &self.program
    }

    fn to_command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        command
    }
}

/// [`OsOpener`] that shells out to a launcher program
#[derive(Debug, Clone)]
pub struct CommandOpener {
    file: OpenCommand,
    folder: OpenCommand,
}

impl CommandOpener {
    /// Creates an opener with explicit commands for files and folders
    pub fn new(file: OpenCommand, folder: OpenCommand) -> Self {
        Self { file, folder }
    }

    /// Selects the launcher commands of the current platform
    pub fn for_platform() -> Self {
        if cfg!(target_os = "macos") {
            Self::new(
                OpenCommand::new("open", Vec::<String>::new()),
                OpenCommand::new("open", Vec::<String>::new()),
            )
        } else if cfg!(target_os = "windows") {
            // Never route the path through cmd.exe, it would parse `&` and `|`
            Self::new(
                OpenCommand::new("rundll32", ["url.dll,FileProtocolHandler"]),
                OpenCommand::new("explorer", Vec::<String>::new()),
            )
        } else {
            Self::new(
                OpenCommand::new("xdg-open", Vec::<String>::new()),
                OpenCommand::new("xdg-open", Vec::<String>::new()),
            )
        }
    }

    /// The command used for `target`
    pub fn command_for(&self, target: OpenTarget) -> &OpenCommand {
        match target {
            OpenTarget::File => &self.file,
            OpenTarget::Folder => &self.folder,
        }
    }
}

impl OsOpener for CommandOpener {
    fn open(&self, target: OpenTarget, path: &Path) -> Result<(), OpenError> {
        let command = self.command_for(target);
        debug!(
            "Opening {target} {} with {}",
            path.display(),
            command.program()
        );

        let status = command
            .to_command(path)
            .status()
            .map_err(|source| OpenError::Launch {
                program: command.program().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(OpenError::ExitStatus {
                program: command.program().to_string(),
                status,
            })
        }
    }
}
