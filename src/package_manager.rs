//! Package manager integration for re-adding dependencies
//!
//! This module provides:
//! - A narrow command runner seam so tests can replace the subprocess
//! - The uv commands that re-add dependencies and resync the lock file

use crate::error::ToolError;
use std::path::PathBuf;
use std::process::Command;

/// Output of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited successfully
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Standard output followed by standard error
    pub output: String,
}

impl CommandOutput {
    /// Create a successful output
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            output: output.into(),
        }
    }

    /// Create a failed output with the given exit code
    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            output: output.into(),
        }
    }
}

/// Trait for running external commands
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// An `Err` means the process could not be started; a non-zero exit is
    /// reported through [`CommandOutput::success`].
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ToolError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ToolError> {
        (**self).run(program, args)
    }
}

/// Runner that executes real processes
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ToolError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ToolError::spawn(command_line(program, args), e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            output: combined,
        })
    }
}

/// Render a command the way a user would type it
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// uv commands against one project directory
pub struct UvUpdater<R> {
    /// Executable name or path
    program: String,
    /// Project directory passed as `--directory`
    directory: PathBuf,
    /// Runner used to execute commands
    runner: R,
}

impl<R: CommandRunner> UvUpdater<R> {
    /// Create an updater for `directory`
    pub fn new(program: impl Into<String>, directory: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            program: program.into(),
            directory: directory.into(),
            runner,
        }
    }

    /// Underlying command runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// `uv add --directory <dir> <names...>`
    pub fn add_main(&self, names: &[String]) -> Result<(), ToolError> {
        self.execute(self.add_args(&[], names))
    }

    /// `uv add --dev --directory <dir> <names...>`
    pub fn add_dev(&self, names: &[String]) -> Result<(), ToolError> {
        self.execute(self.add_args(&["--dev"], names))
    }

    /// `uv add --optional <group> --directory <dir> <names...>`
    pub fn add_optional(&self, group: &str, names: &[String]) -> Result<(), ToolError> {
        self.execute(self.add_args(&["--optional", group], names))
    }

    /// `uv sync --directory <dir>`
    pub fn sync(&self) -> Result<(), ToolError> {
        let args = vec![
            "sync".to_string(),
            "--directory".to_string(),
            self.directory.display().to_string(),
        ];
        self.execute(args)
    }

    fn add_args(&self, flags: &[&str], names: &[String]) -> Vec<String> {
        let mut args = vec!["add".to_string()];
        args.extend(flags.iter().map(|f| f.to_string()));
        args.push("--directory".to_string());
        args.push(self.directory.display().to_string());
        args.extend(names.iter().cloned());
        args
    }

    fn execute(&self, args: Vec<String>) -> Result<(), ToolError> {
        let command = command_line(&self.program, &args);
        log::debug!("Executing shell command: {}", command);

        let output = self.runner.run(&self.program, &args)?;
        if !output.success {
            return Err(ToolError::failed(command, output.code, output.output));
        }

        log::trace!("Command executed successfully: {}", output.output.trim_end());
        Ok(())
    }
}
