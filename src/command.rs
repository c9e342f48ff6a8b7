use std::fmt;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::output::OutputMode;
use crate::profile::Profile;

pub const DEFAULT_PROGRAM: &str = "docker";

/// A `docker build` invocation kept as an argument vector. It is never
/// passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    pub fn for_profile(program: impl Into<String>, profile: &Profile) -> Self {
        let args = vec![
            "build".to_string(),
            "-t".to_string(),
            profile.target.to_string(),
            "-f".to_string(),
            profile.dockerfile(),
            ".".to_string(),
        ];

        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command to completion and returns its exit status
    /// untouched. In JSON mode the child's stdout goes to stderr so our
    /// stdout holds only the report.
    pub async fn status(&self, mode: OutputMode) -> AppResult<ExitStatus> {
        info!(command = %self, "spawning build");
        let stdout = match mode {
            OutputMode::Text => Stdio::inherit(),
            OutputMode::Json => Stdio::from(std::io::stderr()),
        };
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| AppError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        debug!(%status, "build exited");
        Ok(status)
    }

    /// Like [`BuildCommand::status`], but an unsuccessful exit becomes
    /// [`AppError::BuildFailed`].
    pub async fn run(&self, mode: OutputMode) -> AppResult<()> {
        let status = self.status(mode).await?;
        if status.success() {
            return Ok(());
        }

        Err(AppError::BuildFailed {
            command: self.to_string(),
            code: status.code(),
        })
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
