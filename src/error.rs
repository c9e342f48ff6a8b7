use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid profile. choose: {choices}")]
    InvalidProfile { choices: String },
    #[error("build failed ({}): {command}", describe_code(.code))]
    BuildFailed { command: String, code: Option<i32> },
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error. A failed build hands back the
    /// child's own code when it has one.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidProfile { .. } => 2,
            Self::BuildFailed { code, .. } => code.filter(|code| *code != 0).unwrap_or(1),
            Self::Spawn { .. } | Self::Json(_) => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
