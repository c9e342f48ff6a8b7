use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Prints a line in text mode only. JSON mode keeps stdout to a single
    /// document.
    pub fn line(&self, line: &str) {
        if self.mode == OutputMode::Text {
            println!("{line}");
        }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => println!("{text_line}"),
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(json_value)?;
                println!("{payload}");
            }
        }
        Ok(())
    }
}
