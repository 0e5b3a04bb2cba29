//! Runs the configured fetch command as a subprocess.
//!
//! The entry is passed as the last argument, without shell interpretation.

use crate::config::ListConfig;
use crate::domain::ports::Fetcher;
use crate::utils::error::{GogetError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
}

impl CommandFetcher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(config.fetch_program.clone(), config.fetch_args.clone())
    }

    pub fn command_line(&self, entry: &str) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(entry);
        parts.join(" ")
    }
}

#[async_trait]
impl Fetcher for CommandFetcher {
    async fn fetch(&self, entry: &str) -> Result<()> {
        let command_line = self.command_line(entry);
        println!("Running: {}", command_line);
        tracing::debug!(program = %self.program, args = ?self.args, entry, "Executing fetch command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(entry)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GogetError::FetchSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!("{} failed with {}", command_line, output.status);
            return Err(GogetError::FetchFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("{}", stdout.trim_end());
        }
        Ok(())
    }
}
