use crate::utils::error::{GogetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;

pub const LIST_FILE_NAME: &str = "goget.list";
pub const DEFAULT_FETCH_PROGRAM: &str = "go";
pub const DEFAULT_FETCH_ARGS: [&str; 2] = ["get", "-u"];

/// Where the list may live and what to run for each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Checked in order; the first existing file is the list.
    pub candidates: Vec<PathBuf>,
    pub fetch_program: String,
    pub fetch_args: Vec<String>,
}

impl ListConfig {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            fetch_program: DEFAULT_FETCH_PROGRAM.to_string(),
            fetch_args: DEFAULT_FETCH_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `$HOME/.config/goget.list`, then `$GOPATH/cfg/goget.list` when GOPATH
    /// is set.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var_os("HOME").map(PathBuf::from),
            std::env::var_os("GOPATH").map(PathBuf::from),
        )
    }

    pub fn from_vars(home: Option<PathBuf>, gopath: Option<PathBuf>) -> Result<Self> {
        let mut candidates = Vec::new();
        if let Some(home) = home.filter(|h| !h.as_os_str().is_empty()) {
            candidates.push(home.join(".config").join(LIST_FILE_NAME));
        }
        if let Some(gopath) = gopath.filter(|g| !g.as_os_str().is_empty()) {
            candidates.push(gopath.join("cfg").join(LIST_FILE_NAME));
        }

        if candidates.is_empty() {
            return Err(GogetError::ConfigError {
                message: "neither HOME nor GOPATH is set; use --list-file".to_string(),
            });
        }
        Ok(Self::new(candidates))
    }

    pub fn with_fetch_command(mut self, command: &str) -> Result<Self> {
        let (program, args) = split_command(command)?;
        self.fetch_program = program;
        self.fetch_args = args;
        Ok(self)
    }

    pub fn with_list_file(mut self, path: PathBuf) -> Self {
        self.candidates = vec![path];
        self
    }

    pub fn fetch_command_line(&self) -> String {
        std::iter::once(self.fetch_program.as_str())
            .chain(self.fetch_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Validate for ListConfig {
    fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(GogetError::ValidationError {
                field: "list_paths".to_string(),
                reason: "at least one list path is required".to_string(),
            });
        }
        for candidate in &self.candidates {
            validate_path("list_paths", &candidate.to_string_lossy())?;
        }
        validate_non_empty_string("fetch_command", &self.fetch_program)
    }
}

/// Splits a command line on whitespace into program and arguments.
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next().ok_or_else(|| GogetError::ConfigError {
        message: "fetch command cannot be empty".to_string(),
    })?;
    Ok((program, parts.collect()))
}
