pub mod list_config;
pub mod toml_config;

pub use list_config::ListConfig;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{ArgAction, Parser};
#[cfg(feature = "cli")]
use std::ffi::OsString;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Long flags that are also accepted with a single dash (`-add pkg`).
#[cfg(feature = "cli")]
const SINGLE_DASH_LONG_FLAGS: [&str; 7] =
    ["add", "remove", "update", "clean", "list", "help", "verbose"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "goget")]
#[command(about = "Keep a list of Go packages and update them with go get")]
#[command(disable_help_flag = true)]
#[command(args_override_self = true)]
pub struct CliConfig {
    /// Add package to list
    #[arg(short = 'a', long = "add", value_name = "PKG")]
    pub add: Option<String>,

    /// Remove (comment out) a package from list
    #[arg(short = 'r', long = "remove", value_name = "PKG")]
    pub remove: Option<String>,

    /// Update packages in list
    #[arg(short = 'u', long = "update", num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true", action = ArgAction::Set)]
    pub update: bool,

    /// Remove duplicate and commented entries in package list
    #[arg(short = 'c', long = "clean", num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true", action = ArgAction::Set)]
    pub clean: bool,

    /// Print the package list
    #[arg(short = 'l', long = "list", num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true", action = ArgAction::Set)]
    pub list: bool,

    /// Show help
    #[arg(short = 'h', long = "help", num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true", action = ArgAction::Set)]
    pub help: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", num_args = 0..=1, require_equals = true,
          default_value_t = false, default_missing_value = "true", action = ArgAction::Set)]
    pub verbose: bool,

    /// Use this list file instead of searching the default locations
    #[arg(long, value_name = "PATH")]
    pub list_file: Option<PathBuf>,

    /// Command run for every package, e.g. "go install"
    #[arg(long, value_name = "CMD")]
    pub fetch_cmd: Option<String>,

    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses the process arguments, accepting `-add`-style long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn has_action(&self) -> bool {
        self.add.is_some() || self.remove.is_some() || self.update || self.clean || self.list
    }

    /// `-h`, or nothing to do.
    pub fn wants_help(&self) -> bool {
        self.help || !self.has_action()
    }

    /// Environment defaults, then the TOML file, then command-line overrides.
    pub fn resolve_list_config(&self) -> Result<ListConfig> {
        let mut config = match &self.list_file {
            Some(path) => ListConfig::new(vec![path.clone()]),
            None => ListConfig::from_env()?,
        };

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            config = toml.apply(config)?;
        }

        if let Some(command) = &self.fetch_cmd {
            config = config.with_fetch_command(command)?;
        }
        if let Some(path) = &self.list_file {
            config = config.with_list_file(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Rewrites `-add` / `-add=pkg` into `--add` / `--add=pkg` so clap sees
/// GNU-style flags. Boolean flags take an optional `=true` / `=false`.
#[cfg(feature = "cli")]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(feature = "cli")]
pub fn help_text() -> &'static str {
    "Use goget <options>
  Where:
   -a, -add      package to list
   -r, -remove   remove a package from list
   -u, -update   update packages in list
   -c, -clean    remove duplicate and commented entry in package list
   -l, -list     show packages in list
   -h, -help     show help
   -v, -verbose  verbose output
  Settings:
   --list-file <PATH>  use this list instead of the default locations
   --fetch-cmd <CMD>   command run for every package (default: go get -u)
   --config <PATH>     TOML settings file (list_paths, fetch_command)"
}
