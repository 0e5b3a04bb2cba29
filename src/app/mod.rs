//! Dispatches the parsed flags to the list manager.

use crate::config::{help_text, CliConfig};
use crate::core::ListManager;
use crate::domain::ports::Fetcher;
use crate::utils::error::{ErrorSeverity, Result};
use std::io::Write;

/// Runs every requested operation in the fixed order clean → update → add →
/// remove → list, writing user messages to `out`.
///
/// Domain errors are written to `out` and the next operation still runs. The
/// first fatal error is returned and nothing after it runs.
pub async fn run<F: Fetcher>(
    config: &CliConfig,
    manager: &ListManager<F>,
    out: &mut dyn Write,
) -> Result<()> {
    if config.wants_help() {
        writeln!(out, "{}", help_text())?;
        return Ok(());
    }

    if config.clean {
        writeln!(out, "Clean package list: {}", manager.list_path().path().display())?;
        if let Some(dropped) = report(out, manager.clean())? {
            writeln!(out, "Dropped {} entries", dropped)?;
        }
    }

    if config.update {
        report(out, manager.update().await)?;
    }

    if let Some(pkg) = &config.add {
        writeln!(out, "Add... {}", pkg)?;
        let location = manager.list_path();
        if report(out, manager.add(pkg))?.is_some() && !location.exists() {
            writeln!(out, "A new {} file was created!", location.path().display())?;
        }
    }

    if let Some(pkg) = &config.remove {
        writeln!(out, "Remove package: {}", pkg)?;
        report(out, manager.remove(pkg))?;
    }

    if config.list {
        if let Some(list) = report(out, manager.entries())? {
            if list.is_empty() {
                writeln!(out, "Package list is empty")?;
            }
            for line in list.lines() {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}

fn report<T>(out: &mut dyn Write, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match e.severity() {
            ErrorSeverity::Recoverable => {
                tracing::debug!("Skipping after recoverable error: {}", e);
                writeln!(out, "{}", e)?;
                Ok(None)
            }
            ErrorSeverity::Fatal => Err(e),
        },
    }
}
