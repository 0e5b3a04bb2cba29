//! Reading and writing the package list file.
//!
//! Rewrites go through a backup: the list is renamed to `<list>.bkp`, the new
//! content is written to a fresh `<list>`, then the backup is removed. A failed
//! write puts the backup back in place.

use crate::domain::model::PackageList;
use crate::utils::error::{GogetError, Result};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

const BACKUP_SUFFIX: &str = ".bkp";

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

pub fn read_list(path: &Path) -> Result<PackageList> {
    let content = fs::read_to_string(path)?;
    Ok(PackageList::parse(&content))
}

/// Appends `entry` on its own line, creating the file and its parent
/// directory if needed.
pub fn append_entry(path: &Path, entry: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    let mut line = String::with_capacity(entry.len() + 2);
    if !ends_with_newline(&mut file)? {
        line.push('\n');
    }
    line.push_str(entry);
    line.push('\n');

    file.write_all(line.as_bytes())?;
    Ok(())
}

// An empty file counts as terminated.
fn ends_with_newline(file: &mut fs::File) -> Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

pub fn rewrite_list(path: &Path, list: &PackageList) -> Result<()> {
    rewrite_with(path, list, write_new)
}

/// The backup sequence with the write step supplied by the caller.
pub(crate) fn rewrite_with<W>(path: &Path, list: &PackageList, write: W) -> Result<()>
where
    W: FnOnce(&Path, &PackageList) -> std::io::Result<()>,
{
    let backup = backup_path(path);
    // An existing backup may be the only copy left by an interrupted run.
    if backup.exists() {
        return Err(GogetError::StaleBackup {
            backup,
            list: path.to_path_buf(),
        });
    }

    fs::rename(path, &backup)?;
    tracing::debug!("Backed up {} to {}", path.display(), backup.display());

    if let Err(e) = write(path, list) {
        tracing::warn!(
            "Writing {} failed, restoring backup: {}",
            path.display(),
            e
        );
        if let Err(remove_err) = fs::remove_file(path) {
            if remove_err.kind() != ErrorKind::NotFound {
                tracing::warn!("Could not remove partial {}: {}", path.display(), remove_err);
            }
        }
        if let Err(restore_err) = fs::rename(&backup, path) {
            tracing::error!(
                "Could not restore {} from {}: {}",
                path.display(),
                backup.display(),
                restore_err
            );
        }
        return Err(e.into());
    }

    fs::remove_file(&backup)?;
    Ok(())
}

fn write_new(path: &Path, list: &PackageList) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(list.to_file_content().as_bytes())?;
    file.sync_all()
}
