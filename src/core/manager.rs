use crate::config::ListConfig;
use crate::core::list_file;
use crate::domain::model::PackageList;
use crate::domain::ports::Fetcher;
use crate::utils::error::{GogetError, Result};
use crate::utils::validation::validate_entry;
use std::path::{Path, PathBuf};

/// Outcome of the list file lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPath {
    Found(PathBuf),
    /// No candidate exists; carries the first candidate, where a new list
    /// would be created.
    Missing(PathBuf),
}

impl ListPath {
    pub fn path(&self) -> &Path {
        match self {
            ListPath::Found(path) | ListPath::Missing(path) => path,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, ListPath::Found(_))
    }

    fn require(self) -> Result<PathBuf> {
        match self {
            ListPath::Found(path) => Ok(path),
            ListPath::Missing(path) => Err(GogetError::ListNotFound { path }),
        }
    }
}

pub struct ListManager<F: Fetcher> {
    config: ListConfig,
    fetcher: F,
}

impl<F: Fetcher> ListManager<F> {
    pub fn new(config: ListConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn list_path(&self) -> ListPath {
        if let Some(found) = self.config.candidates.iter().find(|p| p.is_file()) {
            return ListPath::Found(found.clone());
        }
        let first = self.config.candidates.first().cloned().unwrap_or_default();
        ListPath::Missing(first)
    }

    /// `list_path`, but a missing list with a leftover `.bkp` beside one of
    /// the candidates is an error: that backup holds the real list.
    fn locate(&self) -> Result<ListPath> {
        let location = self.list_path();
        if location.exists() {
            return Ok(location);
        }
        for candidate in &self.config.candidates {
            let backup = list_file::backup_path(candidate);
            if backup.is_file() {
                tracing::warn!("{} is missing but {} exists", candidate.display(), backup.display());
                return Err(GogetError::StaleBackup {
                    backup,
                    list: candidate.clone(),
                });
            }
        }
        Ok(location)
    }

    /// Appends `entry` unless the list already holds it verbatim. A missing
    /// list is created.
    pub fn add(&self, entry: &str) -> Result<()> {
        let entry = validate_entry(entry)?;
        let location = self.locate()?;

        if location.exists() {
            let list = list_file::read_list(location.path())?;
            if list.contains(entry) {
                return Err(GogetError::DuplicateEntry {
                    entry: entry.to_string(),
                    path: location.path().to_path_buf(),
                });
            }
        }

        list_file::append_entry(location.path(), entry)?;
        tracing::info!("Added {} to {}", entry, location.path().display());
        Ok(())
    }

    /// Comments out the first line equal to `entry`.
    pub fn remove(&self, entry: &str) -> Result<()> {
        let entry = validate_entry(entry)?;
        let path = self.locate()?.require()?;

        let mut list = list_file::read_list(&path)?;
        if !list.comment_out(entry) {
            return Err(GogetError::EntryNotFound {
                entry: entry.to_string(),
                path,
            });
        }

        list_file::rewrite_list(&path, &list)?;
        tracing::info!("Commented out {} in {}", entry, path.display());
        Ok(())
    }

    /// Drops commented lines and later duplicates. Returns the number of lines
    /// removed.
    pub fn clean(&self) -> Result<usize> {
        let path = self.locate()?.require()?;

        let list = list_file::read_list(&path)?;
        let cleaned = list.cleaned();
        list_file::rewrite_list(&path, &cleaned)?;

        let dropped = list.len() - cleaned.len();
        tracing::info!(
            "Cleaned {}: kept {}, dropped {}",
            path.display(),
            cleaned.len(),
            dropped
        );
        Ok(dropped)
    }

    /// Runs the fetcher for every active entry in file order. The first
    /// failure stops the run. Returns the number of entries fetched.
    pub async fn update(&self) -> Result<usize> {
        let path = self.locate()?.require()?;
        let list = list_file::read_list(&path)?;

        let mut fetched = 0;
        for entry in list.active() {
            tracing::debug!("Fetching {}", entry);
            self.fetcher.fetch(entry).await?;
            fetched += 1;
        }

        tracing::info!("Updated {} packages from {}", fetched, path.display());
        Ok(fetched)
    }

    pub fn entries(&self) -> Result<PackageList> {
        let path = self.locate()?.require()?;
        list_file::read_list(&path)
    }
}
