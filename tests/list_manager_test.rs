use anyhow::Result;
use async_trait::async_trait;
use goget::core::list_file::backup_path;
use goget::{Fetcher, GogetError, ListConfig, ListManager, ListPath};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// Records every entry it is asked to fetch; fails on `fail_on`.
#[derive(Default)]
struct MockFetcher {
    calls: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl MockFetcher {
    fn failing_on(entry: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(entry.to_string()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, entry: &str) -> goget::Result<()> {
        self.calls.lock().unwrap().push(entry.to_string());
        if self.fail_on.as_deref() == Some(entry) {
            return Err(GogetError::FetchFailed {
                command: format!("go get -u {}", entry),
                status: "exit status: 1".to_string(),
                stderr: "cannot find package".to_string(),
            });
        }
        Ok(())
    }
}

fn setup(content: &str, fetcher: MockFetcher) -> (TempDir, PathBuf, ListManager<MockFetcher>) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goget.list");
    fs::write(&path, content).unwrap();
    let manager = ListManager::new(ListConfig::new(vec![path.clone()]), fetcher);
    (temp_dir, path, manager)
}

#[test]
fn test_add_appends_exactly_one_line() -> Result<()> {
    let (_dir, path, manager) = setup("github.com/a/one\n#github.com/a/two\n", MockFetcher::default());

    manager.add("github.com/a/three")?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "github.com/a/one\n#github.com/a/two\ngithub.com/a/three\n"
    );
    Ok(())
}

#[test]
fn test_add_duplicate_fails_without_mutation() -> Result<()> {
    let original = "github.com/a/one\n\n  github.com/a/two  \n";
    let (_dir, path, manager) = setup(original, MockFetcher::default());

    let err = manager.add("github.com/a/two").unwrap_err();

    assert!(matches!(err, GogetError::DuplicateEntry { .. }));
    assert!(!err.is_fatal());
    assert_eq!(fs::read_to_string(&path)?, original);
    Ok(())
}

#[test]
fn test_add_previously_removed_entry() -> Result<()> {
    let (_dir, path, manager) = setup("#github.com/a/one\n", MockFetcher::default());

    manager.add("github.com/a/one")?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "#github.com/a/one\ngithub.com/a/one\n"
    );
    Ok(())
}

#[test]
fn test_add_rejects_invalid_entry() -> Result<()> {
    let (_dir, path, manager) = setup("a\n", MockFetcher::default());

    assert!(matches!(
        manager.add("two words"),
        Err(GogetError::InvalidEntry { .. })
    ));
    assert!(matches!(
        manager.add("#commented"),
        Err(GogetError::InvalidEntry { .. })
    ));
    assert_eq!(fs::read_to_string(&path)?, "a\n");
    Ok(())
}

#[test]
fn test_remove_comments_exactly_that_line() -> Result<()> {
    let (_dir, path, manager) = setup("a\n  b  \nc\n#d\n", MockFetcher::default());

    manager.remove("b")?;

    assert_eq!(fs::read_to_string(&path)?, "a\n#b\nc\n#d\n");
    assert!(!backup_path(&path).exists());
    Ok(())
}

#[test]
fn test_remove_absent_entry_leaves_file_unchanged() -> Result<()> {
    let original = "a\n#b\n\nc";
    let (_dir, path, manager) = setup(original, MockFetcher::default());

    let err = manager.remove("b").unwrap_err();

    assert!(matches!(err, GogetError::EntryNotFound { .. }));
    assert!(!err.is_fatal());
    assert_eq!(fs::read_to_string(&path)?, original);
    assert!(!backup_path(&path).exists());
    Ok(())
}

#[test]
fn test_clean_keeps_distinct_active_entries_in_order() -> Result<()> {
    let (_dir, path, manager) = setup("a\n#b\na\nc\n", MockFetcher::default());

    let dropped = manager.clean()?;

    assert_eq!(dropped, 2);
    assert_eq!(fs::read_to_string(&path)?, "a\nc\n");
    assert_eq!(manager.entries()?.lines(), ["a", "c"]);
    assert!(!backup_path(&path).exists());
    Ok(())
}

#[test]
fn test_clean_missing_list_is_recoverable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nowhere.list");
    let manager = ListManager::new(ListConfig::new(vec![path.clone()]), MockFetcher::default());

    assert_eq!(manager.list_path(), ListPath::Missing(path.clone()));
    let err = manager.clean().unwrap_err();
    assert!(matches!(err, GogetError::ListNotFound { .. }));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_update_fetches_active_entries_in_order() -> Result<()> {
    let (_dir, _path, manager) = setup("x\n#y\n\nz\nx\n", MockFetcher::default());

    let fetched = manager.update().await?;

    assert_eq!(fetched, 3);
    assert_eq!(manager.fetcher().calls(), vec!["x", "z", "x"]);
    Ok(())
}

#[tokio::test]
async fn test_update_stops_at_first_failure() -> Result<()> {
    let (_dir, _path, manager) = setup("a\nb\nc\n", MockFetcher::failing_on("b"));

    let err = manager.update().await.unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(manager.fetcher().calls(), vec!["a", "b"]);
    Ok(())
}

#[tokio::test]
async fn test_full_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cfg").join("goget.list");
    let manager = ListManager::new(ListConfig::new(vec![path.clone()]), MockFetcher::default());

    manager.add("github.com/a/one")?;
    manager.add("github.com/a/two")?;
    manager.add("github.com/a/three")?;
    manager.remove("github.com/a/two")?;
    manager.add("github.com/a/two")?;
    manager.remove("github.com/a/two")?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "github.com/a/one\n#github.com/a/two\ngithub.com/a/three\n#github.com/a/two\n"
    );

    manager.update().await?;
    assert_eq!(
        manager.fetcher().calls(),
        vec!["github.com/a/one", "github.com/a/three"]
    );

    manager.clean()?;
    assert_eq!(
        fs::read_to_string(&path)?,
        "github.com/a/one\ngithub.com/a/three\n"
    );
    Ok(())
}
