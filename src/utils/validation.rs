use crate::utils::error::{GogetError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn whitespace_or_control() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\p{Cc}]").expect("static regex is valid"))
}

/// Trims a package argument and checks it can be stored as one list line
/// and passed as one argument to the fetch command.
pub fn validate_entry(entry: &str) -> Result<&str> {
    let trimmed = entry.trim();
    let invalid = |reason: &str| GogetError::InvalidEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("package name cannot be empty"));
    }
    if trimmed.starts_with('#') {
        return Err(invalid("package name cannot start with '#'"));
    }
    if whitespace_or_control().is_match(trimmed) {
        return Err(invalid(
            "package name cannot contain whitespace or control characters",
        ));
    }
    Ok(trimmed)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GogetError::ValidationError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GogetError::ValidationError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GogetError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry() {
        assert_eq!(
            validate_entry("  github.com/nsf/gocode \n").unwrap(),
            "github.com/nsf/gocode"
        );
        assert!(validate_entry("golang.org/x/tools/cmd/...").is_ok());
        assert!(validate_entry("").is_err());
        assert!(validate_entry("   ").is_err());
        assert!(validate_entry("#github.com/a/b").is_err());
        assert!(validate_entry("github.com/a b").is_err());
        assert!(validate_entry("github.com/a\tb").is_err());
    }

    #[test]
    fn test_validate_entry_error_is_recoverable() {
        let err = validate_entry("a b").unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("list_paths", "/home/u/.config/goget.list").is_ok());
        assert!(validate_path("list_paths", "").is_err());
        assert!(validate_path("list_paths", "a\0b").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("fetch_command", "go get -u").is_ok());
        assert!(validate_non_empty_string("fetch_command", "  ").is_err());
    }
}
