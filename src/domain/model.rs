use std::collections::HashSet;

pub const COMMENT_PREFIX: char = '#';

/// Whether a list line is passed to the fetch command.
pub fn is_active(line: &str) -> bool {
    !line.starts_with(COMMENT_PREFIX)
}

/// The package list as an ordered sequence of trimmed, non-blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    lines: Vec<String>,
}

impl PackageList {
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact match against every line, commented ones included.
    pub fn contains(&self, entry: &str) -> bool {
        self.lines.iter().any(|line| line == entry)
    }

    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str).filter(|l| is_active(l))
    }

    /// Comments out the first line equal to `entry`. Returns false when no
    /// line matched.
    pub fn comment_out(&mut self, entry: &str) -> bool {
        match self.lines.iter_mut().find(|line| line.as_str() == entry) {
            Some(line) => {
                line.insert(0, COMMENT_PREFIX);
                true
            }
            None => false,
        }
    }

    /// Active lines only, later duplicates dropped.
    pub fn cleaned(&self) -> PackageList {
        let mut seen = HashSet::new();
        self.active()
            .filter(|line| seen.insert(*line))
            .collect()
    }

    pub fn to_file_content(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl<S: AsRef<str>> FromIterator<S> for PackageList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }
}
