use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub is_directory: bool,
    pub absolute_path: String,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

impl Entry {
    #[must_use]
    pub fn new(dir: &str, name: &str, is_directory: bool) -> Self {
        Entry {
            name: name.to_string(),
            is_directory,
            absolute_path: join_path(dir, name),
            size: 0,
            modified: None,
        }
    }
}

/// Joins `name` onto `dir` with a single `/`.
#[must_use]
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Drops the last path segment. The parent of `/` is `/`.
#[must_use]
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Trims trailing slashes, keeping `/` for the root.
#[must_use]
pub fn normalize_dir(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
