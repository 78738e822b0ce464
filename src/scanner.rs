use crate::error::BrowseError;
use crate::types::{Entry, join_path};
use chrono::{DateTime, Local};
use std::ffi::OsStr;
use std::fs;
use walkdir::WalkDir;

/// Source of the direct children of a directory.
pub trait DirectoryLister {
    /// Lists `path` in the order the underlying source yields, or fails with
    /// [`BrowseError::UnreadableDirectory`].
    fn list(&self, path: &str) -> Result<Vec<Entry>, BrowseError>;
}

/// Lists directories on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &str) -> Result<Vec<Entry>, BrowseError> {
        let unreadable = |reason: String| BrowseError::UnreadableDirectory {
            path: path.to_string(),
            reason,
        };

        let meta = fs::metadata(path).map_err(|e| unreadable(e.to_string()))?;
        if !meta.is_dir() {
            return Err(unreadable("Not a directory".to_string()));
        }

        let mut entries = Vec::new();

        // Depth 1 only, filesystem order, links are reported as-is
        for item in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let dent = match item {
                Ok(d) => d,
                Err(e) if e.depth() == 0 => return Err(unreadable(e.to_string())),
                Err(e) => {
                    log::debug!("Skipping unreadable child of {path}: {e}");
                    continue;
                }
            };

            let name = entry_name(dent.file_name());
            let is_directory = dent.file_type().is_dir();
            let metadata = dent.metadata().ok();

            let size = match &metadata {
                Some(m) if m.is_file() => m.len(),
                _ => 0,
            };
            let modified: Option<DateTime<Local>> = metadata
                .as_ref()
                .and_then(|m| m.modified().ok())
                .map(Into::into);

            entries.push(Entry {
                absolute_path: join_path(path, &name),
                name,
                is_directory,
                size,
                modified,
            });
        }

        Ok(entries)
    }
}

/// UTF-8 form of a file name. Non-UTF-8 names are converted lossily, so the
/// resulting path may not exist on disk.
fn entry_name(raw: &OsStr) -> String {
    let name = raw.to_string_lossy().to_string();
    if raw.to_str().is_none() {
        log::debug!("File name {raw:?} is not valid UTF-8, listed as {name}");
    }
    name
}
