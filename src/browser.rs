use crate::config::{BrowserConfig, HomeDirProvider};
use crate::error::BrowseError;
use crate::scanner::{DirectoryLister, FsLister};
use crate::types::{Entry, join_path, normalize_dir, parent_path};

/// Outcome of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loaded,
    Unreadable(String),
}

/// What to navigate to. `Entry` takes the same 0-based index as
/// [`DirectoryBrowser::get_entry`]; the parent is addressed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Parent,
    Entry(usize),
}

impl Selection {
    /// Maps the numbers shown to the user (0 = parent, n = entry n-1).
    #[must_use]
    pub fn from_display_number(n: usize) -> Self {
        match n {
            0 => Selection::Parent,
            n => Selection::Entry(n - 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved,
    Stayed,
}

/// A current directory plus a snapshot of its direct children.
///
/// `entries` is replaced wholesale on every load. Navigation that changes the
/// current path reloads right away, so indices always refer to the listing of
/// `current_path`.
pub struct DirectoryBrowser<L: DirectoryLister = FsLister> {
    current_path: String,
    entries: Vec<Entry>,
    status: LoadStatus,
    lister: L,
}

impl DirectoryBrowser<FsLister> {
    /// Opens `path` on the local filesystem and loads it.
    #[must_use]
    pub fn open(path: &str) -> Self {
        Self::with_lister(path, FsLister, true)
    }

    /// Starts at the configured path, or at the provider's home directory.
    #[must_use]
    pub fn from_config(config: &BrowserConfig, home: &dyn HomeDirProvider) -> Self {
        let start = config.resolve_start_path(home);
        Self::with_lister(&start, FsLister, config.load_on_construct)
    }
}

impl<L: DirectoryLister> DirectoryBrowser<L> {
    pub fn with_lister(path: &str, lister: L, load_on_construct: bool) -> Self {
        let mut browser = DirectoryBrowser {
            current_path: normalize_dir(path),
            entries: Vec::new(),
            status: LoadStatus::NotLoaded,
            lister,
        };
        if load_on_construct {
            // Failure is recorded in `status`
            let _ = browser.load();
        }
        browser
    }

    /// Re-reads the current directory. On failure the entry list is emptied
    /// and the error is returned.
    pub fn load(&mut self) -> Result<usize, BrowseError> {
        match self.lister.list(&self.current_path) {
            Ok(entries) => {
                log::debug!("Loaded {} entries from {}", entries.len(), self.current_path);
                self.entries = entries;
                self.status = LoadStatus::Loaded;
                Ok(self.entries.len())
            }
            Err(e) => {
                log::warn!("{e}");
                self.entries.clear();
                self.status = LoadStatus::Unreadable(e.to_string());
                Err(e)
            }
        }
    }

    /// Refreshes and returns the children of the current directory. An
    /// unreadable directory lists as empty; see [`Self::load_status`].
    pub fn list_entries(&mut self) -> &[Entry] {
        let _ = self.load();
        &self.entries
    }

    /// Entries from the last load, without touching the filesystem.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get_entry(&self, index: usize) -> Result<&Entry, BrowseError> {
        self.entries.get(index).ok_or(BrowseError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Absolute path of entry `index`. This is `current_path + "/" + name`
    /// except at the root, where the result is `/name` rather than `//name`.
    pub fn resolve_selection_path(&self, index: usize) -> Result<String, BrowseError> {
        let entry = self.get_entry(index)?;
        Ok(join_path(&self.current_path, &entry.name))
    }

    /// Moves to the parent or into a child directory. Selecting a file stays
    /// put. A browser that has not loaded yet loads before indexing.
    pub fn navigate(&mut self, selection: Selection) -> Result<Navigation, BrowseError> {
        let index = match selection {
            Selection::Parent => return Ok(self.navigate_up()),
            Selection::Entry(index) => index,
        };

        if self.status == LoadStatus::NotLoaded {
            // Failure is recorded in `status` and surfaces as out of range
            let _ = self.load();
        }

        let entry = self.get_entry(index)?;
        if !entry.is_directory {
            log::debug!("{} is not a directory, staying put", entry.name);
            return Ok(Navigation::Stayed);
        }
        let target = entry.absolute_path.clone();
        Ok(self.move_to(target))
    }

    pub fn navigate_up(&mut self) -> Navigation {
        let target = parent_path(&self.current_path);
        self.move_to(target)
    }

    fn move_to(&mut self, target: String) -> Navigation {
        if target == self.current_path {
            return Navigation::Stayed;
        }

        log::debug!("Navigating {} -> {}", self.current_path, target);
        self.current_path = target;
        let _ = self.load();
        Navigation::Moved
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}
