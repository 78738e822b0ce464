use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".filesee_config";

/// Supplies the starting directory when none is configured.
pub trait HomeDirProvider {
    fn home_dir(&self) -> Option<String>;
}

/// The invoking user's home directory.
pub struct SystemHome;

impl HomeDirProvider for SystemHome {
    fn home_dir(&self) -> Option<String> {
        home::home_dir().map(|p| p.to_string_lossy().to_string())
    }
}

/// A fixed starting directory.
pub struct FixedHome(pub String);

impl HomeDirProvider for FixedHome {
    fn home_dir(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub start_path: Option<String>,
    pub load_on_construct: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            start_path: None,
            load_on_construct: true,
        }
    }
}

impl BrowserConfig {
    /// Reads a `KEY=VALUE` file. Returns `None` if the file cannot be read.
    ///
    /// Recognised keys: `START_DIR`, `LOAD_ON_START` (`true`/`false`).
    #[must_use]
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        Some(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut map = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some((k, v)) = line.split_once('=') {
                let key = k.trim();
                let val = v.trim().trim_matches('"');
                map.insert(key, val);
            }
        }

        let mut config = BrowserConfig::default();
        if let Some(dir) = map.get("START_DIR")
            && !dir.is_empty()
        {
            config.start_path = Some((*dir).to_string());
        }
        if let Some(flag) = map.get("LOAD_ON_START") {
            match flag.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => config.load_on_construct = true,
                "false" | "no" | "0" => config.load_on_construct = false,
                other => log::warn!("Ignoring LOAD_ON_START={other}, expected true or false"),
            }
        }
        config
    }

    /// Configured start path, else the provider's home, else `/`.
    #[must_use]
    pub fn resolve_start_path(&self, home: &dyn HomeDirProvider) -> String {
        self.start_path
            .clone()
            .or_else(|| home.home_dir())
            .unwrap_or_else(|| "/".to_string())
    }
}
