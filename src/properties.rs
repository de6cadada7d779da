//! Properties-file configuration source.

use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use confweave_core::ConfigSource;

/// In-memory `key=value` configuration source loaded from a properties
/// file. Blank lines and `#` comments are ignored.
#[derive(Debug, Default)]
pub struct PropertiesFile {
    entries: BTreeMap<String, String>,
}

impl PropertiesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read properties file {}", path.display()))?;

        let mut entries = BTreeMap::new();
        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                anyhow!(
                    "{}:{}: expected key=value, got '{}'",
                    path.display(),
                    lineno + 1,
                    line
                )
            })?;
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(PropertiesFile { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for PropertiesFile {
    fn resolve(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
