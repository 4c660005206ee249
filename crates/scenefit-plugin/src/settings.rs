// crates/scenefit-plugin/src/settings.rs
//
// Optional JSON settings. A missing or unreadable file never blocks
// registration; defaults apply and a warning is logged.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Master switch. A disabled plugin still registers its information but
    /// never scans or polls.
    pub enabled:          bool,
    /// Poll period of the background worker.
    pub poll_interval_ms: u64,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self { enabled: true, poll_interval_ms: 100 }
    }
}

impl PluginSettings {
    /// The poll period, floored so a zeroed config cannot busy-loop the
    /// host's edit section.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(10))
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or malformed. Only a present-but-broken file is worth a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match read(path) {
            Ok(s) => s,
            Err(e) => {
                if path.exists() {
                    log::warn!("settings unreadable, using defaults: {e:#}");
                }
                Self::default()
            }
        }
    }
}

fn read(path: &Path) -> Result<PluginSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(settings)
}
