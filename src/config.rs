use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::binding::ActionMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compose: Compose,
    /// Action id → binding spec (e.g. `"app.quit" = "cmd+q"`).
    pub keybinds: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Compose {
    /// If false, dead-key composition is bypassed and characters pass
    /// through as typed.
    /// Default: true.
    pub enabled: bool,
}

impl Default for Compose {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("[CONFIG] Failed to read {}: {}", path.display(), e);
                }
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "[CONFIG] Parse error in {}: {} (using defaults)",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Install the configured keybinds into an action map.
    ///
    /// Entries that fail to parse or name an unregistered action are
    /// logged and skipped; configuration never fails the caller.
    pub fn apply_keybinds(&self, actions: &mut ActionMap) {
        for (id, spec) in &self.keybinds {
            if let Err(e) = actions.bind_spec(spec, id) {
                log::warn!("[CONFIG] Ignoring keybind {id:?} = {spec:?}: {e}");
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
            && !xdg.is_empty()
        {
            return Some(PathBuf::from(xdg).join("deadkeys/config.toml"));
        }
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".config/deadkeys/config.toml"));
        }
        None
    }
}
