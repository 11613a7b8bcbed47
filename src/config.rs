use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// User overlay location, relative to `$HOME`.
const USER_CONFIG: &str = ".config/cmd-origin/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Shell used for classification instead of `$SHELL`. Empty means `$SHELL`.
    pub shell: String,
    /// What an empty `PATH` entry (`::`, leading or trailing `:`) means.
    pub empty_path_entries: EmptyPathEntry,
    /// Report each symlink hop between a PATH match and the real file.
    pub follow_symlinks: bool,
    /// Resolve `alias ls='ls -l'` on the search path instead of stopping
    /// at the repeated name.
    pub self_alias_via_path: bool,
    /// Optional log file (tilde-expanded). Empty disables file logging.
    pub log_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: String::new(),
            empty_path_entries: EmptyPathEntry::Skip,
            follow_symlinks: true,
            self_alias_via_path: false,
            log_file: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPathEntry {
    /// Ignore the entry.
    #[default]
    Skip,
    /// Treat the entry as `.`, as POSIX shells do.
    CurrentDir,
}

/// Process environment captured once at startup and handed to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `PATH`, if set.
    pub path: Option<String>,
    /// `SHELL`, if set.
    pub shell: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            path: std::env::var("PATH").ok(),
            shell: std::env::var("SHELL").ok(),
        }
    }
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    shell: Option<String>,
    empty_path_entries: Option<EmptyPathEntry>,
    follow_symlinks: Option<bool>,
    self_alias_via_path: Option<bool>,
    log_file: Option<String>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cmd-origin/config.toml (if exists)
    ///
    /// Scalars present in the overlay override the defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/cmd-origin/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(USER_CONFIG);
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("origin: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.shell {
            self.settings.shell = v;
        }
        if let Some(v) = s.empty_path_entries {
            self.settings.empty_path_entries = v;
        }
        if let Some(v) = s.follow_symlinks {
            self.settings.follow_symlinks = v;
        }
        if let Some(v) = s.self_alias_via_path {
            self.settings.self_alias_via_path = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }
    }

    /// Render the merged configuration as TOML (for `--dump-config`).
    pub fn to_toml(&self) -> String {
        toml::to_string(self).unwrap_or_default()
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
