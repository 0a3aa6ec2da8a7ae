use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, MatchMode};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub catalog: Option<CatalogConfig>,
    pub search: Option<SearchConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to an external site definition (JSON).
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub match_mode: Option<MatchMode>,
    pub autocomplete: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub fps: Option<u32>,
}

/// Fully resolved settings after applying defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub match_mode: MatchMode,
    pub autocomplete: bool,
    pub theme: String,
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_mode: MatchMode::All,
            autocomplete: true,
            theme: "hacker".to_string(),
            fps: 10,
        }
    }
}

impl ConfigFile {
    /// Resolve into [`Settings`], filling gaps with defaults.
    pub fn settings(&self) -> Settings {
        let mut s = Settings::default();
        if let Some(path) = self.catalog.as_ref().and_then(|c| c.path.as_deref())
            && !path.is_empty()
        {
            s.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(search) = &self.search {
            if let Some(mode) = search.match_mode {
                s.match_mode = mode;
            }
            if let Some(ac) = search.autocomplete {
                s.autocomplete = ac;
            }
        }
        if let Some(display) = &self.display {
            if let Some(theme) = display.theme.as_ref().filter(|t| !t.is_empty()) {
                s.theme = theme.clone();
            }
            if let Some(fps) = display.fps {
                s.fps = fps.clamp(1, 120);
            }
        }
        s
    }
}

impl From<&Settings> for ConfigFile {
    /// Snapshot resolved settings so they can be written back to disk.
    fn from(s: &Settings) -> Self {
        ConfigFile {
            catalog: Some(CatalogConfig {
                path: s.catalog_path.as_ref().map(|p| p.display().to_string()),
            }),
            search: Some(SearchConfig {
                match_mode: Some(s.match_mode),
                autocomplete: Some(s.autocomplete),
            }),
            display: Some(DisplayConfig {
                theme: Some(s.theme.clone()),
                fps: Some(s.fps),
            }),
        }
    }
}

/// Environment variable naming an external site definition.
pub const CATALOG_ENV: &str = "MEDIASHELF_CATALOG";

/// Pick the site definition path: CLI flag, then the [`CATALOG_ENV`]
/// value, then the config file. `None` means the embedded definition.
/// An empty environment value counts as unset.
pub fn resolve_catalog_path(
    flag: Option<PathBuf>,
    env: Option<OsString>,
    settings: &Settings,
) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| settings.catalog_path.clone())
}

/// Platform config directory path: `<config_dir>/mediashelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mediashelf").join("config.toml"))
}

/// Load config by cascading CWD `.mediashelf.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".mediashelf.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        catalog: Some(CatalogConfig {
            path: overlay
                .catalog
                .as_ref()
                .and_then(|c| c.path.clone())
                .or_else(|| base.catalog.as_ref().and_then(|c| c.path.clone())),
        }),
        search: Some(SearchConfig {
            match_mode: overlay
                .search
                .as_ref()
                .and_then(|s| s.match_mode)
                .or_else(|| base.search.as_ref().and_then(|s| s.match_mode)),
            autocomplete: overlay
                .search
                .as_ref()
                .and_then(|s| s.autocomplete)
                .or_else(|| base.search.as_ref().and_then(|s| s.autocomplete)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
            fps: overlay
                .display
                .as_ref()
                .and_then(|d| d.fps)
                .or_else(|| base.display.as_ref().and_then(|d| d.fps)),
        }),
    }
}

/// Save a config to `path`, creating parent directories as needed.
pub fn save_to_path(config: &ConfigFile, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CoreError::Config(format!("failed to create config directory: {e}")))?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| CoreError::Config(format!("failed to serialize config: {e}")))?;
    std::fs::write(path, content)
        .map_err(|e| CoreError::Config(format!("failed to write config: {e}")))?;
    Ok(())
}

/// Save the config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, CoreError> {
    let path =
        config_path().ok_or_else(|| CoreError::Config("could not determine config directory".into()))?;
    save_to_path(config, &path)?;
    Ok(path)
}
