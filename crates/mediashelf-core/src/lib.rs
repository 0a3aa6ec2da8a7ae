use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod autocomplete;
pub mod catalog;
pub mod config_file;
pub mod html;
pub mod matcher;
pub mod nav;
pub mod panel;
pub mod render;
pub mod session;

// Re-export for convenience
pub use autocomplete::{ClickTarget, ImageAutocomplete, ImageEntry};
pub use catalog::{Catalog, DefaultPanel, SiteDefinition};
pub use matcher::{match_all, match_first, normalize_query};
pub use nav::{MenuItem, NavMenu, NavSection, Navigation, NavigationController};
pub use panel::{DetailPanelController, PanelChange};
pub use render::{RenderResult, ResultItem, render};
pub use session::{SearchOutcome, SearchSession};

/// A single catalog entry (book, film, magazine, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Free-form publication date, never parsed.
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    /// Id of the detail panel showing this record.
    pub detail_id: String,
}

/// Which matcher the search session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    All,
    First,
}

impl MatchMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::First => "first",
        }
    }

    /// Parse a mode name case-insensitively; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "first" => Some(Self::First),
            _ => None,
        }
    }
}

/// What kind of UI element a failed lookup referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Dropdown,
    Section,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dropdown => f.write_str("dropdown"),
            Self::Section => f.write_str("accordion section"),
        }
    }
}

/// Failure to load a site definition.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed site definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("duplicate detail panel id: {0}")]
    DuplicateDetailId(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("no {kind} with id {id:?}")]
    MissingElement { kind: ElementKind, id: String },
    #[error("no detail panel with id {0:?}")]
    MissingPanel(String),
    #[error("catalog load error: {0}")]
    Load(#[from] LoadError),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
