//! Immutable catalog store and the site definition it is loaded from.
//!
//! A site definition bundles the catalog records with the default detail
//! panel, the optional image list and the navigation layout. The embedded
//! definition ships with the crate; an external JSON file with the same
//! shape can replace it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::autocomplete::ImageEntry;
use crate::nav::Navigation;
use crate::{LoadError, Record};

const BUILTIN_SITE_JSON: &str = include_str!("../data/site.json");

/// The panel shown when nothing has been searched or selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultPanel {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// On-disk shape of a site definition, before validation.
#[derive(Debug, Deserialize)]
struct RawSite {
    default_panel: DefaultPanel,
    records: Vec<Record>,
    #[serde(default)]
    images: Vec<ImageEntry>,
    #[serde(default)]
    navigation: Navigation,
}

/// A validated site definition.
#[derive(Debug, Clone)]
pub struct SiteDefinition {
    pub catalog: Catalog,
    pub images: Vec<ImageEntry>,
    pub navigation: Navigation,
}

impl SiteDefinition {
    /// Parse the definition embedded in the crate.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json_str(BUILTIN_SITE_JSON)
    }

    /// Load and validate a definition from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let site = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            records = site.catalog.len(),
            "loaded site definition"
        );
        Ok(site)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: RawSite = serde_json::from_str(json)?;
        Ok(Self {
            catalog: Catalog::new(raw.default_panel, raw.records)?,
            images: raw.images,
            navigation: raw.navigation,
        })
    }

    /// Load from `path` if given, otherwise fall back to the embedded definition.
    pub fn load(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::builtin(),
        }
    }
}

/// Ordered, read-only list of records plus the default detail panel.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_panel: DefaultPanel,
    records: Vec<Record>,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// Every record needs a non-blank title and a non-blank `detailId`;
    /// detail ids must be unique and must not reuse the default panel id.
    pub fn new(default_panel: DefaultPanel, records: Vec<Record>) -> Result<Self, LoadError> {
        if default_panel.id.trim().is_empty() {
            return Err(LoadError::InvalidRecord {
                index: 0,
                reason: "default panel id is empty".to_string(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(default_panel.id.as_str());

        for (index, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(LoadError::InvalidRecord {
                    index,
                    reason: "title is empty".to_string(),
                });
            }
            if record.detail_id.trim().is_empty() {
                return Err(LoadError::InvalidRecord {
                    index,
                    reason: format!("{:?} has no detailId", record.title),
                });
            }
            if !seen.insert(record.detail_id.as_str()) {
                return Err(LoadError::DuplicateDetailId(record.detail_id.clone()));
            }
        }

        Ok(Self {
            default_panel,
            records,
        })
    }

    /// The embedded catalog without its images or navigation.
    pub fn builtin() -> Result<Self, LoadError> {
        Ok(SiteDefinition::builtin()?.catalog)
    }

    /// All records in definition order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn default_panel(&self) -> &DefaultPanel {
        &self.default_panel
    }

    /// Look up a record by its detail panel id.
    pub fn get(&self, detail_id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.detail_id == detail_id)
    }

    /// Records whose category equals `category`, ignoring ASCII case.
    pub fn by_category(&self, category: &str) -> Vec<&Record> {
        let category = category.trim();
        self.records
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// First record whose whole title equals `title`, ignoring case.
    pub fn find_by_title_exact(&self, title: &str) -> Option<&Record> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !r.category.is_empty() && !out.contains(&r.category.as_str()) {
                out.push(&r.category);
            }
        }
        out
    }

    /// Every known panel id: the default panel first, then one per record.
    pub fn panel_ids(&self) -> Vec<String> {
        std::iter::once(self.default_panel.id.clone())
            .chain(self.records.iter().map(|r| r.detail_id.clone()))
            .collect()
    }
}
