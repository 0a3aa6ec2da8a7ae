//! Detail panel state: exactly one panel out of a fixed set is active.
//!
//! The active panel is stored as an index into the panel list, so the
//! exactly-one invariant holds by construction. The controller is the only
//! writer of that index.

use crate::{CoreError, Result};

/// A transition of the active panel, returned so the presentation layer can
/// reveal (scroll to) the newly active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelChange {
    pub previous: String,
    pub current: String,
}

impl PanelChange {
    /// Whether the active panel actually moved.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Clone)]
pub struct DetailPanelController {
    panels: Vec<String>,
    default_index: usize,
    active: usize,
}

impl DetailPanelController {
    /// Build a controller over `panel_ids` with `default_id` active.
    ///
    /// Fails with [`CoreError::MissingPanel`] when the default is not one of
    /// the panels. Duplicate ids are collapsed to their first occurrence.
    pub fn new<I, S>(panel_ids: I, default_id: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut panels: Vec<String> = Vec::new();
        for id in panel_ids {
            let id = id.into();
            if !panels.contains(&id) {
                panels.push(id);
            }
        }
        let default_index = panels
            .iter()
            .position(|p| p == default_id)
            .ok_or_else(|| CoreError::MissingPanel(default_id.to_string()))?;
        Ok(Self {
            panels,
            default_index,
            active: default_index,
        })
    }

    /// Controller over every panel a catalog knows about.
    pub fn for_catalog(catalog: &crate::Catalog) -> Result<Self> {
        Self::new(catalog.panel_ids(), &catalog.default_panel().id)
    }

    pub fn active(&self) -> &str {
        &self.panels[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn is_default_active(&self) -> bool {
        self.active == self.default_index
    }

    pub fn contains(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p == id)
    }

    pub fn panel_ids(&self) -> &[String] {
        &self.panels
    }

    /// Make `detail_id` the only active panel.
    ///
    /// An unknown id leaves the state untouched; the error is logged and
    /// returned, and callers may ignore it.
    pub fn activate(&mut self, detail_id: &str) -> Result<PanelChange> {
        let Some(index) = self.panels.iter().position(|p| p == detail_id) else {
            tracing::warn!(detail_id, active = self.active(), "activate: unknown panel, ignoring");
            return Err(CoreError::MissingPanel(detail_id.to_string()));
        };
        Ok(self.set_active(index))
    }

    /// Make the default panel the only active panel.
    pub fn reset(&mut self) -> PanelChange {
        self.set_active(self.default_index)
    }

    fn set_active(&mut self, index: usize) -> PanelChange {
        let previous = self.panels[self.active].clone();
        self.active = index;
        let change = PanelChange {
            previous,
            current: self.panels[index].clone(),
        };
        if change.changed() {
            tracing::debug!(from = %change.previous, to = %change.current, "active panel changed");
        }
        change
    }
}
