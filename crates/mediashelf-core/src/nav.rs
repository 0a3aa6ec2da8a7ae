//! Navigation menus: dropdowns that open one at a time, and accordion
//! sections of which at most one is visible.

use serde::{Deserialize, Serialize};

use crate::{CoreError, ElementKind, Result};

/// A submenu entry that reveals an accordion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Id of the accordion section this item shows.
    pub target: String,
}

/// A top-level navigation entry with a dropdown of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Navigation layout from the site definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub menus: Vec<NavMenu>,
    #[serde(default)]
    pub sections: Vec<NavSection>,
}

impl Navigation {
    pub fn section(&self, id: &str) -> Option<&NavSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Open/closed dropdowns and visible/hidden sections.
///
/// Starts with every dropdown closed and every section hidden; nothing is
/// persisted across runs.
#[derive(Debug, Clone)]
pub struct NavigationController {
    dropdowns: Vec<String>,
    sections: Vec<String>,
    open: Option<usize>,
    visible: Option<usize>,
}

impl NavigationController {
    pub fn new<D, S>(dropdown_ids: D, section_ids: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            dropdowns: dropdown_ids.into_iter().map(Into::into).collect(),
            sections: section_ids.into_iter().map(Into::into).collect(),
            open: None,
            visible: None,
        }
    }

    pub fn for_navigation(nav: &Navigation) -> Self {
        Self::new(
            nav.menus.iter().map(|m| m.id.clone()),
            nav.sections.iter().map(|s| s.id.clone()),
        )
    }

    /// Id of the open dropdown, if any.
    pub fn open_dropdown(&self) -> Option<&str> {
        self.open.map(|i| self.dropdowns[i].as_str())
    }

    /// Id of the visible accordion section, if any.
    pub fn visible_section(&self) -> Option<&str> {
        self.visible.map(|i| self.sections[i].as_str())
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_dropdown() == Some(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_section() == Some(id)
    }

    /// Close `id` if it is open; otherwise close every other dropdown and
    /// open it.
    pub fn toggle_dropdown(&mut self, id: &str) -> Result<()> {
        let index = self
            .dropdowns
            .iter()
            .position(|d| d == id)
            .ok_or_else(|| missing(ElementKind::Dropdown, id))?;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(dropdown = id, open = self.open.is_some(), "toggled dropdown");
        Ok(())
    }

    /// Close every dropdown (a click outside the navigation region).
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Show section `id`, hide the others and close all dropdowns.
    ///
    /// Dropdowns close even when `id` is unknown; section visibility is then
    /// left as it was.
    pub fn select_accordion_target(&mut self, id: &str) -> Result<()> {
        self.close_all();
        let index = self
            .sections
            .iter()
            .position(|s| s == id)
            .ok_or_else(|| missing(ElementKind::Section, id))?;
        self.visible = Some(index);
        tracing::debug!(section = id, "accordion section shown");
        Ok(())
    }

    /// Hide every section.
    pub fn hide_sections(&mut self) {
        self.visible = None;
    }
}

fn missing(kind: ElementKind, id: &str) -> CoreError {
    tracing::warn!(%kind, id, "navigation element not found");
    CoreError::MissingElement {
        kind,
        id: id.to_string(),
    }
}
