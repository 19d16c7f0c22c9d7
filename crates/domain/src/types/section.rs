//! Navigable areas of the app and who may open them

use serde::{Deserialize, Serialize};

use super::Role;

/// A top-level area the navigation can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    Sports,
    Sessions,
    MySessions,
    Reports,
}

impl Section {
    /// Sections shown in the navigation for `role`, in display order.
    pub fn visible_to(role: Role) -> Vec<Section> {
        [
            Section::Dashboard,
            Section::Sports,
            Section::Sessions,
            Section::MySessions,
            Section::Reports,
        ]
        .into_iter()
        .filter(|section| section.is_permitted(role))
        .collect()
    }

    pub fn is_permitted(&self, role: Role) -> bool {
        match self {
            Section::Sports | Section::Reports => role.is_admin(),
            Section::Dashboard | Section::Sessions | Section::MySessions => true,
        }
    }

    /// The section actually rendered when `role` asks for `self`.
    ///
    /// Admin-only sections fall back to the dashboard.
    pub fn resolve_for(self, role: Role) -> Section {
        if self.is_permitted(role) {
            self
        } else {
            Section::Dashboard
        }
    }
}
