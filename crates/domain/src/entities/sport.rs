//! Sport entity - a catalog entry that caps session sizes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Description, PlayerLimit, SportName};
use crate::{SportId, UserId};

/// A sport offered for scheduling.
///
/// # Invariants
///
/// - `max_players` is at least 1 (enforced by `PlayerLimit`)
/// - `max_players` bounds sessions only when they are created; lowering it
///   later does not touch existing sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    id: SportId,
    name: SportName,
    description: Description,
    max_players: PlayerLimit,
    created_by: UserId,
    created_at: DateTime<Utc>,
}

/// Field-wise update for a sport; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportChanges {
    pub name: Option<SportName>,
    pub description: Option<Description>,
    pub max_players: Option<PlayerLimit>,
}

impl Sport {
    pub fn new(
        name: SportName,
        description: Description,
        max_players: PlayerLimit,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SportId::new(),
            name,
            description,
            max_players,
            created_by,
            created_at: now,
        }
    }

    /// Rebuild a sport with a known id, e.g. for fixtures.
    pub fn from_parts(
        id: SportId,
        name: SportName,
        description: Description,
        max_players: PlayerLimit,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            max_players,
            created_by,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> SportId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &SportName {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[inline]
    pub fn max_players(&self) -> PlayerLimit {
        self.max_players
    }

    #[inline]
    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with `changes` applied. Identity and audit fields are kept.
    pub fn with_changes(&self, changes: SportChanges) -> Sport {
        Sport {
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            description: changes
                .description
                .unwrap_or_else(|| self.description.clone()),
            max_players: changes.max_players.unwrap_or(self.max_players),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn basketball() -> Sport {
        Sport::new(
            SportName::new("Basketball").unwrap(),
            Description::empty(),
            PlayerLimit::new(10).unwrap(),
            UserId::new(),
            Utc::now(),
        )
    }

    #[test]
    fn with_changes_keeps_identity() {
        let sport = basketball();
        let updated = sport.with_changes(SportChanges {
            max_players: Some(PlayerLimit::new(6).unwrap()),
            ..Default::default()
        });

        assert_eq!(updated.id(), sport.id());
        assert_eq!(updated.created_at(), sport.created_at());
        assert_eq!(updated.name().as_str(), "Basketball");
        assert_eq!(updated.max_players().get(), 6);
    }

    #[test]
    fn with_changes_replaces_text_fields() {
        let updated = basketball().with_changes(SportChanges {
            name: Some(SportName::new("Streetball").unwrap()),
            description: Some(Description::new("3 on 3").unwrap()),
            max_players: None,
        });

        assert_eq!(updated.name().as_str(), "Streetball");
        assert_eq!(updated.description().as_str(), "3 on 3");
        assert_eq!(updated.max_players().get(), 10);
    }
}
