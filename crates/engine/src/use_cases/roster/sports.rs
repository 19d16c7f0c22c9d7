//! Sport catalog CRUD operations.

use std::sync::Arc;

use tokio::sync::Mutex;

use sportsched_domain::{Description, PlayerLimit, Sport, SportChanges, SportId, SportName, UserId};

use crate::infrastructure::ports::{ClockPort, SportRepo};
use crate::use_cases::validation::{require_at_least, require_non_empty};

use super::RosterError;

#[derive(Debug, Clone, Default)]
pub struct CreateSportRequest {
    pub name: String,
    pub description: String,
    pub max_players: u32,
}

/// `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSportRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_players: Option<u32>,
}

pub struct SportCrud {
    sports: Arc<dyn SportRepo>,
    clock: Arc<dyn ClockPort>,
    /// Held from load to save so an update cannot revive a deleted sport.
    writes: Mutex<()>,
}

impl SportCrud {
    pub fn new(sports: Arc<dyn SportRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            sports,
            clock,
            writes: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<Sport>, RosterError> {
        Ok(self.sports.list().await?)
    }

    pub async fn get(&self, sport_id: SportId) -> Result<Option<Sport>, RosterError> {
        Ok(self.sports.get(sport_id).await?)
    }

    pub async fn create(
        &self,
        request: CreateSportRequest,
        creator: UserId,
    ) -> Result<Sport, RosterError> {
        require_non_empty(&request.name, "Sport name")?;
        require_at_least(request.max_players, 1, "Max players")?;

        let sport = Sport::new(
            SportName::new(request.name)?,
            Description::new(request.description)?,
            PlayerLimit::new(request.max_players)?,
            creator,
            self.clock.now(),
        );

        self.sports.save(&sport).await?;
        tracing::info!(sport_id = %sport.id(), name = %sport.name(), "Sport created");
        Ok(sport)
    }

    /// Apply the given fields. Existing sessions keep their capacity even
    /// when `max_players` is lowered.
    pub async fn update(
        &self,
        sport_id: SportId,
        request: UpdateSportRequest,
    ) -> Result<Sport, RosterError> {
        let _gate = self.writes.lock().await;
        let sport = self
            .sports
            .get(sport_id)
            .await?
            .ok_or_else(|| RosterError::not_found("Sport", sport_id))?;

        let changes = SportChanges {
            name: request.name.map(SportName::new).transpose()?,
            description: request.description.map(Description::new).transpose()?,
            max_players: request.max_players.map(PlayerLimit::new).transpose()?,
        };

        let updated = sport.with_changes(changes);
        self.sports.save(&updated).await?;
        tracing::info!(sport_id = %sport_id, "Sport updated");
        Ok(updated)
    }

    /// Remove a sport. Sessions that reference it are left alone; unknown
    /// ids are ignored.
    pub async fn delete(&self, sport_id: SportId) -> Result<(), RosterError> {
        let _gate = self.writes.lock().await;
        if self.sports.delete(sport_id).await? {
            tracing::info!(sport_id = %sport_id, "Sport deleted");
        } else {
            tracing::debug!(sport_id = %sport_id, "Delete ignored: sport not found");
        }
        Ok(())
    }
}
