//! Session scheduling and roster membership.
//!
//! Every mutation loads the session, applies the change to the aggregate and
//! saves it back whole. A rejected change never reaches the repository.
//! Mutations hold the roster's write gate from load to save, so concurrent
//! changes to one session apply one after another.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::Mutex;

use sportsched_domain::common::{parse_session_date, parse_session_time};
use sportsched_domain::{
    classify, Description, JoinOutcome, LeaveOutcome, NewSession, PlayerLimit, Session,
    SessionDuration, SessionId, SessionPartition, SessionStatus, SessionTitle, Sport, SportId,
    UserId, Venue, MIN_SESSION_MINUTES,
};

use crate::infrastructure::clock::local_wall_clock;
use crate::infrastructure::ports::{ClockPort, SessionRepo, SportRepo};
use crate::use_cases::validation::{require_at_least, require_non_empty};

use super::RosterError;

/// Shown in place of a sport that no longer exists.
pub const UNKNOWN_SPORT: &str = "Unknown Sport";

/// Raw input of the new-session form.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    pub sport_id: SportId,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub duration_minutes: u32,
    pub location: String,
    /// Lowered to the sport's maximum when larger.
    pub max_players: u32,
}

/// A session together with the name of its sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    pub session: Session,
    pub sport_name: String,
}

pub struct SessionRoster {
    sessions: Arc<dyn SessionRepo>,
    sports: Arc<dyn SportRepo>,
    clock: Arc<dyn ClockPort>,
    writes: Mutex<()>,
}

impl SessionRoster {
    pub fn new(
        sessions: Arc<dyn SessionRepo>,
        sports: Arc<dyn SportRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            sessions,
            sports,
            clock,
            writes: Mutex::new(()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub async fn list(&self) -> Result<Vec<Session>, RosterError> {
        Ok(self.sessions.list().await?)
    }

    pub async fn get(&self, session_id: SessionId) -> Result<Option<Session>, RosterError> {
        Ok(self.sessions.get(session_id).await?)
    }

    /// Upcoming and past sessions as of the clock's current local time.
    pub async fn classify(&self) -> Result<SessionPartition, RosterError> {
        self.classify_at(local_wall_clock(self.clock.now())).await
    }

    pub async fn classify_at(&self, now: NaiveDateTime) -> Result<SessionPartition, RosterError> {
        let sessions = self.sessions.list().await?;
        Ok(classify(&sessions, now))
    }

    pub async fn details(&self, session_id: SessionId) -> Result<SessionDetails, RosterError> {
        let session = self.require_session(session_id).await?;
        let sports = self.sports.list().await?;
        Ok(attach_sport_name(session, &sports))
    }

    /// Every session with its sport name, in list order.
    pub async fn list_details(&self) -> Result<Vec<SessionDetails>, RosterError> {
        let sessions = self.sessions.list().await?;
        let sports = self.sports.list().await?;
        Ok(sessions
            .into_iter()
            .map(|session| attach_sport_name(session, &sports))
            .collect())
    }

    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Schedule a session for an existing sport.
    pub async fn create_session(
        &self,
        request: CreateSessionRequest,
        creator: UserId,
    ) -> Result<Session, RosterError> {
        let details = parse_request(&request)?;

        let sport = self
            .sports
            .get(request.sport_id)
            .await?
            .ok_or_else(|| RosterError::not_found("Sport", request.sport_id))?;

        let session = Session::schedule(details, &sport, creator, self.clock.now());
        if session.max_players().get() < request.max_players {
            tracing::debug!(
                requested = request.max_players,
                allowed = session.max_players().get(),
                "Session capacity lowered to sport maximum"
            );
        }

        self.sessions.save(&session).await?;
        tracing::info!(
            session_id = %session.id(),
            sport_id = %sport.id(),
            user_id = %creator,
            "Session created"
        );
        Ok(session)
    }

    pub async fn set_status(
        &self,
        session_id: SessionId,
        status: SessionStatus,
    ) -> Result<Session, RosterError> {
        let _gate = self.writes.lock().await;
        let mut session = self.require_session(session_id).await?;
        session.set_status(status);
        self.sessions.save(&session).await?;
        tracing::info!(session_id = %session_id, status = ?status, "Session status changed");
        Ok(session)
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Add `user_id` to the roster. Joining twice changes nothing.
    pub async fn join(&self, session_id: SessionId, user_id: UserId) -> Result<Session, RosterError> {
        let _gate = self.writes.lock().await;
        let mut session = self.require_session(session_id).await?;

        match session.join(user_id, self.clock.now()) {
            Ok(JoinOutcome::Joined(player_id)) => {
                self.sessions.save(&session).await?;
                tracing::info!(
                    session_id = %session_id,
                    user_id = %user_id,
                    player_id = %player_id,
                    "Joined session"
                );
            }
            Ok(JoinOutcome::AlreadyJoined) => {
                tracing::debug!(session_id = %session_id, user_id = %user_id, "Already joined");
            }
            Err(e) => {
                tracing::info!(session_id = %session_id, user_id = %user_id, "Join rejected: {}", e);
                return Err(e.into());
            }
        }
        Ok(session)
    }

    /// Drop every roster entry of `user_id`. Not being a member is fine.
    pub async fn leave(&self, session_id: SessionId, user_id: UserId) -> Result<Session, RosterError> {
        let _gate = self.writes.lock().await;
        let mut session = self.require_session(session_id).await?;

        match session.leave(user_id) {
            LeaveOutcome::Left { removed } => {
                self.sessions.save(&session).await?;
                tracing::info!(session_id = %session_id, user_id = %user_id, removed, "Left session");
            }
            LeaveOutcome::NotMember => {
                tracing::debug!(session_id = %session_id, user_id = %user_id, "Not a member");
            }
        }
        Ok(session)
    }

    /// Mark the user's membership cancelled, freeing the spot but keeping
    /// the entry on the roster.
    pub async fn cancel_participation(
        &self,
        session_id: SessionId,
        user_id: UserId,
        reason: Option<String>,
    ) -> Result<Session, RosterError> {
        let _gate = self.writes.lock().await;
        let mut session = self.require_session(session_id).await?;
        let player_id = session.cancel_participation(user_id, reason)?;
        self.sessions.save(&session).await?;
        tracing::info!(
            session_id = %session_id,
            user_id = %user_id,
            player_id = %player_id,
            "Participation cancelled"
        );
        Ok(session)
    }

    async fn require_session(&self, session_id: SessionId) -> Result<Session, RosterError> {
        self.sessions
            .get(session_id)
            .await?
            .ok_or_else(|| RosterError::not_found("Session", session_id))
    }
}

fn parse_request(request: &CreateSessionRequest) -> Result<NewSession, RosterError> {
    require_non_empty(&request.title, "Title")?;
    require_non_empty(&request.location, "Location")?;
    require_at_least(request.duration_minutes, MIN_SESSION_MINUTES, "Duration")?;
    require_at_least(request.max_players, 1, "Max players")?;

    Ok(NewSession {
        title: SessionTitle::new(request.title.as_str())?,
        description: Description::new(request.description.as_str())?,
        date: parse_session_date(&request.date)?,
        time: parse_session_time(&request.time)?,
        duration: SessionDuration::from_minutes(request.duration_minutes)?,
        venue: Venue::new(request.location.as_str())?,
        max_players: PlayerLimit::new(request.max_players)?,
    })
}

fn attach_sport_name(session: Session, sports: &[Sport]) -> SessionDetails {
    let sport_name = sports
        .iter()
        .find(|sport| sport.id() == session.sport_id())
        .map(|sport| sport.name().to_string())
        .unwrap_or_else(|| UNKNOWN_SPORT.to_string());
    SessionDetails {
        session,
        sport_name,
    }
}
