//! Session aggregate - a scheduled game and its roster
//!
//! # Invariants
//!
//! - joined players never exceed `max_players`
//! - a user holds at most one `Joined` entry per session
//! - every roster entry points back at its session
//!
//! All three are checked when a session is rebuilt from a [`SessionRecord`],
//! and preserved by every mutating method.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::Sport;
use crate::error::DomainError;
use crate::types::{PlayerStatus, SessionStatus};
use crate::value_objects::{Description, PlayerLimit, SessionDuration, SessionTitle, Venue};
use crate::{SessionId, SessionPlayerId, SportId, UserId};

// =============================================================================
// SessionPlayer
// =============================================================================

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPlayer {
    id: SessionPlayerId,
    session_id: SessionId,
    user_id: UserId,
    joined_at: DateTime<Utc>,
    status: PlayerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cancellation_reason: Option<String>,
}

impl SessionPlayer {
    /// A fresh `Joined` entry.
    pub fn joined(session_id: SessionId, user_id: UserId, joined_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionPlayerId::new(),
            session_id,
            user_id,
            joined_at,
            status: PlayerStatus::Joined,
            cancellation_reason: None,
        }
    }

    #[inline]
    pub fn id(&self) -> SessionPlayerId {
        self.id
    }

    #[inline]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    #[inline]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn cancellation_reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }

    pub fn is_joined(&self) -> bool {
        self.status.is_joined()
    }
}

// =============================================================================
// Scheduling input
// =============================================================================

/// Validated details for a session that is about to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub title: SessionTitle,
    pub description: Description,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: SessionDuration,
    pub venue: Venue,
    /// Requested capacity; lowered to the sport's ceiling when scheduling.
    pub max_players: PlayerLimit,
}

/// Result of [`Session::join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined(SessionPlayerId),
    AlreadyJoined,
}

/// Result of [`Session::leave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left { removed: usize },
    NotMember,
}

// =============================================================================
// Session
// =============================================================================

/// A scheduled session for one sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct Session {
    id: SessionId,
    sport_id: SportId,
    title: SessionTitle,
    description: Description,
    date: NaiveDate,
    time: NaiveTime,
    duration: SessionDuration,
    max_players: PlayerLimit,
    venue: Venue,
    created_by: UserId,
    players: Vec<SessionPlayer>,
    status: SessionStatus,
    created_at: DateTime<Utc>,
}

impl Session {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Schedule a new session for `sport`.
    ///
    /// The requested capacity is silently lowered to the sport's
    /// `max_players`; it is never rejected for being too large.
    pub fn schedule(
        details: NewSession,
        sport: &Sport,
        created_by: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            sport_id: sport.id(),
            title: details.title,
            description: details.description,
            date: details.date,
            time: details.time,
            duration: details.duration,
            max_players: details.max_players.clamped_to(sport.max_players()),
            venue: details.venue,
            created_by,
            players: Vec::new(),
            status: SessionStatus::Upcoming,
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[inline]
    pub fn sport_id(&self) -> SportId {
        self.sport_id
    }

    #[inline]
    pub fn title(&self) -> &SessionTitle {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[inline]
    pub fn duration(&self) -> SessionDuration {
        self.duration
    }

    #[inline]
    pub fn max_players(&self) -> PlayerLimit {
        self.max_players
    }

    #[inline]
    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    #[inline]
    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Roster entries in join order, including cancelled ones.
    #[inline]
    pub fn players(&self) -> &[SessionPlayer] {
        &self.players
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Roster queries
    // =========================================================================

    /// Number of entries currently `Joined`.
    pub fn joined_count(&self) -> u32 {
        let count = self.players.iter().filter(|p| p.is_joined()).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    pub fn is_full(&self) -> bool {
        self.joined_count() >= self.max_players.get()
    }

    pub fn spots_left(&self) -> u32 {
        self.max_players.get().saturating_sub(self.joined_count())
    }

    /// Whether `user_id` has a `Joined` entry.
    pub fn has_joined(&self, user_id: UserId) -> bool {
        self.players
            .iter()
            .any(|p| p.user_id == user_id && p.is_joined())
    }

    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    // =========================================================================
    // Roster mutations
    // =========================================================================

    /// Add `user_id` to the roster.
    ///
    /// Joining twice is a no-op. The capacity check runs before anything is
    /// changed, and a roster with exactly `max_players` joined entries is full.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionFull` when no spot is left.
    pub fn join(&mut self, user_id: UserId, now: DateTime<Utc>) -> Result<JoinOutcome, DomainError> {
        if self.has_joined(user_id) {
            return Ok(JoinOutcome::AlreadyJoined);
        }

        let current = self.joined_count();
        let max = self.max_players.get();
        if current >= max {
            return Err(DomainError::session_full(current, max));
        }

        let player = SessionPlayer::joined(self.id, user_id, now);
        let player_id = player.id;
        self.players.push(player);
        Ok(JoinOutcome::Joined(player_id))
    }

    /// Remove every roster entry of `user_id`, whatever its status.
    pub fn leave(&mut self, user_id: UserId) -> LeaveOutcome {
        let before = self.players.len();
        self.players.retain(|p| p.user_id != user_id);
        match before - self.players.len() {
            0 => LeaveOutcome::NotMember,
            removed => LeaveOutcome::Left { removed },
        }
    }

    /// Mark the user's `Joined` entry as `Cancelled`, keeping it on the roster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when the user has no `Joined` entry.
    pub fn cancel_participation(
        &mut self,
        user_id: UserId,
        reason: Option<String>,
    ) -> Result<SessionPlayerId, DomainError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.user_id == user_id && p.is_joined())
            .ok_or_else(|| DomainError::not_found("SessionPlayer", user_id.to_string()))?;

        player.status = PlayerStatus::Cancelled;
        player.cancellation_reason = reason.filter(|r| !r.trim().is_empty());
        Ok(player.id)
    }

    pub fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }

    // =========================================================================
    // Schedule queries
    // =========================================================================

    /// Local wall-clock start.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at() + self.duration.to_chrono()
    }

    /// True once the scheduled start is strictly earlier than `now`.
    pub fn has_started_before(&self, now: NaiveDateTime) -> bool {
        self.starts_at() < now
    }

    /// Past sessions are completed or already started, whatever their status says.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.status == SessionStatus::Completed || self.has_started_before(now)
    }

    /// Upcoming sessions are still marked upcoming and have not started yet.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.status == SessionStatus::Upcoming && !self.has_started_before(now)
    }
}

// =============================================================================
// Record form
// =============================================================================

/// Plain, unchecked form of a [`Session`].
///
/// Used for fixtures and serialization; converting back into a `Session`
/// re-validates the roster invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: SessionId,
    pub sport_id: SportId,
    pub title: SessionTitle,
    pub description: Description,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: SessionDuration,
    pub max_players: PlayerLimit,
    #[serde(rename = "location")]
    pub venue: Venue,
    pub created_by: UserId,
    pub players: Vec<SessionPlayer>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = DomainError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let mut joined_users = HashSet::new();
        for player in &record.players {
            if player.session_id != record.id {
                return Err(DomainError::validation(format!(
                    "Roster entry {} belongs to session {}, not {}",
                    player.id, player.session_id, record.id
                )));
            }
            if player.is_joined() && !joined_users.insert(player.user_id) {
                return Err(DomainError::validation(format!(
                    "User {} is joined to session {} more than once",
                    player.user_id, record.id
                )));
            }
        }

        let joined = u32::try_from(joined_users.len()).unwrap_or(u32::MAX);
        if joined > record.max_players.get() {
            return Err(DomainError::session_full(joined, record.max_players.get()));
        }

        Ok(Self {
            id: record.id,
            sport_id: record.sport_id,
            title: record.title,
            description: record.description,
            date: record.date,
            time: record.time,
            duration: record.duration,
            max_players: record.max_players,
            venue: record.venue,
            created_by: record.created_by,
            players: record.players,
            status: record.status,
            created_at: record.created_at,
        })
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            sport_id: session.sport_id,
            title: session.title,
            description: session.description,
            date: session.date,
            time: session.time,
            duration: session.duration,
            max_players: session.max_players,
            venue: session.venue,
            created_by: session.created_by,
            players: session.players,
            status: session.status,
            created_at: session.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SportName;
    use chrono::Duration;

    fn sport(max: u32) -> Sport {
        Sport::new(
            SportName::new("Basketball").unwrap(),
            Description::empty(),
            PlayerLimit::new(max).unwrap(),
            UserId::new(),
            Utc::now(),
        )
    }

    fn details(max: u32) -> NewSession {
        NewSession {
            title: SessionTitle::new("Pickup game").unwrap(),
            description: Description::empty(),
            date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            duration: SessionDuration::from_minutes(120).unwrap(),
            venue: Venue::new("Court A").unwrap(),
            max_players: PlayerLimit::new(max).unwrap(),
        }
    }

    fn session_with_capacity(max: u32) -> Session {
        Session::schedule(details(max), &sport(max), UserId::new(), Utc::now())
    }

    #[test]
    fn schedule_clamps_capacity_to_sport() {
        let session = Session::schedule(details(100), &sport(10), UserId::new(), Utc::now());
        assert_eq!(session.max_players().get(), 10);
    }

    #[test]
    fn schedule_keeps_smaller_capacity() {
        let session = Session::schedule(details(4), &sport(10), UserId::new(), Utc::now());
        assert_eq!(session.max_players().get(), 4);
    }

    #[test]
    fn schedule_starts_empty_and_upcoming() {
        let sport = sport(10);
        let creator = UserId::new();
        let session = Session::schedule(details(8), &sport, creator, Utc::now());
        assert!(session.players().is_empty());
        assert_eq!(session.status(), SessionStatus::Upcoming);
        assert_eq!(session.sport_id(), sport.id());
        assert!(session.is_created_by(creator));
    }

    #[test]
    fn join_appends_joined_entry() {
        let mut session = session_with_capacity(2);
        let user = UserId::new();
        let now = Utc::now();

        let outcome = session.join(user, now).unwrap();

        let JoinOutcome::Joined(player_id) = outcome else {
            panic!("expected Joined");
        };
        let entry = &session.players()[0];
        assert_eq!(entry.id(), player_id);
        assert_eq!(entry.user_id(), user);
        assert_eq!(entry.session_id(), session.id());
        assert_eq!(entry.joined_at(), now);
        assert!(entry.is_joined());
    }

    #[test]
    fn join_twice_is_noop() {
        let mut session = session_with_capacity(5);
        let user = UserId::new();
        session.join(user, Utc::now()).unwrap();
        let once = session.players().to_vec();

        let outcome = session.join(user, Utc::now()).unwrap();

        assert_eq!(outcome, JoinOutcome::AlreadyJoined);
        assert_eq!(session.players(), once.as_slice());
    }

    #[test]
    fn join_rejects_when_count_equals_max() {
        let mut session = session_with_capacity(2);
        session.join(UserId::new(), Utc::now()).unwrap();
        session.join(UserId::new(), Utc::now()).unwrap();
        let before = session.clone();

        let err = session.join(UserId::new(), Utc::now()).unwrap_err();

        assert_eq!(err, DomainError::session_full(2, 2));
        assert_eq!(session, before);
    }

    #[test]
    fn joined_count_never_exceeds_capacity() {
        let mut session = session_with_capacity(3);
        for _ in 0..10 {
            let _ = session.join(UserId::new(), Utc::now());
            assert!(session.joined_count() <= session.max_players().get());
        }
        assert!(session.is_full());
        assert_eq!(session.spots_left(), 0);
    }

    #[test]
    fn leave_removes_every_entry_for_user() {
        let mut session = session_with_capacity(3);
        let user = UserId::new();
        session.join(user, Utc::now()).unwrap();
        session.cancel_participation(user, None).unwrap();
        session.join(user, Utc::now()).unwrap();
        assert_eq!(session.players().len(), 2);

        let outcome = session.leave(user);

        assert_eq!(outcome, LeaveOutcome::Left { removed: 2 });
        assert!(session.players().is_empty());
    }

    #[test]
    fn leave_without_membership_is_noop() {
        let mut session = session_with_capacity(3);
        session.join(UserId::new(), Utc::now()).unwrap();
        let before = session.clone();

        assert_eq!(session.leave(UserId::new()), LeaveOutcome::NotMember);
        assert_eq!(session, before);
    }

    #[test]
    fn cancel_frees_a_spot_and_keeps_history() {
        let mut session = session_with_capacity(1);
        let user = UserId::new();
        session.join(user, Utc::now()).unwrap();
        assert!(session.is_full());

        session
            .cancel_participation(user, Some("Injured".to_string()))
            .unwrap();

        assert!(!session.is_full());
        assert!(!session.has_joined(user));
        let entry = &session.players()[0];
        assert_eq!(entry.status(), PlayerStatus::Cancelled);
        assert_eq!(entry.cancellation_reason(), Some("Injured"));
        session.join(UserId::new(), Utc::now()).unwrap();
    }

    #[test]
    fn cancel_without_joined_entry_is_not_found() {
        let mut session = session_with_capacity(1);
        let err = session.cancel_participation(UserId::new(), None).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn past_and_upcoming_follow_start_time() {
        let session = session_with_capacity(2);
        let start = session.starts_at();

        assert!(session.is_upcoming(start));
        assert!(!session.is_past(start));

        let after = start + Duration::minutes(1);
        assert!(session.is_past(after));
        assert!(!session.is_upcoming(after));
    }

    #[test]
    fn completed_is_past_even_in_future() {
        let mut session = session_with_capacity(2);
        session.set_status(SessionStatus::Completed);
        let long_before = session.starts_at() - Duration::days(30);
        assert!(session.is_past(long_before));
        assert!(!session.is_upcoming(long_before));
    }

    #[test]
    fn ends_at_adds_duration() {
        let session = session_with_capacity(2);
        assert_eq!(session.ends_at() - session.starts_at(), Duration::minutes(120));
    }

    #[test]
    fn record_round_trip_preserves_roster() {
        let mut session = session_with_capacity(2);
        session.join(UserId::new(), Utc::now()).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn record_with_overfull_roster_is_rejected() {
        let mut session = session_with_capacity(2);
        session.join(UserId::new(), Utc::now()).unwrap();
        session.join(UserId::new(), Utc::now()).unwrap();
        let mut record = SessionRecord::from(session);
        record.max_players = PlayerLimit::new(1).unwrap();

        let err = Session::try_from(record).unwrap_err();
        assert!(matches!(err, DomainError::SessionFull { current: 2, max: 1 }));
    }

    #[test]
    fn record_with_duplicate_joined_user_is_rejected() {
        let mut session = session_with_capacity(3);
        let user = UserId::new();
        session.join(user, Utc::now()).unwrap();
        let mut record = SessionRecord::from(session);
        let duplicate = SessionPlayer::joined(record.id, user, Utc::now());
        record.players.push(duplicate);

        assert!(Session::try_from(record).is_err());
    }

    #[test]
    fn record_with_foreign_roster_entry_is_rejected() {
        let session = session_with_capacity(3);
        let mut record = SessionRecord::from(session);
        record
            .players
            .push(SessionPlayer::joined(SessionId::new(), UserId::new(), Utc::now()));

        assert!(Session::try_from(record).is_err());
    }
}
