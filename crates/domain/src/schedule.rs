//! Upcoming/past classification of sessions
//!
//! Classification looks at both the stored status and the clock. A session
//! can be in neither bucket: an `Ongoing` or `Cancelled` session whose start
//! is still ahead is neither upcoming nor past.

use chrono::NaiveDateTime;

use crate::entities::Session;

/// Sessions split for display, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPartition {
    pub upcoming: Vec<Session>,
    pub past: Vec<Session>,
}

/// Split `sessions` into upcoming and past relative to `now` (local wall clock).
pub fn classify<'a, I>(sessions: I, now: NaiveDateTime) -> SessionPartition
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut partition = SessionPartition::default();
    for session in sessions {
        if session.is_past(now) {
            partition.past.push(session.clone());
        } else if session.is_upcoming(now) {
            partition.upcoming.push(session.clone());
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{NewSession, Sport};
    use crate::types::SessionStatus;
    use crate::value_objects::{
        Description, PlayerLimit, SessionDuration, SessionTitle, SportName, Venue,
    };
    use crate::UserId;
    use chrono::{Duration, NaiveDate, Utc};

    fn session_at(start: NaiveDateTime, status: SessionStatus) -> Session {
        let sport = Sport::new(
            SportName::new("Tennis").unwrap(),
            Description::empty(),
            PlayerLimit::new(4).unwrap(),
            UserId::new(),
            Utc::now(),
        );
        let mut session = Session::schedule(
            NewSession {
                title: SessionTitle::new("Doubles").unwrap(),
                description: Description::empty(),
                date: start.date(),
                time: start.time(),
                duration: SessionDuration::from_minutes(60).unwrap(),
                venue: Venue::new("Court 1").unwrap(),
                max_players: PlayerLimit::new(4).unwrap(),
            },
            &sport,
            UserId::new(),
            Utc::now(),
        );
        session.set_status(status);
        session
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 22)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn yesterday_upcoming_is_past() {
        let session = session_at(now() - Duration::days(1), SessionStatus::Upcoming);
        let partition = classify([&session], now());
        assert_eq!(partition.past.len(), 1);
        assert!(partition.upcoming.is_empty());
    }

    #[test]
    fn tomorrow_upcoming_is_upcoming() {
        let session = session_at(now() + Duration::days(1), SessionStatus::Upcoming);
        let partition = classify([&session], now());
        assert_eq!(partition.upcoming.len(), 1);
        assert!(partition.past.is_empty());
    }

    #[test]
    fn start_equal_to_now_is_still_upcoming() {
        let session = session_at(now(), SessionStatus::Upcoming);
        let partition = classify([&session], now());
        assert_eq!(partition.upcoming.len(), 1);
    }

    #[test]
    fn completed_future_session_is_past() {
        let session = session_at(now() + Duration::days(3), SessionStatus::Completed);
        let partition = classify([&session], now());
        assert_eq!(partition.past.len(), 1);
        assert!(partition.upcoming.is_empty());
    }

    #[test]
    fn cancelled_future_session_is_in_neither_bucket() {
        let session = session_at(now() + Duration::days(3), SessionStatus::Cancelled);
        let partition = classify([&session], now());
        assert!(partition.past.is_empty());
        assert!(partition.upcoming.is_empty());
    }

    #[test]
    fn cancelled_elapsed_session_is_past() {
        let session = session_at(now() - Duration::hours(2), SessionStatus::Cancelled);
        assert_eq!(classify([&session], now()).past.len(), 1);
    }

    #[test]
    fn input_order_is_preserved() {
        let first = session_at(now() + Duration::days(2), SessionStatus::Upcoming);
        let second = session_at(now() + Duration::days(1), SessionStatus::Upcoming);
        let partition = classify([&first, &second], now());
        assert_eq!(partition.upcoming[0].id(), first.id());
        assert_eq!(partition.upcoming[1].id(), second.id());
    }
}
