//! Demo catalog and sessions loaded by the runner when demo data is enabled.
//!
//! Ids are fixed so the sessions can point at the sports and the demo
//! accounts of [`IdentityDirectory::demo`](crate::use_cases::auth::IdentityDirectory::demo).

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use sportsched_domain::{
    Description, PlayerLimit, Session, SessionDuration, SessionId, SessionPlayer, SessionRecord,
    SessionStatus, SessionTitle, Sport, SportId, SportName, UserId, Venue,
};

use crate::use_cases::auth::{demo_admin_id, demo_player_id};

pub fn basketball_id() -> SportId {
    SportId::from_uuid(Uuid::from_u128(0x101))
}

pub fn soccer_id() -> SportId {
    SportId::from_uuid(Uuid::from_u128(0x102))
}

pub fn tennis_id() -> SportId {
    SportId::from_uuid(Uuid::from_u128(0x103))
}

pub fn volleyball_id() -> SportId {
    SportId::from_uuid(Uuid::from_u128(0x104))
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("demo timestamp is a valid UTC instant")
}

fn sport(id: SportId, name: &str, description: &str, max_players: u32, hour: u32) -> Sport {
    Sport::from_parts(
        id,
        SportName::new(name).expect("demo sport name is valid"),
        Description::new(description).expect("demo description is valid"),
        PlayerLimit::new(max_players).expect("demo player limit is non-zero"),
        demo_admin_id(),
        utc(2024, 1, 15, hour, 0),
    )
}

pub fn demo_sports() -> Vec<Sport> {
    vec![
        sport(
            basketball_id(),
            "Basketball",
            "Fast-paced team sport played on a court with hoops",
            10,
            10,
        ),
        sport(
            soccer_id(),
            "Soccer",
            "Popular team sport played with a ball on a grass field",
            22,
            11,
        ),
        sport(
            tennis_id(),
            "Tennis",
            "Racket sport played individually or in pairs",
            4,
            12,
        ),
        sport(
            volleyball_id(),
            "Volleyball",
            "Team sport where players hit a ball over a net",
            12,
            13,
        ),
    ]
}

struct DemoSession {
    id: u128,
    sport_id: SportId,
    title: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
    time: (u32, u32),
    minutes: u32,
    max_players: u32,
    location: &'static str,
    created_by: UserId,
    players: Vec<(UserId, DateTime<Utc>)>,
    status: SessionStatus,
    created_at: DateTime<Utc>,
}

impl DemoSession {
    fn build(self) -> Session {
        let id = SessionId::from_uuid(Uuid::from_u128(self.id));
        let record = SessionRecord {
            id,
            sport_id: self.sport_id,
            title: SessionTitle::new(self.title).expect("demo title is valid"),
            description: Description::new(self.description).expect("demo description is valid"),
            date: NaiveDate::from_ymd_opt(self.date.0, self.date.1, self.date.2)
                .expect("demo date is valid"),
            time: NaiveTime::from_hms_opt(self.time.0, self.time.1, 0).expect("demo time is valid"),
            duration: SessionDuration::from_minutes(self.minutes)
                .expect("demo duration is long enough"),
            max_players: PlayerLimit::new(self.max_players).expect("demo player limit is non-zero"),
            venue: Venue::new(self.location).expect("demo location is valid"),
            created_by: self.created_by,
            players: self
                .players
                .into_iter()
                .map(|(user, joined_at)| SessionPlayer::joined(id, user, joined_at))
                .collect(),
            status: self.status,
            created_at: self.created_at,
        };
        Session::try_from(record).expect("demo roster fits its session")
    }
}

pub fn demo_sessions() -> Vec<Session> {
    vec![
        DemoSession {
            id: 0x201,
            sport_id: basketball_id(),
            title: "Basketball Tournament",
            description: "Weekly basketball tournament for all skill levels",
            date: (2024, 1, 25),
            time: (18, 0),
            minutes: 120,
            max_players: 10,
            location: "Court A - Sports Complex",
            created_by: demo_admin_id(),
            players: vec![
                (demo_admin_id(), utc(2024, 1, 20, 10, 0)),
                (demo_player_id(), utc(2024, 1, 20, 11, 0)),
            ],
            status: SessionStatus::Upcoming,
            created_at: utc(2024, 1, 20, 9, 0),
        }
        .build(),
        DemoSession {
            id: 0x202,
            sport_id: soccer_id(),
            title: "Soccer Practice",
            description: "Friendly soccer match and skills training",
            date: (2024, 1, 24),
            time: (16, 30),
            minutes: 90,
            max_players: 22,
            location: "Field B - Main Stadium",
            created_by: demo_player_id(),
            players: vec![(demo_admin_id(), utc(2024, 1, 21, 10, 0))],
            status: SessionStatus::Upcoming,
            created_at: utc(2024, 1, 21, 9, 0),
        }
        .build(),
        DemoSession {
            id: 0x203,
            sport_id: basketball_id(),
            title: "Morning Basketball",
            description: "Early morning basketball session",
            date: (2024, 1, 15),
            time: (8, 0),
            minutes: 60,
            max_players: 8,
            location: "Court B",
            created_by: demo_admin_id(),
            players: Vec::new(),
            status: SessionStatus::Completed,
            created_at: utc(2024, 1, 10, 9, 0),
        }
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_point_at_demo_sports() {
        let sports = demo_sports();
        for session in demo_sessions() {
            let sport = sports
                .iter()
                .find(|s| s.id() == session.sport_id())
                .unwrap();
            assert!(session.max_players() <= sport.max_players());
        }
    }

    #[test]
    fn demo_rosters_match_fixture() {
        let sessions = demo_sessions();
        assert_eq!(sessions[0].joined_count(), 2);
        assert!(sessions[0].has_joined(demo_player_id()));
        assert_eq!(sessions[1].joined_count(), 1);
        assert_eq!(sessions[2].status(), SessionStatus::Completed);
        assert!(sessions[2].players().is_empty());
    }

    #[test]
    fn fixtures_are_stable_between_calls() {
        assert_eq!(demo_sports(), demo_sports());
        let ids: Vec<_> = demo_sessions().iter().map(Session::id).collect();
        let again: Vec<_> = demo_sessions().iter().map(Session::id).collect();
        assert_eq!(ids, again);
    }
}
