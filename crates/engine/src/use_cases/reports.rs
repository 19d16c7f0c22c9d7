//! Read-only summaries for the dashboard, "my sessions" and reports views.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use sportsched_domain::{Session, UserId};

use crate::infrastructure::clock::local_wall_clock;
use crate::infrastructure::ports::{ClockPort, SessionRepo, SportRepo};
use crate::use_cases::roster::RosterError;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sports: usize,
    pub total_sessions: usize,
    /// Distinct users holding a joined membership somewhere.
    pub total_players: usize,
    pub upcoming_sessions: usize,
}

/// Sessions a user organises and sessions they play in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MySessions {
    pub created: Vec<Session>,
    pub joined: Vec<Session>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_sessions: usize,
    /// Distinct users who created a session or hold a joined membership.
    pub active_users: usize,
    /// Mean of joined/max over all sessions, as a percentage.
    pub average_participation_percent: f64,
}

pub struct Reports {
    sports: Arc<dyn SportRepo>,
    sessions: Arc<dyn SessionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl Reports {
    pub fn new(
        sports: Arc<dyn SportRepo>,
        sessions: Arc<dyn SessionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            sports,
            sessions,
            clock,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, RosterError> {
        self.dashboard_at(local_wall_clock(self.clock.now())).await
    }

    pub async fn dashboard_at(&self, now: NaiveDateTime) -> Result<DashboardStats, RosterError> {
        let sports = self.sports.list().await?;
        let sessions = self.sessions.list().await?;

        let players: HashSet<UserId> = sessions
            .iter()
            .flat_map(|s| s.players().iter().filter(|p| p.is_joined()).map(|p| p.user_id()))
            .collect();

        Ok(DashboardStats {
            total_sports: sports.len(),
            total_sessions: sessions.len(),
            total_players: players.len(),
            upcoming_sessions: sessions.iter().filter(|s| s.is_upcoming(now)).count(),
        })
    }

    /// A session both created and joined by `user_id` shows up in both lists.
    pub async fn my_sessions(&self, user_id: UserId) -> Result<MySessions, RosterError> {
        let sessions = self.sessions.list().await?;
        let mut mine = MySessions::default();
        for session in sessions {
            if session.has_joined(user_id) {
                mine.joined.push(session.clone());
            }
            if session.is_created_by(user_id) {
                mine.created.push(session);
            }
        }
        Ok(mine)
    }

    pub async fn overview(&self) -> Result<ReportSummary, RosterError> {
        let sessions = self.sessions.list().await?;
        if sessions.is_empty() {
            return Ok(ReportSummary::default());
        }

        let mut active: HashSet<UserId> = HashSet::new();
        let mut fill_sum = 0.0;
        for session in &sessions {
            active.insert(session.created_by());
            active.extend(
                session
                    .players()
                    .iter()
                    .filter(|p| p.is_joined())
                    .map(|p| p.user_id()),
            );
            fill_sum +=
                f64::from(session.joined_count()) / f64::from(session.max_players().get());
        }

        Ok(ReportSummary {
            total_sessions: sessions.len(),
            active_users: active.len(),
            average_participation_percent: fill_sum / sessions.len() as f64 * 100.0,
        })
    }
}
