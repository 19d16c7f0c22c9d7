//! Application state and composition.

use std::sync::Arc;

use sportsched_domain::{Role, Section, Session, SessionId, Sport, SportId, User};

use crate::infrastructure::{
    clock::{SystemClock, TokioSleeper},
    config::{AppConfig, ConfigError},
    memory::{InMemorySessionRepo, InMemorySportRepo},
    ports::{ClockPort, SessionRepo, SleepPort, SportRepo, StoragePort},
    storage::FileStorage,
};
use crate::seed;
use crate::stores::CurrentUserStore;
use crate::use_cases::{
    auth::{AuthError, IdentityDirectory, IdentityService},
    reports::{MySessions, Reports},
    roster::{
        CreateSessionRequest, CreateSportRequest, RosterError, SessionRoster, SportCrud,
        UpdateSportRequest,
    },
};

/// Errors from the current-user facade on [`App`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not signed in")]
    NotSignedIn,
    #[error("{role} may not {action}")]
    Forbidden { role: Role, action: &'static str },
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Adapters the app is wired with.
pub struct AppPorts {
    pub storage: Arc<dyn StoragePort>,
    pub sleeper: Arc<dyn SleepPort>,
    pub clock: Arc<dyn ClockPort>,
    pub sports: Arc<dyn SportRepo>,
    pub sessions: Arc<dyn SessionRepo>,
}

/// Container for all repository ports.
pub struct Repositories {
    pub sports: Arc<dyn SportRepo>,
    pub sessions: Arc<dyn SessionRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub auth: IdentityService,
    pub sports: SportCrud,
    pub sessions: SessionRoster,
    pub reports: Reports,
}

/// Main application state.
///
/// Owns the signed-in user; the facade methods below act on their behalf.
pub struct App {
    pub config: AppConfig,
    pub repositories: Repositories,
    pub use_cases: UseCases,
    current_user: Arc<CurrentUserStore>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(config: AppConfig, directory: IdentityDirectory, ports: AppPorts) -> Self {
        let current_user = Arc::new(CurrentUserStore::new());

        let auth = IdentityService::new(
            Arc::new(directory),
            ports.storage,
            ports.sleeper,
            ports.clock.clone(),
            current_user.clone(),
            config.auth_latency,
        );
        let sports = SportCrud::new(ports.sports.clone(), ports.clock.clone());
        let sessions = SessionRoster::new(
            ports.sessions.clone(),
            ports.sports.clone(),
            ports.clock.clone(),
        );
        let reports = Reports::new(ports.sports.clone(), ports.sessions.clone(), ports.clock);

        Self {
            config,
            repositories: Repositories {
                sports: ports.sports,
                sessions: ports.sessions,
            },
            use_cases: UseCases {
                auth,
                sports,
                sessions,
                reports,
            },
            current_user,
        }
    }

    /// Wire the app with in-memory repositories (seeded when
    /// `config.demo_data` is set), the system clock and the tokio timer.
    pub fn in_memory(
        config: AppConfig,
        directory: IdentityDirectory,
        storage: Arc<dyn StoragePort>,
    ) -> Self {
        let (sports, sessions) = if config.demo_data {
            (seed::demo_sports(), seed::demo_sessions())
        } else {
            (Vec::new(), Vec::new())
        };

        let ports = AppPorts {
            storage,
            sleeper: Arc::new(TokioSleeper),
            clock: Arc::new(SystemClock::new()),
            sports: Arc::new(InMemorySportRepo::with_sports(sports)),
            sessions: Arc::new(InMemorySessionRepo::with_sessions(sessions)),
        };
        Self::new(config, directory, ports)
    }

    /// Build the app the runner uses: directory from the configured file or
    /// the demo table, file-backed storage for the signed-in user.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let now = SystemClock::new().now();
        let directory = match &config.directory_path {
            Some(path) => IdentityDirectory::load_json(path, now)?,
            None => IdentityDirectory::demo(now),
        };
        tracing::info!(accounts = directory.len(), "Identity directory loaded");

        let storage_path = config
            .storage_path
            .clone()
            .unwrap_or_else(FileStorage::default_path);
        let storage = Arc::new(FileStorage::open(storage_path));

        Ok(Self::in_memory(config, directory, storage))
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub async fn current_user(&self) -> Option<User> {
        self.current_user.get().await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        Ok(self.use_cases.auth.login(email, password).await?)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AppError> {
        Ok(self
            .use_cases
            .auth
            .register(email, password, name, role)
            .await?)
    }

    pub async fn logout(&self) {
        self.use_cases.auth.logout().await;
    }

    pub async fn restore_session(&self) -> Option<User> {
        self.use_cases.auth.restore_session().await
    }

    /// Where a request for `section` lands for the signed-in user.
    pub async fn navigate(&self, section: Section) -> Section {
        let role = self.current_user().await.map(|u| u.role()).unwrap_or_default();
        section.resolve_for(role)
    }

    // =========================================================================
    // Acting as the signed-in user
    // =========================================================================

    pub async fn create_sport(&self, request: CreateSportRequest) -> Result<Sport, AppError> {
        let user = self.require_sport_manager("create sports").await?;
        Ok(self.use_cases.sports.create(request, user.id()).await?)
    }

    pub async fn update_sport(
        &self,
        sport_id: SportId,
        request: UpdateSportRequest,
    ) -> Result<Sport, AppError> {
        self.require_sport_manager("edit sports").await?;
        Ok(self.use_cases.sports.update(sport_id, request).await?)
    }

    pub async fn delete_sport(&self, sport_id: SportId) -> Result<(), AppError> {
        self.require_sport_manager("delete sports").await?;
        Ok(self.use_cases.sports.delete(sport_id).await?)
    }

    pub async fn create_session(&self, request: CreateSessionRequest) -> Result<Session, AppError> {
        let user = self.require_user().await?;
        Ok(self
            .use_cases
            .sessions
            .create_session(request, user.id())
            .await?)
    }

    pub async fn join_session(&self, session_id: SessionId) -> Result<Session, AppError> {
        let user = self.require_user().await?;
        Ok(self.use_cases.sessions.join(session_id, user.id()).await?)
    }

    pub async fn leave_session(&self, session_id: SessionId) -> Result<Session, AppError> {
        let user = self.require_user().await?;
        Ok(self.use_cases.sessions.leave(session_id, user.id()).await?)
    }

    pub async fn cancel_participation(
        &self,
        session_id: SessionId,
        reason: Option<String>,
    ) -> Result<Session, AppError> {
        let user = self.require_user().await?;
        Ok(self
            .use_cases
            .sessions
            .cancel_participation(session_id, user.id(), reason)
            .await?)
    }

    pub async fn my_sessions(&self) -> Result<MySessions, AppError> {
        let user = self.require_user().await?;
        Ok(self.use_cases.reports.my_sessions(user.id()).await?)
    }

    async fn require_user(&self) -> Result<User, AppError> {
        self.current_user().await.ok_or(AppError::NotSignedIn)
    }

    async fn require_sport_manager(&self, action: &'static str) -> Result<User, AppError> {
        let user = self.require_user().await?;
        if !user.role().can_manage_sports() {
            return Err(AppError::Forbidden {
                role: user.role(),
                action,
            });
        }
        Ok(user)
    }
}
