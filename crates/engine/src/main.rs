//! Sportsched Engine - headless runner.
//!
//! Boots the app from the environment, restores the signed-in user and logs
//! a dashboard summary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sportsched_domain::Section;
use sportsched_engine::infrastructure::config::AppConfig;
use sportsched_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sportsched_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sportsched Engine");

    let config = AppConfig::from_env()?;
    tracing::info!(
        auth_latency_ms = config.auth_latency.as_millis() as u64,
        directory = ?config.directory_path,
        storage = ?config.storage_path,
        demo_data = config.demo_data,
        "Configuration loaded"
    );

    let app = App::from_config(config)?;

    match app.restore_session().await {
        Some(user) => {
            let sections = Section::visible_to(user.role());
            tracing::info!(
                user_id = %user.id(),
                email = %user.email(),
                role = %user.role(),
                sections = ?sections,
                "Signed in from previous run"
            );
            let mine = app.my_sessions().await?;
            tracing::info!(
                created = mine.created.len(),
                joined = mine.joined.len(),
                "My sessions"
            );
        }
        None => tracing::info!("No signed-in user"),
    }

    let stats = app.use_cases.reports.dashboard().await?;
    tracing::info!(
        total_sports = stats.total_sports,
        total_sessions = stats.total_sessions,
        total_players = stats.total_players,
        upcoming_sessions = stats.upcoming_sessions,
        "Dashboard"
    );

    let partition = app.use_cases.sessions.classify().await?;
    for details in app.use_cases.sessions.list_details().await? {
        let session = &details.session;
        let bucket = if partition.upcoming.iter().any(|s| s.id() == session.id()) {
            "upcoming"
        } else if partition.past.iter().any(|s| s.id() == session.id()) {
            "past"
        } else {
            "other"
        };
        tracing::info!(
            session_id = %session.id(),
            sport = %details.sport_name,
            title = %session.title(),
            starts_at = %session.starts_at(),
            players = session.joined_count(),
            max_players = session.max_players().get(),
            bucket,
            "Session"
        );
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
