//! Transfer Scheduler server
//!
//! ```text
//! transfer_scheduler [--env dev|prod] [--port 8080]
//! ```
//!
//! Reads `config/<env>.yaml`. With `postgres_url` set, schedules are stored
//! in PostgreSQL; otherwise they live in memory for the process lifetime.

use std::sync::Arc;

use anyhow::Context;
use transfer_scheduler::clock::SystemClock;
use transfer_scheduler::config::AppConfig;
use transfer_scheduler::db::Database;
use transfer_scheduler::gateway;
use transfer_scheduler::logging::init_logging;
use transfer_scheduler::scheduling::{
    InMemoryScheduleRepository, PgScheduleRepository, ScheduleRepository, SchedulingService,
};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ScheduleRepository>> {
    match config.postgres_url.as_deref() {
        Some(url) => {
            let db = Database::connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.init_schema()
                .await
                .context("Failed to initialize schema")?;
            let repository = PgScheduleRepository::new(db.pool().clone());
            repository
                .ping()
                .await
                .context("PostgreSQL ping failed")?;
            Ok(Arc::new(repository))
        }
        None => {
            tracing::warn!("No postgres_url configured, schedules are kept in memory");
            Ok(Arc::new(InMemoryScheduleRepository::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = init_logging(&app_config);
    tracing::info!(
        version = gateway::handlers::VERSION,
        "Starting Transfer Scheduler in {} mode",
        env
    );

    let repository = build_repository(&app_config).await?;
    let service = SchedulingService::new(repository, Arc::new(SystemClock));

    gateway::run_server(&app_config.gateway, service)
        .await
        .context("Gateway stopped")?;
    Ok(())
}
