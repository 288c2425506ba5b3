use std::path::Path;

use anyhow::Context;
use persist_config::PersistConfig;
use persist_db::service::WorkoutService;
use persist_import::InputGuard;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: WorkoutService,
    pub config: PersistConfig,
}

impl AppContext {
    /// Open the configured database, remote when a URL and token are set.
    pub async fn init(config: PersistConfig) -> anyhow::Result<Self> {
        let service = if config.database.is_remote() {
            tracing::debug!(url = %config.database.url, "opening remote database");
            WorkoutService::new_remote(&config.database.url, &config.database.auth_token)
                .await
                .context("failed to connect to remote database")?
        } else {
            let path = &config.database.path;
            ensure_parent_dir(path)?;
            tracing::debug!(path, "opening local database");
            WorkoutService::new_local(path)
                .await
                .with_context(|| format!("failed to open database at {path}"))?
        };

        Ok(Self { service, config })
    }

    #[must_use]
    pub fn input_guard(&self) -> InputGuard {
        InputGuard::from(&self.config.import)
    }
}

fn ensure_parent_dir(path: &str) -> anyhow::Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
