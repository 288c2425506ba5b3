use anyhow::Context;
use persist_config::PersistConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PersistConfig> {
    let mut config = PersistConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(path) = &flags.database {
        // An explicit file always means a local database.
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }

    config
        .database
        .validate()
        .context("invalid database configuration")?;
    Ok(config)
}
