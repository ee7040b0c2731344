use anyhow::Context;
use campus_config::CampusConfig;
use campus_core::Fixtures;

/// Everything a command needs: validated config and the fixture collections.
pub struct AppContext {
    pub config: CampusConfig,
    pub fixtures: Fixtures,
}

impl AppContext {
    /// Load fixtures from `general.fixtures_dir` when set, otherwise the
    /// embedded set.
    pub fn init(config: CampusConfig) -> anyhow::Result<Self> {
        let fixtures = match config.general.fixtures_dir() {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "loading fixtures from directory");
                Fixtures::load_from_dir(&dir)
                    .with_context(|| format!("failed to load fixtures from {}", dir.display()))?
            }
            None => Fixtures::load()?,
        };
        Ok(Self { config, fixtures })
    }
}
