//! Logger setup.  `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::LoggingConfig;
use crate::error::ArcadeError;

/// Route `log` output to the configured file.  Call once, before the
/// terminal switches to the alternate screen.
pub fn init(config: &LoggingConfig) -> Result<(), ArcadeError> {
    let path = config.file();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| ArcadeError::Logger(e.to_string()))?;

    log::info!("logging to {}", path.display());
    Ok(())
}
