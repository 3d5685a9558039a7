use crate::errors::{AppError, LoadError};
use crate::models::MoodLog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::warn;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/moods.json"))
}

/// Reads the storage slot. A missing file means no history yet and yields an
/// empty log; an unreadable or unparseable file is reported to the caller.
pub async fn load_data(path: &Path) -> Result<MoodLog, LoadError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(MoodLog::default());
        }
        Err(err) => return Err(LoadError::Io(err)),
    };

    serde_json::from_slice(&bytes).map_err(LoadError::Corrupt)
}

/// Startup policy for a bad slot: keep the broken file untouched until the
/// next write, warn, and begin with an empty log.
pub async fn load_or_default(path: &Path) -> MoodLog {
    match load_data(path).await {
        Ok(log) => log,
        Err(err) => {
            warn!("{err}; starting with an empty mood log");
            MoodLog::default()
        }
    }
}

pub async fn persist_data(path: &Path, log: &MoodLog) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(log).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
