use crate::errors::AppError;
use crate::models::GlossaryData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("GLOSSARY_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/terms.json"))
}

pub async fn load_data(path: &Path) -> GlossaryData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse terms file: {err}");
                GlossaryData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => GlossaryData::default(),
        Err(err) => {
            error!("failed to read terms file: {err}");
            GlossaryData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &GlossaryData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
