use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::models::PriceRecord;
use crate::utils::error::AppError;

/// JSON snapshot of the last observed prices.
#[derive(Debug, Clone)]
pub struct PriceStore {
    path: PathBuf,
}

impl PriceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty record; anything that
    /// is not a flat object of integer prices is an error.
    pub async fn load(&self) -> Result<PriceRecord, AppError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No price snapshot at {}, starting fresh", self.path.display());
                return Ok(PriceRecord::new());
            }
            Err(e) => return Err(e.into()),
        };

        let record: PriceRecord = serde_json::from_str(&contents).map_err(|e| AppError::StoreCorrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!("Loaded {} prices from {}", record.len(), self.path.display());
        Ok(record)
    }

    /// Replaces the snapshot with `record`.
    ///
    /// The new contents go to a sibling temp file first and are renamed over
    /// the old one, so readers never see a partial write.
    pub async fn save(&self, record: &PriceRecord) -> Result<(), AppError> {
        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!("Saved {} prices to {}", record.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
