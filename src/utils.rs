use crate::acquisition::error::AcquisitionError;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "load_weather_cache";

pub fn get_cache_dir() -> Result<PathBuf, AcquisitionError> {
    dirs::cache_dir()
        .ok_or(AcquisitionError::CacheDirResolution)
        .map(|p| p.join(CACHE_DIR_NAME))
}

pub async fn ensure_cache_dir_exists(path: &Path) -> Result<(), AcquisitionError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(AcquisitionError::CacheDirCreation(
            path.to_path_buf(),
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating cache directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| AcquisitionError::CacheDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(AcquisitionError::CacheDirCreation(path.to_path_buf(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_cache_dir() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a").join("b");
        ensure_cache_dir_exists(&nested).await?;
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_cache_dir_exists(&nested).await?;
        Ok(())
    }

    #[tokio::test]
    async fn file_in_the_way_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("cache");
        std::fs::write(&file, b"x")?;
        let result = ensure_cache_dir_exists(&file).await;
        assert!(matches!(result, Err(AcquisitionError::CacheDirCreation(..))));
        Ok(())
    }
}
