use super::codec::{self, LoadReport};
use super::DataStore;
use crate::error::{MarinaError, Result};
use crate::inventory::BoatStore;
use std::fs;
use std::path::{Path, PathBuf};

/// The boat data file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "boats".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    fn unwritable(&self, source: std::io::Error) -> MarinaError {
        MarinaError::UnwritableFile {
            path: self.path.clone(),
            source,
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<(BoatStore, LoadReport)> {
        let contents =
            fs::read_to_string(&self.path).map_err(|source| MarinaError::UnreadableFile {
                path: self.path.clone(),
                source,
            })?;
        let (boats, report) = codec::decode(&contents);
        tracing::info!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "boat data loaded"
        );
        Ok((boats, report))
    }

    fn save(&mut self, boats: &BoatStore) -> Result<()> {
        let contents = codec::encode(boats);

        // Write beside the target, then swap it in.
        let tmp = self.tmp_path();
        fs::write(&tmp, contents).map_err(|e| self.unwritable(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.unwritable(e));
        }

        tracing::info!(path = %self.path.display(), boats = boats.len(), "boat data saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
