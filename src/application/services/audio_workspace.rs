use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::UploadId;

/// Per-request scratch directory. Everything inside is removed when the
/// workspace is dropped, whichever way the request ends.
pub struct AudioWorkspace {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl AudioWorkspace {
    pub fn create(root: &Path, upload_id: UploadId) -> io::Result<Self> {
        std::fs::create_dir_all(root)?;
        let prefix = format!("vocal-{}-", upload_id.as_uuid().simple());
        let dir = tempfile::Builder::new().prefix(&prefix).tempdir_in(root)?;
        let path = dir.path().to_path_buf();

        tracing::debug!(path = %path.display(), "Audio workspace created");

        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for AudioWorkspace {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            match dir.close() {
                Ok(()) => tracing::debug!(path = %self.path.display(), "Audio workspace removed"),
                Err(e) => tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove audio workspace"
                ),
            }
        }
    }
}
