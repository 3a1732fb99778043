//! Local Maven repository (`~/.m2/repository`) installation.

use std::path::{Path, PathBuf};

use quay_util::errors::QuayError;

use crate::layout::UploadFile;

/// A local repository directory laid out like a remote Maven repository.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this repository.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a repository-relative file inside this repository.
    pub fn file_path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Write every file into the repository, replacing existing copies.
    pub fn install(&self, files: &[UploadFile]) -> Result<(), QuayError> {
        for file in files {
            let path = self.file_path(&file.path);
            tracing::debug!("Installing {}", path.display());
            quay_util::fs::write_atomic(&path, &file.content)?;
        }
        Ok(())
    }
}
