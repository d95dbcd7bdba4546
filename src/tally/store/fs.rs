use super::CatalogStore;
use crate::catalog::Catalog;
use crate::error::{Result, TallyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed catalog storage.
///
/// The catalog is stored as a pretty-printed JSON array of products. The
/// file is read or written whole within each call; no handle outlives the
/// operation.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TallyError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Ok(Catalog::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TallyError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(catalog).map_err(TallyError::Serialization)?;
        fs::write(&self.path, content).map_err(TallyError::Io)?;
        Ok(())
    }
}
