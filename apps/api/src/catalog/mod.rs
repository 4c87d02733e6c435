//! Role catalog: loading, lookup, and filtering over the static role list.

pub mod filter;
pub mod loader;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::CatalogError;
use crate::models::role::Role;

/// Handle to the on-disk catalog. Holds only the path; every `load` re-reads
/// the file so external edits show up on the next request.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    path: PathBuf,
}

impl RoleCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RoleCatalog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Role>, CatalogError> {
        let roles = loader::load_roles(&self.path)?;
        debug!("Loaded {} roles from {}", roles.len(), self.path.display());
        Ok(roles)
    }
}
