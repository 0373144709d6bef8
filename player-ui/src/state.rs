//! Shared application state for the UI server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast;

use player::io::catalog::{Catalog, builtin_catalog, load_catalog};

/// Events broadcast to SSE clients when data files change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    CatalogChanged,
    SubmissionsChanged,
}

/// Shared state accessible from all request handlers.
///
/// Data files are re-read per request so edits show up without a restart;
/// the watcher only tells clients when a refetch is worthwhile.
#[derive(Clone)]
pub struct AppState {
    /// Catalog JSON file; `None` serves the built-in problem set.
    pub catalog_path: Option<PathBuf>,
    /// Submissions JSON file; `None` serves the built-in mock history.
    pub submissions_path: Option<PathBuf>,
    /// Broadcast sender for data change events.
    pub event_tx: Arc<broadcast::Sender<ChangeEvent>>,
}

impl AppState {
    pub fn new(catalog_path: Option<PathBuf>, submissions_path: Option<PathBuf>) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            catalog_path,
            submissions_path,
            event_tx: Arc::new(event_tx),
        }
    }

    /// Load the catalog this server exposes.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => builtin_catalog(),
        }
    }
}
