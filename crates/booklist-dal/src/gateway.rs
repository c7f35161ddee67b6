use std::{fmt::Display, path::PathBuf};

use tracing::{debug, error, warn};
use url::Url;

use crate::{
    book::{Book, BookDraft},
    error::Result,
    local::LocalStore,
    remote::RemoteTable,
};

/// Everything needed to pick and open a backend.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub remote_url: Option<Url>,
    pub remote_key: Option<String>,
    pub table: String,
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Remote => write!(f, "remote"),
            BackendKind::Local => write!(f, "local"),
        }
    }
}

enum Backend {
    Remote(RemoteTable),
    Local(LocalStore),
}

/// Uniform persistence interface over the selected backend.
///
/// The backend is chosen once, when the gateway is built: the remote
/// table when both its URL and key are configured, the local file
/// otherwise. Callers never re-check capability per operation.
pub struct Gateway {
    backend: Backend,
}

impl Gateway {
    pub async fn connect(settings: GatewaySettings) -> Gateway {
        let backend = match (&settings.remote_url, &settings.remote_key) {
            (Some(url), Some(key)) if !key.is_empty() => {
                match RemoteTable::new(url, key, &settings.table) {
                    Ok(table) => {
                        if let Err(e) = table.probe().await {
                            warn!("Remote table connection check failed: {e}");
                        } else {
                            debug!("Remote table {} reachable", settings.table);
                        }
                        Backend::Remote(table)
                    }
                    Err(e) => {
                        warn!("Unusable remote configuration ({e}), falling back to local store");
                        Backend::Local(LocalStore::new(&settings.data_dir))
                    }
                }
            }
            _ => {
                debug!("Remote table not configured, using local store");
                Backend::Local(LocalStore::new(&settings.data_dir))
            }
        };
        Gateway { backend }
    }

    pub fn kind(&self) -> BackendKind {
        match &self.backend {
            Backend::Remote(_) => BackendKind::Remote,
            Backend::Local(_) => BackendKind::Local,
        }
    }

    /// All books, newest first.
    pub async fn list(&self) -> Result<Vec<Book>> {
        let result = match &self.backend {
            Backend::Remote(table) => table.list().await,
            Backend::Local(store) => store.list().await,
        };
        result.inspect_err(|e| error!("Failed to list books: {e}"))
    }

    /// Creates the book when the draft has no id, updates it otherwise.
    pub async fn upsert(&self, draft: BookDraft) -> Result<Book> {
        let result = match &self.backend {
            Backend::Remote(table) => match draft.id {
                Some(id) => table.update(id, &draft).await,
                None => table.insert(&draft).await,
            },
            Backend::Local(store) => store.upsert(draft).await,
        };
        result.inspect_err(|e| error!("Failed to save book: {e}"))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = match &self.backend {
            Backend::Remote(table) => table.delete(id).await,
            Backend::Local(store) => store.delete(id).await,
        };
        result.inspect_err(|e| error!("Failed to delete book {id}: {e}"))
    }

    pub async fn delete_all(&self) -> Result<()> {
        let result = match &self.backend {
            Backend::Remote(table) => table.delete_all().await,
            Backend::Local(store) => store.delete_all().await,
        };
        result.inspect_err(|e| error!("Failed to clear books: {e}"))
    }
}
