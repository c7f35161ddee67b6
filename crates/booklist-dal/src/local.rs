use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tokio::{fs, io::AsyncWriteExt as _};
use tracing::{debug, error, warn};

use crate::{
    book::{Book, BookDraft, MAX_RATING},
    error::{Error, Result},
    normalize::normalize,
};

pub const STORE_FILE: &str = "books.json";

/// File backed store: one JSON array of book records in the data
/// directory. Writes replace the whole file atomically.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all stored books, newest first. A missing file, malformed
    /// JSON or a non-array document all yield an empty list; records
    /// that do not normalize are dropped.
    pub async fn list(&self) -> Result<Vec<Book>> {
        let raw = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let parsed: serde_json::Value = match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Malformed store file {:?}, treating as empty: {e}", self.path);
                return Ok(Vec::new());
            }
        };
        let Some(items) = parsed.as_array() else {
            warn!("Store file {:?} is not a list, treating as empty", self.path);
            return Ok(Vec::new());
        };
        let books = items
            .iter()
            .filter_map(|item| {
                let book = normalize(item);
                if book.is_none() {
                    debug!("Dropping malformed record: {item}");
                }
                book
            })
            .collect();
        Ok(books)
    }

    /// Creates a new book (no id in the draft) or replaces the stored
    /// fields of an existing one. New books get `max(ids) + 1` and go to
    /// the front of the list; updates keep their position and insert time.
    pub async fn upsert(&self, draft: BookDraft) -> Result<Book> {
        let mut books = self.list().await?;
        let book = match draft.id {
            Some(id) => {
                let slot = books
                    .iter_mut()
                    .find(|b| b.id == id)
                    .ok_or_else(|| Error::RecordNotFound(format!("book {id}")))?;
                slot.title = draft.title;
                slot.author = draft.author;
                slot.cover = draft.cover;
                slot.status = draft.status;
                slot.rating = draft.rating.min(MAX_RATING);
                slot.notes = draft.notes;
                slot.clone()
            }
            None => {
                let id = books.iter().map(|b| b.id).fold(0, i64::max) + 1;
                let book = Book {
                    id,
                    title: draft.title,
                    author: draft.author,
                    cover: draft.cover,
                    status: draft.status,
                    rating: draft.rating.min(MAX_RATING),
                    notes: draft.notes,
                    added_date: Some(OffsetDateTime::now_utc()),
                };
                books.insert(0, book.clone());
                book
            }
        };
        self.save(&books).await?;
        Ok(book)
    }

    /// Removes the book with the given id. Unknown ids are not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut books = self.list().await?;
        books.retain(|b| b.id != id);
        self.save(&books).await
    }

    pub async fn delete_all(&self) -> Result<()> {
        self.save(&[]).await
    }

    async fn save(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        let data = serde_json::to_vec_pretty(books)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        if let Err(e) = file.write_all(&data).await {
            error!("Failed to write store file {tmp_path:?}: {e}");
            fs::remove_file(&tmp_path).await.ok();
            return Err(e.into());
        }
        file.flush().await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
