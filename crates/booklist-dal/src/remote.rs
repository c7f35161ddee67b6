use reqwest::{Client, Method, Response, Url};
use serde_json::Value;
use tracing::debug;

use crate::{
    book::{Book, BookDraft, MAX_RATING},
    error::{Error, Result},
    normalize::normalize,
};

/// Client for one hosted table speaking the PostgREST row protocol
/// (as exposed by Supabase under /rest/v1). Rows coming back are
/// untrusted and go through the normalizer.
pub struct RemoteTable {
    client: Client,
    base: Url,
    key: String,
}

impl RemoteTable {
    pub fn new(remote_url: &Url, key: &str, table: &str) -> Result<Self> {
        let base = remote_url.join(&format!("rest/v1/{table}"))?;
        Ok(Self {
            client: Client::new(),
            base,
            key: key.to_string(),
        })
    }

    /// All rows, newest first. Rows that do not normalize are dropped.
    pub async fn list(&self) -> Result<Vec<Book>> {
        let response = check(self.request(Method::GET, self.list_url()).send().await?).await?;
        let rows: Vec<Value> = response.json().await?;
        let books = rows
            .iter()
            .filter_map(|row| {
                let book = normalize(row);
                if book.is_none() {
                    debug!("Dropping malformed row: {row}");
                }
                book
            })
            .collect();
        Ok(books)
    }

    /// Cheap connectivity check: select a single id.
    pub async fn probe(&self) -> Result<()> {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("select", "id")
            .append_pair("limit", "1");
        check(self.request(Method::GET, url).send().await?).await?;
        Ok(())
    }

    pub async fn insert(&self, draft: &BookDraft) -> Result<Book> {
        let response = check(
            self.request(Method::POST, self.base.clone())
                .header("Prefer", "return=representation")
                .json(&row_payload(draft))
                .send()
                .await?,
        )
        .await?;
        let rows: Vec<Value> = response.json().await?;
        let row = rows
            .first()
            .ok_or_else(|| Error::InvalidRecord("empty insert response".to_string()))?;
        normalize(row).ok_or_else(|| Error::InvalidRecord(format!("unusable row: {row}")))
    }

    /// Updates the row with the given id. No matching row is an error.
    pub async fn update(&self, id: i64, draft: &BookDraft) -> Result<Book> {
        let response = check(
            self.request(Method::PATCH, self.id_filter_url(id))
                .header("Prefer", "return=representation")
                .json(&row_payload(draft))
                .send()
                .await?,
        )
        .await?;
        let rows: Vec<Value> = response.json().await?;
        match rows.first() {
            Some(row) => {
                normalize(row).ok_or_else(|| Error::InvalidRecord(format!("unusable row: {row}")))
            }
            None => Err(Error::RecordNotFound(format!("book {id}"))),
        }
    }

    /// Deletes the row with the given id. Unknown ids are not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        check(
            self.request(Method::DELETE, self.id_filter_url(id))
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    /// Deletes every row. The table API has no unconditional delete, so
    /// this matches all rows with an impossible id filter.
    pub async fn delete_all(&self) -> Result<()> {
        check(
            self.request(Method::DELETE, self.delete_all_url())
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }

    fn list_url(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");
        url
    }

    fn id_filter_url(&self, id: i64) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"));
        url
    }

    fn delete_all_url(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("id", "neq.0");
        url
    }
}

// The update/insert payload carries only the writable columns, never
// the id or the insert time.
fn row_payload(draft: &BookDraft) -> Value {
    serde_json::json!({
        "title": draft.title,
        "author": draft.author,
        "cover": draft.cover,
        "status": draft.status,
        "rating": draft.rating.min(MAX_RATING),
        "notes": draft.notes,
    })
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_message(&body))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    Err(Error::RemoteError {
        status: status.as_u16(),
        message,
    })
}

// PostgREST error bodies look like {"code": ..., "message": ..., "details": ...}
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
