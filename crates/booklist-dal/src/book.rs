use std::{fmt::Display, str::FromStr};

use garde::Validate;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const MAX_RATING: u8 = 5;
pub const NOTES_SOFT_LIMIT: usize = 5000;
pub const NOTES_WARN_THRESHOLD: usize = 4500;

/// Reading status of a book, cycling in the fixed order
/// want-to-read -> reading -> read -> want-to-read.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    WantToRead,
    Reading,
    Read,
}

impl Status {
    pub fn next(self) -> Status {
        match self {
            Status::WantToRead => Status::Reading,
            Status::Reading => Status::Read,
            Status::Read => Status::WantToRead,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::WantToRead => "want-to-read",
            Status::Reading => "reading",
            Status::Read => "read",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "want-to-read" => Ok(Status::WantToRead),
            "reading" => Ok(Status::Reading),
            "read" => Ok(Status::Read),
            _ => Err(format!(
                "Unknown status '{s}', expected want-to-read, reading or read"
            )),
        }
    }
}

/// One tracked book. Instances come either from the normalizer or from
/// a store operation, so the invariants (valid status, rating 0-5) hold.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub status: Status,
    pub rating: u8,
    pub notes: String,
    #[serde(
        rename = "addedDate",
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub added_date: Option<OffsetDateTime>,
}

/// Upsert payload. Without an id it creates a new book, with an id it
/// replaces the stored fields of that book. Callers validate it before
/// handing it to a store.
#[derive(Debug, Serialize, Clone, Validate)]
pub struct BookDraft {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(length(min = 1, max = 511))]
    pub title: String,
    #[garde(length(min = 1, max = 255))]
    pub author: String,
    #[garde(length(max = 1023))]
    pub cover: String,
    #[garde(skip)]
    pub status: Status,
    #[garde(skip)]
    pub rating: u8,
    #[garde(skip)]
    pub notes: String,
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        BookDraft {
            id: Some(book.id),
            title: book.title,
            author: book.author,
            cover: book.cover,
            status: book.status,
            rating: book.rating,
            notes: book.notes,
        }
    }
}

/// Maps an arbitrary rating value to the stored 0-5 scale. Non-finite
/// values mean "not rated".
pub fn clamp_rating(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, MAX_RATING as f64) as u8
}
