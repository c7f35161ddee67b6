use serde_json::{Map, Value};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::book::{Book, Status, clamp_rating};

/// Turns one untrusted record into a valid [`Book`], or rejects it.
///
/// This is the only way records from a store enter the domain: anything
/// that is not an object, or has no id readable as a finite number
/// (JSON number or numeric string), is rejected. Every other field is
/// coerced to a usable value, so a surviving book always satisfies the
/// entity invariants.
pub fn normalize(raw: &Value) -> Option<Book> {
    let record = raw.as_object()?;
    let id = read_id(record.get("id")?)?;

    Some(Book {
        id,
        title: string_field(record, "title"),
        author: string_field(record, "author"),
        cover: string_field(record, "cover"),
        status: read_status(record.get("status")),
        rating: read_rating(record.get("rating")),
        notes: string_field(record, "notes"),
        added_date: read_added_date(record),
    })
}

fn read_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    id.is_finite().then_some(id as i64)
}

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn read_status(value: Option<&Value>) -> Status {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn read_rating(value: Option<&Value>) -> u8 {
    let rating = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    };
    clamp_rating(rating)
}

// Remote rows carry the insert time in created_at, local records in
// addedDate. Unparseable values count as absent.
fn read_added_date(record: &Map<String, Value>) -> Option<OffsetDateTime> {
    let raw = record
        .get("created_at")
        .and_then(Value::as_str)
        .or_else(|| record.get("addedDate").and_then(Value::as_str))?;
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_rejects_non_objects() {
        for value in [json!(null), json!(42), json!("book"), json!([1, 2])] {
            assert!(normalize(&value).is_none(), "accepted {value}");
        }
    }

    #[test]
    fn test_rejects_unusable_ids() {
        assert!(normalize(&json!({"title": "Dune"})).is_none());
        assert!(normalize(&json!({"id": null, "title": "Dune"})).is_none());
        assert!(normalize(&json!({"id": true, "title": "Dune"})).is_none());
        assert!(normalize(&json!({"id": "abc", "title": "Dune"})).is_none());
        assert!(normalize(&json!({"id": {}, "title": "Dune"})).is_none());
    }

    #[test]
    fn test_accepts_numeric_ids() {
        assert_eq!(normalize(&json!({"id": 7})).unwrap().id, 7);
        assert_eq!(normalize(&json!({"id": "12"})).unwrap().id, 12);
        assert_eq!(normalize(&json!({"id": 12.9})).unwrap().id, 12);
    }

    #[test]
    fn test_coerces_fields() {
        let book = normalize(&json!({
            "id": 1,
            "title": 42,
            "author": "Frank Herbert",
            "status": "finished",
            "rating": 7,
            "notes": null,
        }))
        .unwrap();

        assert_eq!(book.title, "");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.status, Status::WantToRead);
        assert_eq!(book.rating, 5);
        assert_eq!(book.notes, "");
        assert_eq!(book.cover, "");
        assert!(book.added_date.is_none());
    }

    #[test]
    fn test_string_rating() {
        assert_eq!(normalize(&json!({"id": 1, "rating": "3"})).unwrap().rating, 3);
        assert_eq!(normalize(&json!({"id": 1, "rating": "x"})).unwrap().rating, 0);
    }

    #[test]
    fn test_added_date_prefers_created_at() {
        let book = normalize(&json!({
            "id": 1,
            "created_at": "2024-01-15T10:30:00Z",
            "addedDate": "2023-01-01T00:00:00Z",
        }))
        .unwrap();
        let added = book.added_date.unwrap();
        assert_eq!(added.year(), 2024);

        let book = normalize(&json!({
            "id": 1,
            "addedDate": "2023-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(book.added_date.unwrap().year(), 2023);
    }

    #[test]
    fn test_unparseable_date_dropped() {
        let book = normalize(&json!({"id": 1, "addedDate": "yesterday"})).unwrap();
        assert!(book.added_date.is_none());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let book = normalize(&json!({
            "id": 3,
            "title": "Dune",
            "author": "Frank Herbert",
            "status": "reading",
            "rating": 4,
            "notes": "slow start",
            "addedDate": "2024-01-15T10:30:00Z",
        }))
        .unwrap();

        let serialized = serde_json::to_value(&book).unwrap();
        let again = normalize(&serialized).unwrap();
        assert_eq!(again, book);
    }
}
