use booklist_dal::{
    book::{Book, MAX_RATING, NOTES_SOFT_LIMIT, Status},
    gateway::BackendKind,
};

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::WantToRead => "Want to read",
        Status::Reading => "Reading",
        Status::Read => "Read",
    }
}

pub fn storage_label(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::Remote => "☁️ hosted table",
        BackendKind::Local => "📦 local file",
    }
}

pub fn stars(rating: u8) -> String {
    let mut out = String::new();
    for i in 1..=MAX_RATING {
        out.push(if i <= rating { '★' } else { '☆' });
    }
    out
}

pub fn notes_counter(notes: &str) -> String {
    format!("{} / {}", notes.chars().count(), NOTES_SOFT_LIMIT)
}

/// Empty-result line. A search miss echoes the query, a filter miss
/// does not.
pub fn no_results(query: &str) -> String {
    if query.is_empty() {
        "No books match the current filter.".to_string()
    } else {
        format!("No books match \"{query}\". Try another search.")
    }
}

/// One-line listing entry: id, title, author, status, then stars, note
/// marker and insert date when present.
pub fn book_line(book: &Book) -> String {
    let mut line = format!(
        "{:>4}  {} by {}  [{}]",
        book.id,
        book.title,
        book.author,
        status_label(book.status)
    );
    if book.rating > 0 {
        line.push_str(&format!("  {}", stars(book.rating)));
    }
    if !book.notes.is_empty() {
        line.push_str("  📝");
    }
    if let Some(added) = book.added_date {
        line.push_str(&format!("  added {}", added.date()));
    }
    line
}

/// Text card for sharing, the same shape the list renders in a share
/// dialog: title, author, status, then rating and notes when present.
pub fn share_text(book: &Book) -> String {
    let mut text = format!(
        "📚 {}\n👤 {}\n📖 {}",
        book.title,
        book.author,
        status_label(book.status)
    );
    if book.rating > 0 {
        text.push_str(&format!("\n⭐ {}/{}", book.rating, MAX_RATING));
    }
    if !book.notes.is_empty() {
        text.push_str(&format!("\n📝 {}", book.notes));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            cover: String::new(),
            status: Status::Reading,
            rating: 4,
            notes: "slow start".to_string(),
            added_date: None,
        }
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text(&book()),
            "📚 Dune\n👤 Frank Herbert\n📖 Reading\n⭐ 4/5\n📝 slow start"
        );
    }

    #[test]
    fn test_share_text_skips_absent_parts() {
        let mut plain = book();
        plain.rating = 0;
        plain.notes = String::new();
        assert_eq!(share_text(&plain), "📚 Dune\n👤 Frank Herbert\n📖 Reading");
    }

    #[test]
    fn test_notes_counter() {
        assert_eq!(notes_counter("abc"), "3 / 5000");
    }

    #[test]
    fn test_no_results_echoes_query() {
        assert_eq!(no_results(""), "No books match the current filter.");
        assert_eq!(
            no_results("lem"),
            "No books match \"lem\". Try another search."
        );
    }
}
