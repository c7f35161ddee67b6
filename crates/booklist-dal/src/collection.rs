use crate::book::{Book, Status};

pub const HIGH_RATING_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Status(Status),
    HighRated,
}

impl Filter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Filter::All => true,
            Filter::Status(status) => book.status == *status,
            Filter::HighRated => book.rating >= HIGH_RATING_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
    pub reading: usize,
}

/// In-memory snapshot of the list plus the active filter and search
/// query. Owns nothing durable, the gateway does.
#[derive(Debug, Default)]
pub struct Collection {
    books: Vec<Book>,
    filter: Filter,
    query: String,
}

impl Collection {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            filter: Filter::All,
            query: String::new(),
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().trim().to_string();
        self
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Books passing both the filter and the search query, in stored order.
    pub fn visible(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| self.filter.matches(b) && matches_query(b, &self.query))
            .collect()
    }

    /// Counters over the whole list, ignoring filter and query.
    pub fn stats(&self) -> Stats {
        Stats {
            total: self.books.len(),
            read: self
                .books
                .iter()
                .filter(|b| b.status == Status::Read)
                .count(),
            reading: self
                .books
                .iter()
                .filter(|b| b.status == Status::Reading)
                .count(),
        }
    }
}

// Case-insensitive substring match on title or author. A blank query
// matches everything.
fn matches_query(book: &Book, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    book.title.to_lowercase().contains(&q) || book.author.to_lowercase().contains(&q)
}
