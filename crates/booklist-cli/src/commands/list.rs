use booklist_dal::{
    book::Status,
    collection::{Collection, Filter},
};
use clap::Parser;

use crate::{
    commands::{Executor, connect},
    config::StorageConfig,
    render,
};

#[derive(Parser, Debug)]
pub struct ListCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(
        short,
        long,
        conflicts_with = "high",
        help = "Show only books with this status"
    )]
    status: Option<Status>,
    #[arg(long, help = "Show only books rated 4 stars or better")]
    high: bool,
    #[arg(short = 'q', long, help = "Search in title and author")]
    search: Option<String>,
}

impl Executor for ListCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let books = gateway.list().await?;

        let filter = if self.high {
            Filter::HighRated
        } else if let Some(status) = self.status {
            Filter::Status(status)
        } else {
            Filter::All
        };
        let query = self.search.unwrap_or_default().trim().to_string();
        let collection = Collection::new(books)
            .with_filter(filter)
            .with_query(query.as_str());

        if collection.is_empty() {
            println!("No books yet. Add your first one with `booklist add`.");
            return Ok(());
        }

        let visible = collection.visible();
        if visible.is_empty() {
            println!("{}", render::no_results(&query));
            return Ok(());
        }

        for book in &visible {
            println!("{}", render::book_line(book));
        }
        let stats = collection.stats();
        println!();
        println!(
            "{} books, {} read, {} reading ({})",
            stats.total,
            stats.read,
            stats.reading,
            render::storage_label(gateway.kind())
        );
        Ok(())
    }
}
