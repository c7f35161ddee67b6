use booklist_dal::book::{BookDraft, NOTES_WARN_THRESHOLD, Status, clamp_rating};
use clap::Parser;
use garde::Validate as _;

use crate::{
    commands::{Executor, connect},
    config::StorageConfig,
    render,
};

#[derive(Parser, Debug)]
pub struct AddCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(short, long, help = "Title of the book")]
    title: String,
    #[arg(short, long, help = "Author of the book")]
    author: String,
    #[arg(long, help = "Cover image URL")]
    cover: Option<String>,
    #[arg(
        short,
        long,
        default_value_t = Status::WantToRead,
        help = "Reading status: want-to-read, reading or read"
    )]
    status: Status,
    #[arg(
        short,
        long,
        default_value_t = 0.0,
        help = "Rating 0-5, 0 means not rated"
    )]
    rating: f64,
    #[arg(short, long, help = "Notes")]
    notes: Option<String>,
}

impl Executor for AddCmd {
    async fn run(self) -> anyhow::Result<()> {
        let draft = BookDraft {
            id: None,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            cover: self.cover.unwrap_or_default().trim().to_string(),
            status: self.status,
            rating: clamp_rating(self.rating),
            notes: self.notes.unwrap_or_default(),
        };
        draft.validate()?;

        let gateway = connect(&self.storage).await;
        let book = gateway.upsert(draft).await?;
        println!("Added {}", render::book_line(&book));
        if book.notes.chars().count() > NOTES_WARN_THRESHOLD {
            println!("Note is getting long: {}", render::notes_counter(&book.notes));
        }
        Ok(())
    }
}
