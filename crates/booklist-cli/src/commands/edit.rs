use booklist_dal::book::{BookDraft, Status, clamp_rating};
use clap::Parser;
use garde::Validate as _;

use crate::{
    commands::{Executor, connect, find_book},
    config::StorageConfig,
    render,
};

/// Changes only the fields given on the command line, everything else
/// (including notes) stays as stored.
#[derive(Parser, Debug)]
pub struct EditCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book to edit")]
    id: i64,
    #[arg(short, long, help = "New title")]
    title: Option<String>,
    #[arg(short, long, help = "New author")]
    author: Option<String>,
    #[arg(long, help = "New cover image URL")]
    cover: Option<String>,
    #[arg(short, long, help = "New reading status: want-to-read, reading or read")]
    status: Option<Status>,
    #[arg(short, long, help = "New rating 0-5, 0 clears the rating")]
    rating: Option<f64>,
}

impl Executor for EditCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;

        let mut draft = BookDraft::from(book);
        if let Some(title) = self.title {
            draft.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            draft.author = author.trim().to_string();
        }
        if let Some(cover) = self.cover {
            draft.cover = cover.trim().to_string();
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(rating) = self.rating {
            draft.rating = clamp_rating(rating);
        }
        draft.validate()?;

        let book = gateway.upsert(draft).await?;
        println!("Saved {}", render::book_line(&book));
        Ok(())
    }
}
