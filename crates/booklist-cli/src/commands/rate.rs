use booklist_dal::book::{BookDraft, clamp_rating};
use clap::Parser;

use crate::{
    commands::{Executor, connect, find_book},
    config::StorageConfig,
    render,
};

#[derive(Parser, Debug)]
pub struct RateCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book to rate")]
    id: i64,
    #[arg(help = "Rating 0-5, 0 clears the rating")]
    rating: f64,
}

impl Executor for RateCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;

        let mut draft = BookDraft::from(book);
        draft.rating = clamp_rating(self.rating);

        let book = gateway.upsert(draft).await?;
        println!("{}: {}", book.title, render::stars(book.rating));
        Ok(())
    }
}
