use booklist_dal::book::BookDraft;
use clap::Parser;

use crate::{
    commands::{Executor, connect, find_book},
    config::StorageConfig,
    render,
};

/// Advances the reading status one step:
/// want-to-read -> reading -> read -> want-to-read.
#[derive(Parser, Debug)]
pub struct CycleCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book")]
    id: i64,
}

impl Executor for CycleCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;

        let previous = book.status;
        let mut draft = BookDraft::from(book);
        draft.status = previous.next();

        let book = gateway.upsert(draft).await?;
        println!(
            "{}: {} -> {}",
            book.title,
            render::status_label(previous),
            render::status_label(book.status)
        );
        Ok(())
    }
}
