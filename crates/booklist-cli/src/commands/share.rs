use clap::Parser;

use crate::{
    commands::{Executor, connect, find_book},
    config::StorageConfig,
    render,
};

/// Prints the shareable text card of a book.
#[derive(Parser, Debug)]
pub struct ShareCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book to share")]
    id: i64,
}

impl Executor for ShareCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;
        println!("{}", render::share_text(&book));
        Ok(())
    }
}
