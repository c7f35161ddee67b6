use clap::Parser;

use crate::{
    commands::{Executor, confirm, connect, find_book},
    config::StorageConfig,
};

#[derive(Parser, Debug)]
pub struct DeleteCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book to delete")]
    id: i64,
    #[arg(short, long, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Executor for DeleteCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;

        let prompt = format!("Delete \"{}\" by {}?", book.title, book.author);
        if !self.yes && !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }

        gateway.delete(self.id).await?;
        println!("Deleted \"{}\".", book.title);
        Ok(())
    }
}
