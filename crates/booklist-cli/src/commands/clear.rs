use clap::Parser;

use crate::{
    commands::{Executor, confirm, connect},
    config::StorageConfig,
};

#[derive(Parser, Debug)]
pub struct ClearCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(short, long, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Executor for ClearCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let books = gateway.list().await?;

        if books.is_empty() {
            println!("No books to clear.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} books? This cannot be undone.",
            books.len()
        );
        if !self.yes && !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }

        gateway.delete_all().await?;
        println!("Cleared {} books.", books.len());
        Ok(())
    }
}
