use booklist_dal::collection::Collection;
use clap::Parser;

use crate::{
    commands::{Executor, connect},
    config::StorageConfig,
    render,
};

#[derive(Parser, Debug)]
pub struct StatsCmd {
    #[command(flatten)]
    storage: StorageConfig,
}

impl Executor for StatsCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let books = gateway.list().await?;
        let stats = Collection::new(books).stats();

        println!("Total:   {}", stats.total);
        println!("Read:    {}", stats.read);
        println!("Reading: {}", stats.reading);
        println!("Storage: {}", render::storage_label(gateway.kind()));
        Ok(())
    }
}
