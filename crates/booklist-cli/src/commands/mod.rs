pub mod add;
pub mod clear;
pub mod cycle;
pub mod delete;
pub mod edit;
pub mod list;
pub mod note;
pub mod rate;
pub mod share;
pub mod stats;

use anyhow::Context as _;
use booklist_dal::{book::Book, collection::Collection, gateway::Gateway};

use crate::config::StorageConfig;

#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(self) -> anyhow::Result<()>;
}

pub async fn connect(storage: &StorageConfig) -> Gateway {
    Gateway::connect(storage.settings()).await
}

pub async fn find_book(gateway: &Gateway, id: i64) -> anyhow::Result<Book> {
    let collection = Collection::new(gateway.list().await?);
    collection
        .get(id)
        .cloned()
        .with_context(|| format!("No book with id {id}"))
}

pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write as _;

    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES"))
}
