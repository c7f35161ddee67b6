use booklist_dal::book::{BookDraft, NOTES_SOFT_LIMIT, NOTES_WARN_THRESHOLD};
use clap::Parser;

use crate::{
    commands::{Executor, connect, find_book},
    config::StorageConfig,
    render,
};

/// Shows the note of a book, or replaces/removes it.
#[derive(Parser, Debug)]
pub struct NoteCmd {
    #[command(flatten)]
    storage: StorageConfig,
    #[arg(help = "Id of the book")]
    id: i64,
    #[arg(short, long, conflicts_with = "clear", help = "Replace the note text")]
    text: Option<String>,
    #[arg(long, help = "Remove the note")]
    clear: bool,
}

impl Executor for NoteCmd {
    async fn run(self) -> anyhow::Result<()> {
        let gateway = connect(&self.storage).await;
        let book = find_book(&gateway, self.id).await?;

        if self.clear {
            let mut draft = BookDraft::from(book);
            draft.notes = String::new();
            let book = gateway.upsert(draft).await?;
            println!("Note removed from \"{}\".", book.title);
            return Ok(());
        }

        if let Some(text) = self.text {
            let mut draft = BookDraft::from(book);
            draft.notes = text;
            let book = gateway.upsert(draft).await?;
            println!("Note saved ({}).", render::notes_counter(&book.notes));
            let length = book.notes.chars().count();
            if length > NOTES_SOFT_LIMIT {
                println!("Note is over the {NOTES_SOFT_LIMIT} character limit, consider trimming it.");
            } else if length > NOTES_WARN_THRESHOLD {
                println!("Note is getting long, the limit is {NOTES_SOFT_LIMIT} characters.");
            }
            return Ok(());
        }

        if book.notes.is_empty() {
            println!("No note for \"{}\".", book.title);
        } else {
            println!("{}", book.notes);
            println!();
            println!("{}", render::notes_counter(&book.notes));
        }
        Ok(())
    }
}
