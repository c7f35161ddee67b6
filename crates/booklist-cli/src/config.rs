use std::{fs, path::PathBuf};

use booklist_dal::gateway::GatewaySettings;
use clap::{Parser, Subcommand};
use url::Url;

use crate::commands::{
    add::AddCmd, clear::ClearCmd, cycle::CycleCmd, delete::DeleteCmd, edit::EditCmd, list::ListCmd,
    note::NoteCmd, rate::RateCmd, share::ShareCmd, stats::StatsCmd,
};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "Personal book list - track what you want to read, are reading and have read. Books live in a local file, or in a hosted table when its URL and API key are configured."
)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Add(AddCmd),
    List(ListCmd),
    Edit(EditCmd),
    Rate(RateCmd),
    Cycle(CycleCmd),
    Note(NoteCmd),
    Share(ShareCmd),
    Stats(StatsCmd),
    Delete(DeleteCmd),
    Clear(ClearCmd),
}

impl crate::commands::Executor for Command {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Add(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Edit(cmd) => cmd.run().await,
            Command::Rate(cmd) => cmd.run().await,
            Command::Cycle(cmd) => cmd.run().await,
            Command::Note(cmd) => cmd.run().await,
            Command::Share(cmd) => cmd.run().await,
            Command::Stats(cmd) => cmd.run().await,
            Command::Delete(cmd) => cmd.run().await,
            Command::Clear(cmd) => cmd.run().await,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct StorageConfig {
    #[arg(
        long,
        env = "BOOKLIST_REMOTE_URL",
        help = "Base URL of the hosted table service, e.g. https://xyz.supabase.co - without it books are kept in a local file"
    )]
    pub remote_url: Option<Url>,

    #[arg(
        long,
        env = "BOOKLIST_REMOTE_KEY",
        help = "API key for the hosted table service"
    )]
    pub remote_key: Option<String>,

    #[arg(
        long,
        env = "BOOKLIST_TABLE",
        default_value = "books",
        help = "Name of the hosted table"
    )]
    pub table: String,

    #[arg(
        long,
        env = "BOOKLIST_DATA_DIR",
        help = "Directory for the local book file, default is system default like ~/.local/share/booklist",
        default_value_t = default_data_dir()
    )]
    data_dir: String,
}

fn default_data_dir() -> String {
    let dir = dirs::data_dir()
        .map(|p| p.join("booklist"))
        .unwrap_or_else(|| PathBuf::from("booklist"));

    if !fs::exists(&dir).expect("Failed to check if data directory exists") {
        fs::create_dir_all(&dir).expect("Failed to create data directory");
    } else if !dir.is_dir() {
        panic!("Data directory is not a directory",)
    }

    dir.to_string_lossy().to_string()
}

impl StorageConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn settings(&self) -> GatewaySettings {
        GatewaySettings {
            remote_url: self.remote_url.clone(),
            remote_key: self.remote_key.clone(),
            table: self.table.clone(),
            data_dir: self.data_dir(),
        }
    }
}
