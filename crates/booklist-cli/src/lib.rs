pub mod commands;
pub mod config;
pub mod render;
pub mod run;
