//! Implementations of the `texform` subcommands.

pub mod delete;
pub mod export;
pub mod generate;
pub mod import;
pub mod init;
pub mod ls;
pub mod open;
pub mod search;
pub mod show;
pub mod status;
