//! CLI module
//!
//! Command-line interface writing marketplace records as JSON lines.
//!
//! # Commands
//!
//! - `events` - Asset events, every page
//! - `orders` - Legacy order book, one page or every page
//! - `listings` - Active listings of specific tokens
//! - `asset` - One asset
//! - `collection` - One collection
//! - `collections` - A window of the collection list

mod commands;
mod runner;

pub use commands::{Cli, Commands, SideArg};
pub use runner::{write_records, write_retrieval, Runner};

#[cfg(test)]
mod tests;
