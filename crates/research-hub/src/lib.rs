//! Research Hub MCP Server
//!
//! A Model Context Protocol (MCP) server over a curated research-paper catalog.
//! Lets LLM agents discover and filter papers, compare up to four side by side,
//! export results, and generate structured AI summaries through an
//! OpenAI-compatible chat-completion endpoint.
//!
//! # Features
//!
//! - **19 MCP Tools**: Search, paper detail, summaries, comparison, export, preferences
//! - **Pure pipelines**: Filtering, sorting and comparison statistics are plain functions
//! - **Structured summaries**: JSON-schema output with a fallback on any failure
//! - **Durable preferences**: Bookmarks and navigation history behind a key-value store
//!
//! # Example
//!
//! ```no_run
//! use research_hub::{catalog::Catalog, client::SummaryClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SummaryClient::new(Config::from_env()?)?;
//!     let catalog = Catalog::mock();
//!
//!     if let Some(paper) = catalog.find("1") {
//!         let summary = client.summarize_or_fallback(paper, catalog.diagrams_for("1")).await;
//!         println!("{}", summary.summary);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;

pub use catalog::Catalog;
pub use client::SummaryClient;
pub use config::Config;
pub use error::{ClientError, StoreError, SummaryError, ToolError};
