//! # mcexport Architecture
//!
//! mcexport turns a massCode snippet database (`db.json`) into a single
//! document: a plain-text listing, a searchable HTML page, or JSON. It is a
//! library with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, merges config, sets up logging         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - decode → resolve folders → enrich → render → deliver     │
//! │  - Returns CmdResult with messages, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - Abstract DatabaseSource trait                            │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline stages live in their own modules and are pure functions over
//! owned data: [`folders`] builds the folder path map, [`enrich`] joins
//! snippets with folders and tags, [`render`] produces the document.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides whether
//! and where they are shown.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for exports
//! - [`commands`]: The export pipeline and message types
//! - [`store`]: Database sources and the decoder
//! - [`model`]: Wire types and output records
//! - [`folders`]: Folder path resolution
//! - [`enrich`]: Snippet enrichment and filtering
//! - [`render`]: Text, HTML and JSON renderers
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod enrich;
pub mod error;
pub mod folders;
pub mod model;
pub mod render;
pub mod store;
