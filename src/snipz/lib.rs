//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic code-snippet library**. The `snipz` binary is one
//! client of it; the same core could back a web page or an editor plugin.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, render.rs)                          │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - SnipzApi owns the Collection, the store and the clock    │
//! │  - Loads at session start, writes through after mutations   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a Collection snapshot           │
//! │  - Time comes from an injected Clock                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, two JSON documents                  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns
//! `Result<CmdResult>` (or a plain value). It never prints, never exits and
//! only logs through the `log` facade.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests of business logic, using
//!    `Collection` fixtures and a `ManualClock`.
//! 2. **API**: load/seed behavior and the write-through policy, using
//!    `InMemoryStore`.
//! 3. **CLI**: end-to-end runs of the binary against a temp data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Key-value persistence and its implementations
//! - [`collection`]: In-memory state and seed data
//! - [`model`]: `Snippet`, `Category`, `PaletteColor`
//! - [`tags`]: Tag parsing and aggregation
//! - [`language`]: Known languages and display names
//! - [`clock`]: Injectable time source
//! - [`config`]: Configuration file
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod clock;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod store;
pub mod tags;
