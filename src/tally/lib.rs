//! # Tally Architecture
//!
//! Tally is a **UI-agnostic inventory and point-of-sale library**. This is
//! not a CLI application that happens to have some library code—it's a
//! library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the menus, formats output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per operation            │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, catalog, pricing, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Even the interactive bits keep this rule: [`input`] reads raw fields
//! from any `BufRead`, and [`render`] returns formatted strings. The same
//! core could serve a REST API or a GUI.
//!
//! ## Testing Strategy
//!
//! 1. **Domain + commands**: thorough unit tests of catalog CRUD, pricing,
//!    and each command against `InMemoryStore`. This is where the lion's
//!    share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests only.
//! 3. **CLI**: integration tests under `tests/` drive the binary against a
//!    temp data file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`catalog`]: The insertion-ordered product collection
//! - [`model`]: Core data types (`Product`, `Order`, `OrderLine`)
//! - [`pricing`]: Order pricing (`price_order` → `Invoice`)
//! - [`input`]: Building domain values from raw field input
//! - [`render`]: Plain-text rendering of products and invoices
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod input;
pub mod model;
pub mod pricing;
pub mod render;
pub mod store;
