//! # Petcare Architecture
//!
//! Petcare is a **UI-agnostic pet care library**: it keeps track of pets, their
//! recurring care tasks and their health records, and stores everything in one
//! local JSON document. The `petcare` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses pet selectors, supplies today's date              │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pet Store (pet_store.rs) + Storage Layer (store/)          │
//! │  - Write-through collection of pets                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dates
//!
//! Nothing below the API layer reads the clock. Every operation that depends
//! on "today" takes the date as an argument, which keeps overdue computations
//! deterministic under test.
//!
//! ## Failure Model
//!
//! The core never aborts. Bad records are skipped at load time and failed
//! writes leave the in-memory collection authoritative; both are reported as
//! warning messages on the next [`api::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`model`]: Pets, species, care tasks, health records, overdue computation
//! - [`document`]: The persisted record format
//! - [`pet_store`]: The owning, write-through pet collection
//! - [`store`]: Storage abstraction and implementations
//! - [`index`]: Pet selectors and display positions
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod pet_store;
pub mod store;
