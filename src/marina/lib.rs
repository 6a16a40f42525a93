//! # Marina Architecture
//!
//! Marina keeps the books for a small marina: which boats are stored, where, and how much
//! each owner owes. It is a library with a thin interactive CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, table output                         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: inventory + where it is persisted      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + billing.rs                 │
//! │  - One module per menu operation                            │
//! │  - Charges and payments                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory (inventory.rs, model.rs) and Storage (store/)    │
//! │  - Bounded, case-insensitive record store                   │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or calls `std::process::exit`.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade
//! - [`commands`]: list, add, remove, payment and month operations
//! - [`billing`]: monthly rates, accrual and payment rules
//! - [`inventory`]: the bounded boat store
//! - [`model`]: boat records and storage locations
//! - [`store`]: data file persistence
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod billing;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
