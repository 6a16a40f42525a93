//! # Storage Layer
//!
//! Persistence for the inventory sits behind the [`DataStore`] trait so the rest of the
//! library never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the boat data file on disk, in the line format described in
//!   [`codec`]. The whole inventory is read at session start and written back at exit.
//! - [`memory::InMemoryStore`]: keeps the encoded text in memory, for tests.
//!
//! Both go through [`codec`], so a store that survives a trip through `InMemoryStore`
//! survives a trip through the file as well.
//!
//! ## Failure Policy
//!
//! Reading or writing the data file either works completely or fails with
//! [`MarinaError::UnreadableFile`](crate::error::MarinaError::UnreadableFile) /
//! [`MarinaError::UnwritableFile`](crate::error::MarinaError::UnwritableFile). Callers treat
//! both as fatal. Individual bad lines are not failures: they are skipped and reported in
//! the [`LoadReport`].

use crate::error::Result;
use crate::inventory::BoatStore;

pub mod codec;
pub mod fs;
pub mod memory;

pub use codec::{LoadReport, SkippedLine};

/// Abstract interface for loading and saving the whole inventory.
pub trait DataStore {
    /// Read every boat. Bad lines are skipped and reported.
    fn load(&self) -> Result<(BoatStore, LoadReport)>;

    /// Replace the persisted inventory with `boats`.
    fn save(&mut self, boats: &BoatStore) -> Result<()>;

    /// Human readable description of where the data lives.
    fn describe(&self) -> String;
}
