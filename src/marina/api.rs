//! # API Facade
//!
//! [`MarinaApi`] is the single entry point for a session. It owns the in-memory inventory
//! and the [`DataStore`] it came from, dispatches each operation to its command module and
//! hands back structured results. It never prints and never exits; presenting results and
//! deciding what is fatal is the caller's job.
//!
//! A session looks like:
//!
//! 1. [`MarinaApi::open`] loads every boat from the store.
//! 2. Any number of list/add/remove/payment/month calls mutate the in-memory inventory.
//! 3. [`MarinaApi::save`] writes the inventory back. Nothing is persisted before that.
//!
//! `MarinaApi<S: DataStore>` is generic over the backend: `FileStore` in the binary,
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::inventory::BoatStore;
use crate::model::BoatRecord;
use crate::store::{DataStore, LoadReport};

pub struct MarinaApi<S: DataStore> {
    store: S,
    boats: BoatStore,
}

impl<S: DataStore> MarinaApi<S> {
    /// Loads the inventory from `store`. Fails only if the store cannot be read at all.
    pub fn open(store: S) -> Result<(Self, LoadReport)> {
        let (boats, report) = store.load()?;
        Ok((Self { store, boats }, report))
    }

    pub fn list_boats(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.boats)
    }

    pub fn add_boat(&mut self, csv: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.boats, csv)
    }

    pub fn remove_boat(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.boats, name)
    }

    pub fn find_boat(&self, name: &str) -> Option<&BoatRecord> {
        self.boats.find(name.trim())
    }

    pub fn accept_payment(&mut self, name: &str, amount: f64) -> Result<commands::CmdResult> {
        commands::payment::run(&mut self.boats, name, amount)
    }

    pub fn accrue_monthly(&mut self) -> Result<commands::CmdResult> {
        commands::month::run(&mut self.boats)
    }

    /// Writes the whole inventory back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.boats)
    }

    pub fn boats(&self) -> &BoatStore {
        &self.boats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
