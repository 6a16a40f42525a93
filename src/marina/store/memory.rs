use super::codec::{self, LoadReport};
use super::DataStore;
use crate::error::{MarinaError, Result};
use crate::inventory::BoatStore;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Holds the encoded text so it goes through the same codec as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    contents: String,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given data file contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            fail_writes: false,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Make every save fail, for exercising error handling.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<(BoatStore, LoadReport)> {
        Ok(codec::decode(&self.contents))
    }

    fn save(&mut self, boats: &BoatStore) -> Result<()> {
        if self.fail_writes {
            return Err(MarinaError::UnwritableFile {
                path: PathBuf::from(self.describe()),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        self.contents = codec::encode(boats);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Data file text with one boat of each kind of storage.
    pub const SAMPLE: &str = "\
Big Brother,20.00,slip,27,1200.00
Pippin,14.00,land,B,0.00
Mistral,22.00,trailer,NFS20,100.00
Moby,31.50,storage,12,55.25
";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn sample() -> Self {
            Self {
                store: InMemoryStore::with_contents(SAMPLE),
            }
        }

        pub fn with_line(mut self, line: &str) -> Self {
            self.store.contents.push_str(line);
            self.store.contents.push('\n');
            self
        }

        /// Adds `count` slip boats named `Boat 1`, `Boat 2`, ...
        pub fn with_boats(mut self, count: usize) -> Self {
            for i in 0..count {
                let line = format!("Boat {},10.00,slip,{},0.00", i + 1, i % 85 + 1);
                self = self.with_line(&line);
            }
            self
        }
    }
}
