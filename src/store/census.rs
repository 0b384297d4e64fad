//! Census store
//!
//! An in-memory mapping from postal codes to population counts. The store
//! is the unit of ownership for the whole crate: callers create one, feed
//! it records, query it, and drop it. Native callers go through the
//! opaque-handle surface in `ffi.rs` instead of touching this type.
//!
//! # Record file format
//! Caller-supplied batches use a simple key-value format:
//! ```text
//! 10186 = 17310
//! # Comments start with #
//! 10852 = 17976
//! ```

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use super::seed::SEED_RECORDS;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error reading a record file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed record line
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Census store - maps postal codes to population counts
///
/// Keys are unique; inserting a code that already exists overwrites the
/// previous count (last write wins). A lookup miss is a normal outcome,
/// reported as `None` (or the 0 sentinel via [`CensusStore::count`]),
/// never as an error.
#[derive(Debug, Default, Clone)]
pub struct CensusStore {
    /// Map from postal code to population count
    records: HashMap<String, u32>,
}

impl CensusStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert one record, overwriting any existing count for the code
    ///
    /// Returns the previous count if the code was already present.
    pub fn insert(&mut self, code: impl Into<String>, count: u32) -> Option<u32> {
        self.records.insert(code.into(), count)
    }

    /// Apply the fixed seed batch
    ///
    /// Every seed record is inserted with overwrite semantics, so calling
    /// this repeatedly leaves the store unchanged after the first call.
    pub fn populate(&mut self) {
        for &(code, count) in SEED_RECORDS {
            self.insert(code, count);
        }
        log::debug!("populated store with {} seed records", SEED_RECORDS.len());
    }

    /// Look up a population count by postal code
    ///
    /// Returns `None` if the code is not present.
    pub fn lookup(&self, code: &str) -> Option<u32> {
        self.records.get(code).copied()
    }

    /// Look up a population count, with 0 as the miss sentinel
    ///
    /// This is the form exposed across the C boundary, where a miss has
    /// to be encoded in the return value itself.
    pub fn count(&self, code: &str) -> u32 {
        self.lookup(code).unwrap_or(0)
    }

    /// Check if a code is present
    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all postal codes
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|c| c.as_str())
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.records.iter().map(|(c, &n)| (c.as_str(), n))
    }

    /// Merge another store into this one
    ///
    /// Records from `other` overwrite records with the same code in `self`.
    pub fn merge(&mut self, other: CensusStore) {
        for (code, count) in other.records {
            self.records.insert(code, count);
        }
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Parse a record batch from a reader
    ///
    /// The format is `code = count` pairs, one per line. Blank lines and
    /// `#` comments are skipped; lines without `=` are ignored. A line
    /// with an empty code or a count that does not parse as an unsigned
    /// 32-bit integer is an error.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut store = Self::new();
        let buf_reader = BufReader::new(reader);

        for (line_num, line_result) in buf_reader.lines().enumerate() {
            let line = line_result?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = trimmed.split_once('=') {
                let code = key.trim();
                let count_str = value.trim();

                if code.is_empty() {
                    return Err(StoreError::Parse {
                        line: line_num + 1,
                        message: "empty postal code".to_string(),
                    });
                }

                let count: u32 = count_str.parse().map_err(|_| StoreError::Parse {
                    line: line_num + 1,
                    message: format!("invalid count '{}'", count_str),
                })?;

                store.insert(code, count);
            }
            // Lines without '=' are skipped, matching the lenient handling
            // of stray content in hand-edited record files.
        }

        Ok(store)
    }

    /// Parse a record batch from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::parse(file)
    }

    /// Parse a record batch from a string
    pub fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}
