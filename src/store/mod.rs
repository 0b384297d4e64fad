// Census store module
// Opaque key/value store mapping postal codes to population counts

pub mod census;
pub mod ffi;
pub mod seed;

pub use census::{CensusStore, StoreError};
pub use seed::{CANONICAL_HIGH, CANONICAL_LOW, EXPECTED_DELTA, SEED_RECORDS};
