//! Seed batch for the census store
//!
//! A fixed table of Manhattan postal codes and population counts applied
//! by [`CensusStore::populate`](super::CensusStore::populate).

/// The low canonical code every populated store must contain.
pub const CANONICAL_LOW: &str = "10186";

/// The high canonical code every populated store must contain.
pub const CANONICAL_HIGH: &str = "10852";

/// Difference between the counts of the two canonical codes.
pub const EXPECTED_DELTA: u32 = 666;

/// Fixed seed records: postal code, population count.
///
/// Invariant: `CANONICAL_LOW` and `CANONICAL_HIGH` are both present and
/// the count of `CANONICAL_HIGH` exceeds the count of `CANONICAL_LOW` by
/// exactly `EXPECTED_DELTA`.
pub const SEED_RECORDS: &[(&str, u32)] = &[
    ("10001", 21_102),
    ("10002", 74_363),
    ("10003", 54_447),
    ("10009", 59_621),
    ("10011", 50_984),
    ("10013", 27_700),
    ("10016", 54_183),
    ("10019", 42_870),
    ("10021", 42_742),
    ("10025", 94_600),
    ("10027", 61_842),
    ("10128", 60_453),
    ("10186", 17_310),
    ("10451", 47_880),
    ("10852", 17_976),
    ("11201", 57_553),
];
