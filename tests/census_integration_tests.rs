//! Integration tests exercising the census store through both the safe
//! API and the exported C surface.

use std::ffi::CString;
use std::io::Write;

use proptest::prelude::*;
use rstest::rstest;

use zipcensus::store::ffi::{
    rust_census_free, rust_census_insert, rust_census_len, rust_census_load, rust_census_new,
    rust_census_populate, rust_census_query,
};
use zipcensus::store::{CensusStore, CANONICAL_HIGH, CANONICAL_LOW, EXPECTED_DELTA, SEED_RECORDS};
use zipcensus::text::{rust_format_entry, rust_free_string};

fn cstr(s: &str) -> CString {
    CString::new(s).unwrap()
}

#[test]
fn native_caller_scenario() {
    // The sequence the embedding application runs: create a handle,
    // populate it, query the two canonical codes, free the handle, and
    // use the difference of the two counts.
    let store = rust_census_new();
    assert!(!store.is_null());

    let low = cstr(CANONICAL_LOW);
    let high = cstr(CANONICAL_HIGH);

    unsafe {
        rust_census_populate(store);

        let pop1 = rust_census_query(store, low.as_ptr());
        let pop2 = rust_census_query(store, high.as_ptr());

        rust_census_free(store);

        assert_eq!(pop2 - pop1, EXPECTED_DELTA);
    }
}

#[test]
fn safe_and_ffi_surfaces_agree() {
    let mut safe_store = CensusStore::new();
    safe_store.populate();

    let handle = rust_census_new();
    unsafe {
        rust_census_populate(handle);

        for (code, _) in SEED_RECORDS {
            let c_code = cstr(code);
            assert_eq!(
                rust_census_query(handle, c_code.as_ptr()),
                safe_store.count(code)
            );
        }

        assert_eq!(rust_census_len(handle), safe_store.len());
        rust_census_free(handle);
    }
}

#[rstest]
#[case("10186", 17_310)]
#[case("10852", 17_976)]
#[case("10025", 94_600)]
fn seeded_codes_resolve(#[case] code: &str, #[case] expected: u32) {
    let mut store = CensusStore::new();
    store.populate();
    assert_eq!(store.count(code), expected);
}

#[rstest]
#[case("00000")]
#[case("99999")]
#[case("")]
fn unseeded_codes_miss(#[case] code: &str) {
    let mut store = CensusStore::new();
    store.populate();
    assert_eq!(store.lookup(code), None);
}

#[test]
fn record_file_merges_over_seed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# overrides and additions").unwrap();
    writeln!(file, "10186 = 20000").unwrap();
    writeln!(file, "60601 = 12321").unwrap();
    file.flush().unwrap();

    let handle = rust_census_new();
    let path = cstr(file.path().to_str().unwrap());

    unsafe {
        rust_census_populate(handle);
        assert_eq!(rust_census_load(handle, path.as_ptr()), 1);

        let low = cstr("10186");
        let added = cstr("60601");
        assert_eq!(rust_census_query(handle, low.as_ptr()), 20_000);
        assert_eq!(rust_census_query(handle, added.as_ptr()), 12_321);

        rust_census_free(handle);
    }
}

#[test]
fn formatted_entries_round_trip_through_ffi() {
    let handle = rust_census_new();
    let code = cstr(CANONICAL_LOW);

    unsafe {
        rust_census_populate(handle);
        let count = rust_census_query(handle, code.as_ptr());

        let line = rust_format_entry(code.as_ptr(), count);
        assert!(!line.is_null());

        let rendered = std::ffi::CStr::from_ptr(line).to_str().unwrap().to_string();
        rust_free_string(line);
        rust_census_free(handle);

        assert_eq!(rendered, format!("{} => {}", CANONICAL_LOW, count));
    }
}

proptest! {
    #[test]
    fn inserted_records_are_queryable(code in "[0-9]{5}", count in 1u32..2_000_000) {
        let handle = rust_census_new();
        let c_code = cstr(&code);

        unsafe {
            prop_assert_eq!(rust_census_insert(handle, c_code.as_ptr(), count), 1);
            prop_assert_eq!(rust_census_query(handle, c_code.as_ptr()), count);
            rust_census_free(handle);
        }
    }

    #[test]
    fn last_write_wins(code in "[0-9]{5}", first in any::<u32>(), second in any::<u32>()) {
        let mut store = CensusStore::new();
        store.insert(code.clone(), first);
        store.insert(code.clone(), second);

        prop_assert_eq!(store.lookup(&code), Some(second));
        prop_assert_eq!(store.len(), 1);
    }
}
