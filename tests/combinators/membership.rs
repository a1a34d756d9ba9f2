use scalar_rail::ErrorProne;
use std::collections::{BTreeSet, HashSet};

#[test]
fn one_of_accepts_listed_values() {
    let prone = ErrorProne::from_value("GET").one_of(["GET", "POST"], "unsupported method");
    assert!(prone.is_valid());
}

#[test]
fn one_of_rejects_unlisted_values() {
    let prone = ErrorProne::from_value("PATCH").one_of(&["GET", "POST"], "unsupported method");
    assert_eq!(prone.errors(), ["unsupported method"]);
}

#[test]
fn none_of_rejects_listed_values() {
    let reserved: HashSet<String> = ["root", "admin"].iter().map(|s| s.to_string()).collect();

    let taken = ErrorProne::from_value(String::from("admin")).none_of(&reserved, "reserved");
    assert_eq!(taken.errors(), ["reserved"]);

    let free = ErrorProne::from_value(String::from("ferris")).none_of(&reserved, "reserved");
    assert!(free.is_valid());
}

#[test]
fn membership_against_an_empty_set() {
    let empty: BTreeSet<u8> = BTreeSet::new();

    assert_eq!(ErrorProne::from_value(1u8).one_of(&empty, "not allowed").errors(), ["not allowed"]);
    assert!(ErrorProne::from_value(1u8).none_of(&empty, "forbidden").is_valid());
}
