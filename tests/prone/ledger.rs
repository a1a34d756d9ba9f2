use scalar_rail::{AnyError, Erroneous, ErrorProne, Ledger};
use std::fmt;

#[derive(Debug)]
struct Timeout(&'static str);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Timeout {}

#[derive(Debug)]
struct Refused(&'static str);

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Refused {}

#[test]
fn distinct_errors_keeps_first_occurrences_in_order() {
    let prone =
        ErrorProne::<(), _>::from_errors(["b", "a", "b", "c", "a"]).distinct_errors();
    assert_eq!(prone.errors(), ["b", "a", "c"]);
}

#[test]
fn distinct_any_errors_compare_kind_and_message() {
    let errors: Vec<AnyError> = vec![
        Timeout("upstream").into(),
        Timeout("upstream").into(),
        Refused("upstream").into(),
        Timeout("database").into(),
    ];

    let prone = ErrorProne::<(), AnyError>::from_errors(errors).distinct_errors();
    let kept: Vec<(bool, &str)> =
        prone.errors().iter().map(|e| (e.is::<Timeout>(), e.message())).collect();

    assert_eq!(kept, [(true, "upstream"), (false, "upstream"), (true, "database")]);
}

#[test]
fn distinct_errors_by_uses_the_given_equality() {
    let prone = ErrorProne::<(), _>::from_errors(["Short", "short", "BLANK"])
        .distinct_errors_by(|a, b| a.eq_ignore_ascii_case(b));
    assert_eq!(prone.errors(), ["Short", "BLANK"]);
}

#[test]
fn aggregate_collects_errors_across_value_types() {
    let name = ErrorProne::from_value("").inspect(|n| !n.is_empty(), "name is empty");
    let age = ErrorProne::from_value(200u8).inspect(|a| *a < 150, "age is implausible");
    let email = ErrorProne::<_, &str>::from_value(String::from("ada@example.com"));

    let report = ErrorProne::aggregate([
        &name as &dyn Erroneous<&str>,
        &age,
        &email,
    ]);

    assert!(report.is_faulty());
    assert_eq!(report.errors(), ["name is empty", "age is implausible"]);
}

#[test]
fn aggregate_of_valid_results_is_valid() {
    let a = ErrorProne::<_, &str>::from_value(1);
    let b = ErrorProne::<_, &str>::from_value('x');

    let report = ErrorProne::aggregate([&a as &dyn Erroneous<&str>, &b]);
    assert!(report.is_valid());
    assert_eq!(report.value(), Ok(&()));
}

#[test]
fn merge_appends_after_existing_errors() {
    let password = ErrorProne::from_value("hunter2").inspect(|p| p.len() >= 12, "too short");
    let confirmation = ErrorProne::<&str, _>::from_error("does not match");

    let merged = password.merge(&confirmation);
    assert_eq!(merged.errors(), ["too short", "does not match"]);
}

#[test]
fn merging_a_valid_result_changes_nothing() {
    let left = ErrorProne::<_, &str>::from_value(3);
    let right = ErrorProne::<_, &str>::from_value("ok");
    let merged = left.merge(&right);
    assert_eq!(merged.value(), Ok(&3));
}

#[test]
fn ledger_iterates_in_recording_order() {
    let mut ledger = Ledger::new();
    ledger.record("first");
    ledger.record_all(["second", "third"]);

    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.first(), Some(&"first"));
    assert_eq!(ledger.iter().copied().collect::<Vec<_>>(), ["first", "second", "third"]);
    assert_eq!(ledger.into_iter().last(), Some("third"));
}

#[test]
fn into_errors_returns_the_ledger() {
    let prone = ErrorProne::from_value(0).inspect(|n| *n != 0, "zero");
    let ledger = prone.into_errors();
    assert_eq!(ledger.as_slice(), ["zero"]);
}
