use scalar_rail::convert::collect_errors;
use scalar_rail::{any_faulty, Erroneous, ErrorProne, Ledger};

#[test]
fn ok_results_become_valid() {
    let prone: ErrorProne<u8, String> = Ok(7).into();
    assert_eq!(prone.value(), Ok(&7));
}

#[test]
fn err_results_become_faulty_without_a_value() {
    let prone: ErrorProne<u8, _> = "256".parse::<u8>().into();
    assert!(prone.is_faulty());
    assert_eq!(prone.errors().len(), 1);
}

#[test]
fn into_result_keeps_every_error() {
    let prone = ErrorProne::from_value("x")
        .inspect(|s| s.len() > 3, "too short")
        .inspect(|s| s.starts_with('y'), "wrong initial");

    let result: Result<&str, Ledger<&str>> = prone.into();
    let ledger = result.unwrap_err();
    assert_eq!(ledger.as_slice(), ["too short", "wrong initial"]);
}

#[test]
fn into_first_result_fails_fast() {
    let prone = ErrorProne::from_value(0)
        .inspect(|n| *n > 0, "not positive")
        .inspect(|n| *n != 0, "zero");
    assert_eq!(prone.into_first_result(), Err("not positive"));

    let valid = ErrorProne::<_, &str>::from_value(3);
    assert_eq!(valid.into_first_result(), Ok(3));
}

#[test]
fn any_faulty_spots_a_single_bad_result() {
    let a = ErrorProne::<_, &str>::from_value(1);
    let b = ErrorProne::<_, &str>::from_value("two");
    let c = ErrorProne::from_value(3.0).inspect(|f| *f < 1.0, "too big");

    assert!(!any_faulty([&a as &dyn Erroneous<&str>, &b]));
    assert!(any_faulty([&a as &dyn Erroneous<&str>, &b, &c]));
    assert!(!any_faulty(std::iter::empty::<&dyn Erroneous<&str>>()));
}

#[test]
fn collect_errors_is_valid_only_when_empty() {
    let none: [&str; 0] = [];
    assert!(collect_errors(none).is_valid());

    let some = collect_errors(["first", "second"]);
    assert!(some.is_faulty());
    assert_eq!(some.errors(), ["first", "second"]);
}
