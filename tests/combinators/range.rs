use scalar_rail::{Boundary, ErrorProne};

#[test]
fn greater_than_respects_the_boundary() {
    let inclusive = ErrorProne::from_value(10).greater_than(10, Boundary::Inclusive, "low");
    assert!(inclusive.is_valid());

    let exclusive = ErrorProne::from_value(10).greater_than(10, Boundary::Exclusive, "low");
    assert_eq!(exclusive.errors(), ["low"]);
}

#[test]
fn less_than_respects_the_boundary() {
    let inclusive = ErrorProne::from_value(2.5).less_than(2.5, Boundary::Inclusive, "high");
    assert!(inclusive.is_valid());

    let exclusive = ErrorProne::from_value(2.5).less_than(2.5, Boundary::Exclusive, "high");
    assert_eq!(exclusive.errors(), ["high"]);
}

#[test]
fn boundary_defaults_to_exclusive() {
    assert_eq!(Boundary::default(), Boundary::Exclusive);
}

#[test]
fn between_records_a_single_entry_for_either_side() {
    let below = ErrorProne::from_value(-1)
        .between(0, 100, Boundary::Inclusive, Boundary::Inclusive, "out of range");
    let above = ErrorProne::from_value(101)
        .between(0, 100, Boundary::Inclusive, Boundary::Inclusive, "out of range");

    assert_eq!(below.errors(), ["out of range"]);
    assert_eq!(above.errors(), ["out of range"]);
}

#[test]
fn between_mixes_boundaries_per_side() {
    let check = |n: i32| {
        ErrorProne::from_value(n)
            .between(0, 10, Boundary::Inclusive, Boundary::Exclusive, "outside [0, 10)")
            .is_valid()
    };

    assert!(check(0));
    assert!(check(9));
    assert!(!check(10));
    assert!(!check(-1));
}

#[test]
fn nan_never_satisfies_a_range() {
    let prone = ErrorProne::from_value(f64::NAN)
        .greater_than(0.0, Boundary::Inclusive, "low")
        .less_than(1.0, Boundary::Inclusive, "high");
    assert_eq!(prone.errors(), ["low", "high"]);
}

#[test]
fn ranges_work_on_any_partial_ord_value() {
    let version = ErrorProne::from_value((1, 4, 2))
        .greater_than((1, 2, 0), Boundary::Inclusive, "too old")
        .less_than((2, 0, 0), Boundary::Exclusive, "too new");
    assert!(version.is_valid());
}
