use scalar_rail::{Boundary, ErrorProne};

#[test]
fn not_empty_flags_only_the_empty_string() {
    assert_eq!(ErrorProne::from_value("").not_empty("empty").errors(), ["empty"]);
    assert!(ErrorProne::from_value(" ").not_empty("empty").is_valid());
}

#[test]
fn lengths_count_characters_not_bytes() {
    // Four characters, twelve bytes.
    let word = "안녕하세";

    let prone = ErrorProne::from_value(word)
        .max_length(4, Boundary::Inclusive, "too long")
        .min_length(4, Boundary::Inclusive, "too short");
    assert!(prone.is_valid());

    let strict = ErrorProne::from_value(word).max_length(4, Boundary::Exclusive, "too long");
    assert_eq!(strict.errors(), ["too long"]);
}

#[test]
fn bound_length_records_one_entry() {
    let short = ErrorProne::from_value(String::from("a")).bound_length(
        2,
        5,
        Boundary::Inclusive,
        Boundary::Inclusive,
        "must be 2 to 5 characters",
    );
    assert_eq!(short.errors(), ["must be 2 to 5 characters"]);

    let fits = ErrorProne::from_value(String::from("abcde")).bound_length(
        2,
        5,
        Boundary::Inclusive,
        Boundary::Inclusive,
        "must be 2 to 5 characters",
    );
    assert!(fits.is_valid());
}

#[test]
fn matches_accepts_plain_closures() {
    let hexadecimal = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit());

    assert!(ErrorProne::from_value("c0ffee").matches(&hexadecimal, "not hex").is_valid());
    assert_eq!(
        ErrorProne::from_value("coffee").matches(&hexadecimal, "not hex").errors(),
        ["not hex"]
    );
}

#[cfg(feature = "regex")]
#[test]
fn matches_accepts_regex() {
    let slug = regex::Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    assert!(ErrorProne::from_value("hello-world").matches(&slug, "not a slug").is_valid());
    assert_eq!(
        ErrorProne::from_value("Hello World").matches(&slug, "not a slug").errors(),
        ["not a slug"]
    );
}
