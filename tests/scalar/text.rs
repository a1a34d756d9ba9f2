use scalar_rail::scalars::{EmailAddress, Username, UsernameCriteria};
use scalar_rail::{ErrorProne, Scalar, ScalarError};

fn rules<S>(inspected: &ErrorProne<S, ScalarError>) -> Vec<&str> {
    inspected.errors().iter().map(ScalarError::rule).collect()
}

#[test]
fn username_defaults_accept_one_to_twenty_one_characters() {
    assert!(Username::construct("a".into()).is_ok());
    assert!(Username::construct("a".repeat(21)).is_ok());
    assert!(Username::construct("a".repeat(22)).is_err());
    assert!(Username::construct(String::new()).is_err());
}

#[test]
fn username_requires_a_letter_by_default() {
    let error = Username::construct("12345".into()).unwrap_err();
    assert_eq!(error.rule(), "must contain at least one letter");

    let digits_allowed = UsernameCriteria::default().require_letter(false);
    assert!(Username::construct_with("12345".into(), &digits_allowed).is_ok());
}

#[test]
fn username_letter_rule_counts_only_ascii_letters() {
    for name in ["ñ1", "日本", "Ωμέγα"] {
        let error = Username::construct(name.into()).unwrap_err();
        assert_eq!(error.rule(), "must contain at least one letter", "{name:?}");
    }
    assert!(Username::construct("ñandú_7x".into()).is_ok());
}

#[test]
fn username_reports_length_and_letter_together() {
    let inspected = Username::inspect("1".repeat(30));
    assert_eq!(
        rules(&inspected),
        ["must be between 1 and 21 characters long", "must contain at least one letter"]
    );
}

#[test]
fn username_criteria_do_not_leak_between_calls() {
    let roomy = UsernameCriteria::new(1, 40);
    let long_name = "a".repeat(30);

    assert!(Username::construct_with(long_name.clone(), &roomy).is_ok());
    assert!(Username::construct(long_name).is_err());
}

#[test]
fn username_round_trips_through_text() {
    let name: Username = "ferris".parse().unwrap();
    assert_eq!(name.as_str(), "ferris");
    assert_eq!(name.to_string(), "ferris");
    assert_eq!(Username::try_from(name.render()), Ok(name));
}

#[test]
fn email_splits_local_part_and_domain() {
    let email = EmailAddress::construct("grace.hopper@navy.mil".into()).unwrap();
    assert_eq!(email.local_part(), "grace.hopper");
    assert_eq!(email.domain(), "navy.mil");
    assert_eq!(email.render(), "grace.hopper@navy.mil");
}

#[test]
fn email_rejects_missing_at() {
    let error = EmailAddress::construct("example.com".into()).unwrap_err();
    assert_eq!(error.rule(), "must contain exactly one '@'");
}

#[test]
fn email_reports_every_violation() {
    let inspected = EmailAddress::inspect(String::new());
    assert_eq!(
        rules(&inspected),
        ["must not be empty", "must contain exactly one '@'", "must look like name@example.com"]
    );

    let long_local = format!("{}@example.com", "x".repeat(65));
    let inspected = EmailAddress::inspect(long_local);
    assert_eq!(rules(&inspected), ["local part must be between 1 and 64 characters long"]);
}

#[test]
fn email_rejects_addresses_over_254_characters() {
    let domain = format!("{}.com", vec!["a".repeat(60); 4].join("."));
    let address = format!("someone@{domain}");
    assert!(address.chars().count() > 254);

    let inspected = EmailAddress::inspect(address);
    assert!(rules(&inspected).contains(&"must be at most 254 characters long"));
}

#[test]
fn email_parses_from_str() {
    let parsed: Result<EmailAddress, _> = "ada@example.com".parse();
    assert!(parsed.is_ok());

    let parsed: Result<EmailAddress, _> = "ada@@example.com".parse();
    assert!(parsed.is_err());
}
