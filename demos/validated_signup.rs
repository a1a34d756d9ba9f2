//! Validating a signup form with the bundled scalars.
//!
//! `inspect` keeps going after the first broken rule so a form can show every
//! problem at once; `construct` stops at the first one.
//!
//! Run with: cargo run --example validated_signup

use scalar_rail::prelude::*;
use scalar_rail::scalars::{EmailAddress, PhoneFormat, PhoneNumber, Username};

struct Signup {
    username: &'static str,
    email: &'static str,
    phone: &'static str,
}

fn fail_slow(form: &Signup) {
    println!("=== Fail slow (inspect) ===");

    let username = Username::inspect(form.username.into());
    let email = EmailAddress::inspect(form.email.into());
    let phone = PhoneNumber::inspect(form.phone.into());

    let report = ErrorProne::aggregate([
        &username as &dyn Erroneous<ScalarError>,
        &email,
        &phone,
    ]);

    report.dispatch(
        |_| {
            let name = username.value().map(Username::as_str).unwrap_or_default();
            let number = phone
                .value()
                .map(|phone| phone.format(PhoneFormat::Extended))
                .unwrap_or_default();
            println!("welcome {name}, we will text {number}");
        },
        |errors| {
            println!("{} problem(s) with the form:", errors.len());
            for error in errors {
                println!("  - {error}");
            }
        },
    );
    println!();
}

fn fail_fast(form: &Signup) {
    println!("=== Fail fast (construct) ===");

    let account = Username::construct(form.username.into()).and_then(|username| {
        let email = EmailAddress::construct(form.email.into())?;
        let phone = PhoneNumber::construct(form.phone.into())?;
        Ok((username, email, phone))
    });

    match account {
        Ok((username, email, phone)) => println!("created {username} <{email}> {phone}"),
        Err(error) => println!("stopped at: {error}"),
    }
    println!();
}

fn main() {
    let forms = [
        Signup { username: "ferris", email: "ferris@rust-lang.org", phone: "(555) 123-4567" },
        Signup { username: "1234567890123456789012", email: "not-an-email", phone: "555-1234" },
    ];

    for form in &forms {
        println!("--- {} / {} / {} ---", form.username, form.email, form.phone);
        fail_slow(form);
        fail_fast(form);
    }
}
