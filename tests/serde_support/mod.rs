//! Serialization round trips for results, errors and scalars.

use scalar_rail::{ErrorProne, ScalarError};

#[test]
fn error_prone_serializes_value_and_errors() {
    let prone = ErrorProne::from_value(5).inspect(|n| *n > 10, "too small");
    let json = serde_json::to_string(&prone).unwrap();
    assert_eq!(json, r#"{"value":5,"errors":["too small"]}"#);

    let back: ErrorProne<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.errors(), ["too small".to_string()]);
}

#[test]
fn valueless_payload_without_errors_is_rejected() {
    let parsed = serde_json::from_str::<ErrorProne<i32, String>>(r#"{"value":null,"errors":[]}"#);
    let message = parsed.unwrap_err().to_string();
    assert!(message.contains("must record at least one error"), "{message}");
}

#[test]
fn scalar_error_round_trips() {
    let error = ScalarError::named("Sku", "must not be blank", &"");
    let json = serde_json::to_string(&error).unwrap();
    let back: ScalarError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, error);
}

#[cfg(feature = "scalars")]
mod scalars {
    use scalar_rail::scalars::{HexColorCode, Hsla, Percentage, PhoneNumber, Rgba, Username};

    #[test]
    fn scalars_serialize_as_their_rendering() {
        let color: HexColorCode = "#0f0".parse().unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), r##""#00FF00FF""##);

        let share: Percentage = "40%".parse().unwrap();
        assert_eq!(serde_json::to_string(&share).unwrap(), "0.4");
    }

    #[test]
    fn scalars_deserialize_through_validation() {
        let name: Username = serde_json::from_str(r#""ferris""#).unwrap();
        assert_eq!(name.as_str(), "ferris");

        let rejected = serde_json::from_str::<Username>(r#""12345""#).unwrap_err();
        assert!(rejected.to_string().contains("must contain at least one letter"));

        assert!(serde_json::from_str::<Percentage>("1.5").is_err());
    }

    #[test]
    fn phone_numbers_and_translucent_colors_round_trip() {
        let phone: PhoneNumber = "(555) 123-4567".parse().unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, r#""+15551234567""#);
        assert_eq!(serde_json::from_str::<PhoneNumber>(&json).unwrap(), phone);

        let tint = Rgba::from((10u8, 20, 30, 40));
        let json = serde_json::to_string(&tint).unwrap();
        assert_eq!(json, r#""rgba(10, 20, 30, 40)""#);
        assert_eq!(serde_json::from_str::<Rgba>(&json).unwrap(), tint);

        assert!(serde_json::from_str::<Hsla>(r#""hsla(0, 0%, 0%, 256)""#).is_err());
    }
}
