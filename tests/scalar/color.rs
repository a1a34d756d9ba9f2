use scalar_rail::scalars::{HexColorCode, Hsl, Hsla, Rgb, Rgba};
use scalar_rail::{Scalar, ScalarError};

#[test]
fn hex_accepts_every_digit_count() {
    let cases = [
        ("#abc", "#AABBCCFF"),
        ("#abcd", "#AABBCCDD"),
        ("#a1b2c3", "#A1B2C3FF"),
        ("#a1b2c380", "#A1B2C380"),
    ];
    for (input, canonical) in cases {
        assert_eq!(HexColorCode::construct(input.into()).unwrap().render(), canonical);
    }
}

#[test]
fn hex_requires_the_hash_and_a_valid_length() {
    let no_hash = HexColorCode::inspect("abc".into());
    let rules: Vec<&str> = no_hash.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(rules, ["must start with '#'"]);

    let five = HexColorCode::inspect("#abcde".into());
    let rules: Vec<&str> = five.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(rules, ["must have 3, 4, 6 or 8 hexadecimal digits"]);

    assert!(HexColorCode::construct("#ggg".into()).is_err());
}

#[test]
fn hex_alpha_is_a_byte() {
    let translucent = HexColorCode::construct("#00000080".into()).unwrap();
    assert_eq!(translucent.alpha(), 0x80);
    assert_eq!(format!("{translucent:x}"), "00000080");
    assert_eq!(format!("{translucent:X}"), "00000080");
}

#[test]
fn hex_and_rgb_convert_both_ways() {
    let rgb = Rgb::from((18u8, 52, 86));
    let hex = HexColorCode::from(rgb);
    assert_eq!(hex.render(), "#123456FF");
    assert_eq!(Rgb::from(hex), rgb);
}

#[test]
fn rgb_reports_each_channel_out_of_range() {
    let inspected = Rgb::inspect("rgb(256, 255, 300)".into());
    let rules: Vec<&str> = inspected.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(
        rules,
        ["red channel must be between 0 and 255", "blue channel must be between 0 and 255"]
    );
}

#[test]
fn rgb_accepts_loose_whitespace_and_renders_canonically() {
    let rgb = Rgb::construct("rgb( 1,2 ,  3 )".into()).unwrap();
    assert_eq!(rgb.channels(), (1, 2, 3));
    assert_eq!(rgb.render(), "rgb(1, 2, 3)");
    assert_eq!(Rgb::construct(rgb.render()), Ok(rgb));
}

#[test]
fn rgb_rejects_other_shapes() {
    for input in ["rgb(1, 2)", "rgba(1, 2, 3, 4)", "RGB(1, 2, 3)", "rgb(-1, 2, 3)"] {
        assert!(Rgb::construct(input.into()).is_err(), "accepted {input:?}");
    }
}

#[test]
fn hsl_bounds_each_component() {
    let inspected = Hsl::inspect("hsl(400, 101%, 100%)".into());
    let rules: Vec<&str> = inspected.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(
        rules,
        ["hue must be at least 0 and less than 360", "saturation must be between 0% and 100%"]
    );
}

#[test]
fn hsl_round_trips_through_its_rendering() {
    let hsl = Hsl::construct("hsl(210.5, 40%, 62.5%)".into()).unwrap();
    assert_eq!(hsl.render(), "hsl(210.5, 40%, 62.5%)");
    assert_eq!(Hsl::construct(hsl.render()), Ok(hsl));
}

#[test]
fn primary_colors_convert_to_hsl() {
    let cases: [((u8, u8, u8), &str); 5] = [
        ((255, 0, 0), "hsl(0, 100%, 50%)"),
        ((0, 255, 0), "hsl(120, 100%, 50%)"),
        ((0, 0, 255), "hsl(240, 100%, 50%)"),
        ((255, 255, 255), "hsl(0, 0%, 100%)"),
        ((0, 0, 0), "hsl(0, 0%, 0%)"),
    ];
    for (channels, expected) in cases {
        assert_eq!(Hsl::from(Rgb::from(channels)).render(), expected);
    }
}

#[test]
fn hsl_to_rgb_rounds_half_away_from_zero() {
    // The green channel lands exactly on 127.5.
    let hsl = Hsl::construct("hsl(120, 100%, 25%)".into()).unwrap();
    assert_eq!(Rgb::from(hsl).channels(), (0, 128, 0));
}

#[test]
fn rgb_survives_a_trip_through_hsl() {
    for channels in [(12u8, 200, 99), (255, 128, 0), (1, 1, 2), (90, 90, 90)] {
        let rgb = Rgb::from(channels);
        assert_eq!(Rgb::from(Hsl::from(rgb)), rgb, "{rgb}");
    }
}

#[test]
fn colors_parse_from_str() {
    assert!("#fff".parse::<HexColorCode>().is_ok());
    assert!("rgb(0, 0, 0)".parse::<Rgb>().is_ok());
    assert!("hsl(0, 0%, 0%)".parse::<Hsl>().is_ok());
    assert!(Rgb::try_from(String::from("rgb(0, 0)")).is_err());
}

#[test]
fn every_rgb_converts_to_a_constructible_hsl() {
    for red in 0..=255u8 {
        for green in (0..=255u8).step_by(5) {
            for blue in [0u8, 255] {
                let hsl = Hsl::from(Rgb::from((red, green, blue)));
                assert!(
                    Hsl::construct(hsl.render()).is_ok(),
                    "rgb({red}, {green}, {blue}) rendered as {hsl}"
                );
                assert!(hsl.saturation() <= 100.0 && hsl.lightness() <= 100.0, "{hsl}");
            }
        }
    }
}

#[test]
fn dark_green_keeps_full_saturation() {
    let hsl = Hsl::from(Rgb::from((0u8, 10, 0)));
    assert_eq!(hsl.saturation(), 100.0);
    assert_eq!(hsl.hue(), 120.0);
}

#[test]
fn rgba_reports_each_channel_out_of_range() {
    let inspected = Rgba::inspect("rgba(256, 0, 0, 300)".into());
    let rules: Vec<&str> = inspected.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(
        rules,
        ["red channel must be between 0 and 255", "alpha channel must be between 0 and 255"]
    );
}

#[test]
fn translucent_colors_reject_other_shapes() {
    for input in ["rgba(1, 2, 3)", "rgb(1, 2, 3, 4)", "rgba(1, 2, 3, 0.5)"] {
        assert!(Rgba::construct(input.into()).is_err(), "accepted {input:?}");
    }
    for input in ["hsla(0, 0, 0, 0)", "hsla(0, 0%, 0%, 0.5)", "hsl(0, 0%, 0%, 1)"] {
        assert!(Hsla::construct(input.into()).is_err(), "accepted {input:?}");
    }
}

#[test]
fn rgba_keeps_alpha_through_hex() {
    let hex = HexColorCode::construct("#11223344".into()).unwrap();
    let rgba = Rgba::from(hex);
    assert_eq!(rgba.channels(), (0x11, 0x22, 0x33, 0x44));
    assert_eq!(rgba.render(), "rgba(17, 34, 51, 68)");
    assert_eq!(HexColorCode::from(rgba), hex);
}

#[test]
fn opaque_colors_gain_and_lose_alpha() {
    let rgb = Rgb::from((1u8, 2, 3));
    let rgba = Rgba::from(rgb);
    assert_eq!(rgba.alpha(), 255);
    assert_eq!(Rgb::from(Rgba::from((1u8, 2, 3, 4))), rgb);

    let hsl = Hsl::construct("hsl(30, 50%, 50%)".into()).unwrap();
    let hsla = Hsla::from(hsl);
    assert_eq!(hsla.alpha(), 255);
    assert_eq!(hsla.render(), "hsla(30, 50%, 50%, 255)");
    assert_eq!(Hsl::from(hsla), hsl);
}

#[test]
fn hsla_bounds_each_component() {
    let inspected = Hsla::inspect("hsla(360, 50%, 101%, 256)".into());
    let rules: Vec<&str> = inspected.errors().iter().map(ScalarError::rule).collect();
    assert_eq!(
        rules,
        [
            "hue must be at least 0 and less than 360",
            "lightness must be between 0% and 100%",
            "alpha channel must be between 0 and 255",
        ]
    );
}

#[test]
fn alpha_survives_a_trip_through_hsla() {
    let rgba = Rgba::from((255u8, 0, 0, 7));
    let hsla = Hsla::from(rgba);
    assert_eq!(hsla.render(), "hsla(0, 100%, 50%, 7)");
    assert_eq!(Rgba::from(hsla), rgba);
}

#[test]
fn translucent_colors_round_trip_through_their_rendering() {
    let rgba: Rgba = "rgba( 9,8 , 7,  6 )".parse().unwrap();
    assert_eq!(Rgba::construct(rgba.render()), Ok(rgba));

    let hsla: Hsla = "hsla(200.25, 10%, 90.5%, 128)".parse().unwrap();
    assert_eq!(hsla.render(), "hsla(200.25, 10%, 90.5%, 128)");
    assert_eq!(Hsla::try_from(hsla.render()), Ok(hsla));
}
