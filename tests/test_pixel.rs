use text2png::prelude::*;

#[test]
fn test_hex_parsing() -> text2png::Result<()> {
    assert_eq!(Rgba::from_hex("#FFFFFF")?, Rgba::white());
    assert_eq!(Rgba::from_hex("000000")?, Rgba::black());
    assert_eq!(Rgba::from_hex("#00FF0080")?, Rgba::new(0, 255, 0, 128));
    assert_eq!(Rgba::from_hex("00000000")?, Rgba::transparent());

    Ok(())
}

#[test]
fn test_hex_parsing_rejects_malformed_codes() {
    for code in ["#12345", "#1234567", "zzzzzz", "", "#"] {
        assert!(matches!(
            Rgba::from_hex(code),
            Err(Error::InvalidHexCode(_))
        ));
    }
}

#[test]
fn test_blend_full_coverage() {
    let red = Rgba::new(255, 0, 0, 255);

    assert_eq!(Rgba::transparent().blend(red, 255), red);
    assert_eq!(Rgba::white().blend(red, 255), red);
}

#[test]
fn test_blend_zero_coverage_is_identity() {
    let background = Rgba::new(12, 34, 56, 78);
    assert_eq!(background.blend(Rgba::white(), 0), background);
}

#[test]
fn test_blend_partial_coverage_over_opaque() {
    // Half-covered black over opaque white stays opaque and lands mid-gray.
    let blended = Rgba::white().blend(Rgba::black(), 127);

    assert_eq!(blended.a, 255);
    assert!(blended.r.abs_diff(128) <= 1);
    assert_eq!(blended.r, blended.g);
    assert_eq!(blended.g, blended.b);
}

#[test]
fn test_blend_transparent_source_is_identity() {
    let background = Rgba::new(12, 34, 56, 78);
    assert_eq!(background.blend(Rgba::transparent(), 255), background);
}

#[test]
fn test_rgb_rgba_conversions() {
    assert_eq!(Rgba::from(Rgb::new(1, 2, 3)), Rgba::new(1, 2, 3, 255));
    assert_eq!(Rgb::from(Rgba::new(1, 2, 3, 4)), Rgb::new(1, 2, 3));
    assert_eq!(Rgba::from_rgb(Rgb::white()), Rgba::white());
}
