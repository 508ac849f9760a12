use super::*;

#[test]
fn hex_round_trips_every_color() {
    for v in 0u32..(1 << 24) {
        let c = Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8);
        assert_eq!(parse_hex(&c.to_hex()).unwrap(), c, "v={v:06x}");
    }
}

#[test]
fn hex_accepts_prefixes_and_case() {
    let want = Rgb8::new(0xab, 0xcd, 0xef);
    for s in ["#abcdef", "abcdef", "0xabcdef", "#ABCDEF", "  #AbCdEf \n"] {
        assert_eq!(parse_hex(s).unwrap(), want, "{s:?}");
    }
}

#[test]
fn hex_rejects_malformed_input() {
    for s in ["", "#", "#12345", "#1234567", "#12345g", "+12345", "#+12345", "##123456"] {
        let err = parse_hex(s).unwrap_err();
        assert!(matches!(err, MirageError::Unsupported(_)), "{s:?}: {err}");
    }
}

#[test]
fn to_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(0, 0, 0).to_hex(), "#000000");
    assert_eq!(Rgb8::new(1, 10, 255).to_hex(), "#010aff");
}

#[test]
fn rgb_parses_with_loose_spacing() {
    assert_eq!(parse_rgb("12,34,56").unwrap(), Rgb8::new(12, 34, 56));
    assert_eq!(parse_rgb(" 12 , 34 ,56 ").unwrap(), Rgb8::new(12, 34, 56));
}

#[test]
fn rgb_out_of_range_channels_become_zero() {
    assert_eq!(parse_rgb("256, 10, -1").unwrap(), Rgb8::new(0, 10, 0));
    assert_eq!(parse_rgb("300, 255, 0").unwrap().to_hex(), "#00ff00");
}

#[test]
fn rgb_rejects_non_numeric_or_wrong_arity() {
    for s in ["a, b, c", "1, 2", "1, 2, 3, 4", "1.5, 2, 3", ""] {
        assert!(parse_rgb(s).is_err(), "{s:?}");
    }
}

#[test]
fn rgb_display_matches_input_format() {
    assert_eq!(Rgb8::new(0, 128, 255).to_string(), "0, 128, 255");
}

#[test]
fn hsl_of_primaries_and_grays() {
    assert_eq!(rgb_to_hsl(Rgb8::new(255, 0, 0)).to_string(), "0, 100%, 50%");
    assert_eq!(rgb_to_hsl(Rgb8::new(0, 255, 0)).to_string(), "120, 100%, 50%");
    assert_eq!(rgb_to_hsl(Rgb8::new(0, 0, 255)).to_string(), "240, 100%, 50%");
    assert_eq!(rgb_to_hsl(Rgb8::new(0, 0, 0)).to_string(), "0, 0%, 0%");
    assert_eq!(rgb_to_hsl(Rgb8::new(255, 255, 255)).to_string(), "0, 0%, 100%");
    assert_eq!(rgb_to_hsl(Rgb8::new(128, 128, 128)).to_string(), "0, 0%, 50%");
}

#[test]
fn hsl_of_mixed_color() {
    // #336699: h = 210, s = 50%, l = 40%
    assert_eq!(
        Rgb8::new(0x33, 0x66, 0x99).to_hsl(),
        Hsl { h: 210, s: 50, l: 40 }
    );
}

#[test]
fn hsl_hue_wraps_for_magenta_side() {
    // max is red and g < b
    let hsl = rgb_to_hsl(Rgb8::new(255, 0, 128));
    assert_eq!(hsl.h, 330);
}
