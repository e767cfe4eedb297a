use std::collections::HashSet;

use swatch_engine::{ColorError, VariantKind, decode, encode_rgb, generate};

#[test]
fn pastel_pink_yields_four_distinct_colors() {
    let palette = generate(&["#ff9aa2"]).expect("valid base color");
    assert_eq!(palette.colors(), vec!["#ff9aa2", "#ffb3b9", "#bf7379", "#00655d"]);
}

#[test]
fn black_skips_darker_variant() {
    let palette = generate(&["#000000"]).expect("valid base color");
    assert_eq!(palette.colors(), vec!["#000000", "#3f3f3f", "#ffffff"]);
    let kinds: Vec<_> = palette.iter().map(|entry| entry.kind).collect();
    assert_eq!(kinds, vec![VariantKind::Base, VariantKind::Lighter, VariantKind::Complementary]);
}

#[test]
fn white_skips_lighter_variant() {
    let palette = generate(&["#ffffff"]).expect("valid base color");
    assert_eq!(palette.colors(), vec!["#ffffff", "#bfbfbf", "#000000"]);
}

#[test]
fn duplicate_bases_are_kept_but_their_variants_are_not() {
    let palette = generate(&["#abcdef", "#abcdef"]).expect("valid base colors");
    let colors = palette.colors();
    assert_eq!(&colors[..2], &["#abcdef", "#abcdef"]);
    assert_eq!(colors.len(), 5, "palette: {:?}", colors);
    assert!(palette.iter().skip(2).all(|entry| entry.source == 0));
}

#[test]
fn malformed_base_fails_whole_call() {
    let err = generate(&["not-a-color"]).unwrap_err();
    assert!(matches!(err, ColorError::InvalidColorFormat { ref value, .. } if value == "not-a-color"));
}

#[test]
fn empty_input_yields_empty_palette() {
    let palette = generate::<&str>(&[]).expect("empty input is valid");
    assert!(palette.is_empty());
}

#[test]
fn derived_colors_never_repeat_earlier_entries() {
    let inputs = [
        vec!["#ff9aa2", "#ffdac1", "#e2f0cb", "#b5ead7", "#c7ceea"],
        vec!["#000000", "#ffffff", "#3f3f3f", "#bfbfbf", "#808080"],
        vec!["#123456", "#edcba9", "#123456"],
    ];
    for bases in inputs {
        let palette = generate(&bases).expect("valid base colors");
        let mut seen: HashSet<&str> = bases.iter().copied().collect();
        for entry in palette.iter().skip(bases.len()) {
            assert!(seen.insert(entry.color.as_str()), "{} repeated for {:?}", entry.color, bases);
        }
        assert!(palette.len() <= bases.len() * 4);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let bases = ["#ff9aa2", "#C7CEEA", "#0a0b0c"];
    let first = generate(&bases).expect("valid base colors");
    let second = generate(&bases).expect("valid base colors");
    assert_eq!(first, second);
}

#[test]
fn derived_colors_are_canonical_lowercase() {
    let palette = generate(&["#ABCDEF", "#0F0F0F"]).expect("valid base colors");
    for entry in palette.iter().filter(|entry| entry.kind != VariantKind::Base) {
        assert_eq!(entry.color.len(), 7);
        assert_eq!(entry.color, entry.color.to_ascii_lowercase());
        let rgb = decode(&entry.color).expect("derived colors decode");
        assert_eq!(encode_rgb(rgb), entry.color);
    }
}
