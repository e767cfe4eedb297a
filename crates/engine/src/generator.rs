//! Palette assembly.

use swatch_types::{ColorError, Palette, PaletteEntry, Rgb, VariantKind};
use tracing::debug;

use crate::codec::{decode, encode_rgb};
use crate::shade::derive;

/// Generate a palette and return its colors in order.
///
/// Base colors come first, verbatim and in input order (duplicates kept).
/// Each base color then contributes its lighter, darker and complementary
/// variants, skipping any that already appear in the palette. The first
/// malformed base color fails the whole call.
pub fn generate<S: AsRef<str>>(base_colors: &[S]) -> Result<Palette, ColorError> {
    let decoded = base_colors
        .iter()
        .map(|color| decode(color.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut palette = Palette::with_capacity(base_colors.len() * 4);
    for (index, color) in base_colors.iter().enumerate() {
        palette.push(PaletteEntry::new(color.as_ref(), VariantKind::Base, index));
    }

    for (index, rgb) in decoded.into_iter().enumerate() {
        for kind in VariantKind::DERIVED {
            let color = encode_rgb(derive(rgb, kind));
            if palette.contains(&color) {
                debug!(source = index, kind = %kind, color = %color, "skipping duplicate variant");
                continue;
            }
            palette.push(PaletteEntry::new(color, kind, index));
        }
    }

    debug!(
        base_count = base_colors.len(),
        palette_len = palette.len(),
        "palette generated"
    );
    Ok(palette)
}

/// Same as [`generate`], returning the entries with their kind and source.
pub fn generate_entries<S: AsRef<str>>(base_colors: &[S]) -> Result<Vec<PaletteEntry>, ColorError> {
    generate(base_colors).map(Palette::into_entries)
}

/// The three derived colors of a single color, without deduplication.
pub fn variants(color: &str) -> Result<[(VariantKind, String); 3], ColorError> {
    decode(color).map(variants_of)
}

/// The three derived colors of an already decoded color.
pub fn variants_of(rgb: Rgb) -> [(VariantKind, String); 3] {
    VariantKind::DERIVED.map(|kind| (kind, encode_rgb(derive(rgb, kind))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_in_fixed_order() {
        let derived = variants("#ff9aa2").unwrap();
        assert_eq!(
            derived,
            [
                (VariantKind::Lighter, "#ffb3b9".to_string()),
                (VariantKind::Darker, "#bf7379".to_string()),
                (VariantKind::Complementary, "#00655d".to_string()),
            ]
        );
    }

    #[test]
    fn variants_of_matches_string_variants() {
        assert_eq!(variants_of(Rgb::new(255, 154, 162)), variants("#ff9aa2").unwrap());
        assert_eq!(variants_of(Rgb::BLACK)[2], (VariantKind::Complementary, "#ffffff".to_string()));
    }

    #[test]
    fn duplicate_variant_is_skipped_without_disturbing_later_ones() {
        let palette = generate(&["#000000"]).unwrap();
        let kinds: Vec<_> = palette.iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, vec![VariantKind::Base, VariantKind::Lighter, VariantKind::Complementary]);
        assert!(palette.iter().all(|entry| entry.source == 0));
    }

    #[test]
    fn variants_do_not_deduplicate() {
        let derived = variants("#ffffff").unwrap();
        assert_eq!(derived[0].1, "#ffffff");
    }

    #[test]
    fn entries_record_kind_and_source() {
        let entries = generate_entries(&["#000000", "#ffffff"]).unwrap();
        let summary: Vec<_> = entries
            .iter()
            .map(|entry| (entry.color.as_str(), entry.kind, entry.source))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("#000000", VariantKind::Base, 0),
                ("#ffffff", VariantKind::Base, 1),
                ("#3f3f3f", VariantKind::Lighter, 0),
                ("#bfbfbf", VariantKind::Darker, 1),
            ]
        );
    }

    #[test]
    fn uppercase_base_is_kept_verbatim_and_not_matched_by_lowercase_variant() {
        let palette = generate(&["#FFFFFF"]).unwrap();
        assert_eq!(palette.colors(), vec!["#FFFFFF", "#ffffff", "#bfbfbf", "#000000"]);
    }

    #[test]
    fn later_malformed_color_discards_earlier_work() {
        let err = generate(&["#ff9aa2", "#12345"]).unwrap_err();
        assert_eq!(err.value(), "#12345");
    }

    #[test]
    fn input_slice_is_untouched() {
        let input = vec!["#abcdef".to_string()];
        let _ = generate(&input).unwrap();
        assert_eq!(input, vec!["#abcdef".to_string()]);
    }
}
