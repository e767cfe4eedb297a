//! # Swatch Engine
//!
//! Derives a palette from a handful of base colors. Every base color
//! contributes three variants (lighter, darker, complementary); variants that
//! already appear in the palette are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use swatch_engine::generate;
//!
//! let palette = generate(&["#000000"])?;
//! assert_eq!(palette.colors(), vec!["#000000", "#3f3f3f", "#ffffff"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`codec`**: `#rrggbb` strings to and from [`Rgb`] triples
//! - **`shade`**: lighter, darker and complementary channel math
//! - **`generator`**: deduplicated palette assembly
//! - **`base_colors`**: bounded, editable list of base colors for front ends

pub mod base_colors;
pub mod codec;
pub mod generator;
pub mod shade;

pub use base_colors::{BaseColorList, BaseColorListError, MAX_BASE_COLORS, MIN_BASE_COLORS};
pub use codec::{decode, encode, encode_rgb};
pub use generator::{generate, generate_entries, variants, variants_of};
pub use swatch_types::{ColorError, Palette, PaletteEntry, Rgb, VariantKind};
