//! Palette data model shared between the engine and its front ends.

use std::fmt;

use serde::Serialize;

/// Where a palette entry came from.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// A caller-supplied base color, kept verbatim.
    Base,
    /// Each channel moved 25% of the way toward 255.
    Lighter,
    /// Each channel scaled to 75%.
    Darker,
    /// Each channel inverted.
    Complementary,
}

impl VariantKind {
    /// Derived kinds in the order they are appended for every base color.
    pub const DERIVED: [VariantKind; 3] = [Self::Lighter, Self::Darker, Self::Complementary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Lighter => "lighter",
            Self::Darker => "darker",
            Self::Complementary => "complementary",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single slot in a generated palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// The color string. Base entries keep the caller's spelling; derived
    /// entries are lowercase `#rrggbb`.
    pub color: String,
    /// How the entry was produced.
    pub kind: VariantKind,
    /// Index of the base color this entry belongs to.
    pub source: usize,
}

impl PaletteEntry {
    pub fn new(color: impl Into<String>, kind: VariantKind, source: usize) -> Self {
        Self {
            color: color.into(),
            kind,
            source,
        }
    }
}

/// An ordered palette: base colors first, then derived variants.
///
/// Serializes as the list of entries; use [`Palette::colors`] for the plain
/// color view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry unconditionally.
    pub fn push(&mut self, entry: PaletteEntry) {
        self.entries.push(entry);
    }

    /// Byte-exact membership test used for deduplication.
    pub fn contains(&self, color: &str) -> bool {
        self.entries.iter().any(|entry| entry.color == color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// The palette as plain color strings, in order.
    pub fn colors(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.color.as_str()).collect()
    }

    pub fn into_entries(self) -> Vec<PaletteEntry> {
        self.entries
    }
}
