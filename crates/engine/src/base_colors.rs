//! Bounded, editable list of base colors.
//!
//! Front ends keep the user's base colors here. The list holds between
//! [`MIN_BASE_COLORS`] and [`MAX_BASE_COLORS`] entries; the generator itself
//! accepts any number of colors.

use swatch_types::{ColorError, Palette};
use thiserror::Error;

use crate::generator::generate;

pub const MIN_BASE_COLORS: usize = 1;
pub const MAX_BASE_COLORS: usize = 5;

/// Starting color for a fresh list.
pub const DEFAULT_BASE_COLOR: &str = "#ff9aa2";

/// Colors offered by [`BaseColorList::add`], indexed by the current length
/// minus one.
pub const PASTEL_DEFAULTS: [&str; 4] = ["#ffdac1", "#e2f0cb", "#b5ead7", "#c7ceea"];

const FALLBACK_PASTEL: &str = "#c7ceea";

/// Errors raised by edits that would break the list bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseColorListError {
    #[error("at least {} base color is required", MIN_BASE_COLORS)]
    Empty,
    #[error("too many base colors: {count} given, at most {max} allowed")]
    TooMany { count: usize, max: usize },
    #[error("base color list is full ({} colors)", MAX_BASE_COLORS)]
    Full,
    #[error("cannot remove the last base color")]
    AtMinimum,
    #[error("no base color at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseColorList {
    colors: Vec<String>,
}

impl Default for BaseColorList {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseColorList {
    /// A list holding only [`DEFAULT_BASE_COLOR`].
    pub fn new() -> Self {
        Self {
            colors: vec![DEFAULT_BASE_COLOR.to_string()],
        }
    }

    /// Build a list from caller-supplied colors, checking the bounds.
    ///
    /// Colors are not decoded here; malformed values fail at [`Self::generate`].
    pub fn from_colors<I, S>(colors: I) -> Result<Self, BaseColorListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        match colors.len() {
            0 => Err(BaseColorListError::Empty),
            count if count > MAX_BASE_COLORS => Err(BaseColorListError::TooMany {
                count,
                max: MAX_BASE_COLORS,
            }),
            _ => Ok(Self { colors }),
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.colors.len() >= MAX_BASE_COLORS
    }

    pub fn can_remove(&self) -> bool {
        self.colors.len() > MIN_BASE_COLORS
    }

    /// Append the next pastel default and return it.
    pub fn add(&mut self) -> Result<&'static str, BaseColorListError> {
        if self.is_full() {
            return Err(BaseColorListError::Full);
        }
        let next = self
            .colors
            .len()
            .checked_sub(1)
            .and_then(|slot| PASTEL_DEFAULTS.get(slot))
            .copied()
            .unwrap_or(FALLBACK_PASTEL);
        self.colors.push(next.to_string());
        Ok(next)
    }

    /// Remove the color at `index` and return it.
    pub fn remove(&mut self, index: usize) -> Result<String, BaseColorListError> {
        if !self.can_remove() {
            return Err(BaseColorListError::AtMinimum);
        }
        self.check_index(index)?;
        Ok(self.colors.remove(index))
    }

    /// Replace the color at `index` with free text.
    pub fn update(&mut self, index: usize, value: impl Into<String>) -> Result<(), BaseColorListError> {
        self.check_index(index)?;
        self.colors[index] = value.into();
        Ok(())
    }

    /// Generate a fresh palette from the current colors.
    pub fn generate(&self) -> Result<Palette, ColorError> {
        generate(&self.colors)
    }

    fn check_index(&self, index: usize) -> Result<(), BaseColorListError> {
        if index >= self.colors.len() {
            return Err(BaseColorListError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        Ok(())
    }
}
