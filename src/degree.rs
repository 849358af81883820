//! Heading degrees and the bounds a heading may resolve into.

use crate::diagnostics::ConfigurationWarning;
use crate::error::{Error, Result};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Semantic heading level, always between 1 (most prominent) and 6.
pub struct HeadingDegree(u8);

impl HeadingDegree {
    /// Most prominent heading, `<h1>`.
    pub const MIN: Self = Self(1);
    /// Least prominent heading, `<h6>`.
    pub const MAX: Self = Self(6);

    /// Build a degree, rejecting values outside 1 to 6.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] when `value` is out of range.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidDegree(i64::from(value)))
        }
    }

    #[must_use]
    /// Numeric value of the degree.
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    /// Element tag name for this degree.
    pub const fn tag(self) -> &'static str {
        match self.0 {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }

    #[must_use]
    /// Parse a tag name such as `h3` (ASCII case-insensitive) into its degree.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.as_bytes() {
            [b'h' | b'H', digit @ b'1'..=b'6'] => Some(Self(digit - b'0')),
            _ => None,
        }
    }

    /// Clamp an accumulated counter back into 1 to 6.
    pub(crate) fn saturating(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }
}

impl Default for HeadingDegree {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for HeadingDegree {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidDegree(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for HeadingDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The `[min, max]` range one heading may resolve into.
///
/// `min <= max` is expected but not enforced: inverted bounds are reported through
/// [`ResolutionBounds::check`] and otherwise used as given.
pub struct ResolutionBounds {
    min: HeadingDegree,
    max: HeadingDegree,
}

impl ResolutionBounds {
    #[must_use]
    /// Pair two degrees as bounds.
    pub const fn new(min: HeadingDegree, max: HeadingDegree) -> Self {
        Self { min, max }
    }

    /// Build bounds from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if either number is outside 1 to 6.
    pub fn from_values(min: u8, max: u8) -> Result<Self> {
        Ok(Self::new(HeadingDegree::new(min)?, HeadingDegree::new(max)?))
    }

    #[must_use]
    /// Lower bound, also the starting degree.
    pub const fn min(self) -> HeadingDegree {
        self.min
    }

    #[must_use]
    /// Upper bound at which the walk stops.
    pub const fn max(self) -> HeadingDegree {
        self.max
    }

    #[must_use]
    /// The warning to raise for these bounds, if they are inverted.
    pub fn check(self) -> Option<ConfigurationWarning> {
        (self.max < self.min).then_some(ConfigurationWarning {
            min: self.min,
            max: self.max,
        })
    }
}

impl Default for ResolutionBounds {
    fn default() -> Self {
        Self::new(HeadingDegree::MIN, HeadingDegree::MAX)
    }
}
