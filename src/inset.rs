//! Motion-range insets and their resolution into per-axis bounds.
//!
//! Insets follow CSS margin shorthand: one value applies to every side, two
//! values are `vertical horizontal`, four values are `top right bottom left`.
//! Each value is either absolute pixels or a percentage of the container
//! size. No allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenparallax::{Axis, Bounds, inset};
//!
//! let insets = inset::resolve("10 25%").unwrap();
//!
//! // 25% of a 400px wide container is 100px from each horizontal edge.
//! assert_eq!(insets.bounds(Axis::Horizontal, 400.0), Bounds::new(100.0, 300.0));
//! assert_eq!(insets.bounds(Axis::Vertical, 200.0), Bounds::new(10.0, 190.0));
//! ```

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::mapper::{Axis, Bounds};

/// Unit of an [`Inset`] value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Absolute pixels.
    #[default]
    Px,
    /// Fraction of the container size along the inset's axis.
    Pct,
}

/// Distance from one container edge that bounds the element's travel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inset {
    /// Pixels for [`Unit::Px`], a fraction (`0.5` = 50%) for [`Unit::Pct`].
    pub value: f64,
    pub unit: Unit,
}

impl Inset {
    /// Zero pixels.
    pub const ZERO: Self = Self::px(0.0);

    /// Absolute inset in pixels.
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Percentage inset, given as a fraction of the container size.
    ///
    /// `Inset::pct(0.25)` is what `"25%"` parses to.
    pub const fn pct(fraction: f64) -> Self {
        Self {
            value: fraction,
            unit: Unit::Pct,
        }
    }

    /// Parse a single token: `"12"`, `"12.5"`, `"12px"` or `"40%"`.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let token = token.trim();
        if let Some(number) = token.strip_suffix('%') {
            return Ok(Self::pct(parse_number(number)? / 100.0));
        }
        let number = token.strip_suffix("px").unwrap_or(token);
        Ok(Self::px(parse_number(number)?))
    }

    /// Pixel distance from the edge for a container of the given size.
    ///
    /// Percentages are taken of `container_size` exactly once.
    pub fn to_px(self, container_size: f64) -> f64 {
        match self.unit {
            Unit::Px => self.value,
            Unit::Pct => self.value * container_size,
        }
    }

    fn to_px_in<T: Float>(self, container_size: T) -> T {
        let value = T::from(self.value).unwrap_or_else(T::nan);
        match self.unit {
            Unit::Px => value,
            Unit::Pct => value * container_size,
        }
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}", self.value),
            Unit::Pct => write!(f, "{}%", percent_for_display(self.value)),
        }
    }
}

/// Percentage for a stored fraction, with the representation error of the
/// `/ 100` in [`Inset::parse`] removed.
fn percent_for_display(fraction: f64) -> f64 {
    const GRID: f64 = 1e9;
    let percent = fraction * 100.0;
    let snapped = Float::round(percent * GRID) / GRID;
    if Float::abs(snapped - percent) <= Float::abs(percent) * 1e-12 {
        snapped
    } else {
        percent
    }
}

impl FromStr for Inset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_number(s: &str) -> Result<f64, ConfigError> {
    let value: f64 = s
        .trim_end()
        .parse()
        .map_err(|_| ConfigError::InvalidInsetToken)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFiniteInset)
    }
}

/// Container edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// One inset per container side.
///
/// Built once from configuration and never mutated; see [`resolve`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_shorthand::RawInsets", into = "alloc::string::String")
)]
pub struct InsetSet {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl InsetSet {
    /// The same inset on every side.
    pub const fn uniform(inset: Inset) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Expand 1, 2 or 4 values with CSS shorthand rules (top, right, bottom, left).
    pub fn from_insets(values: &[Inset]) -> Result<Self, ConfigError> {
        match values {
            [all] => Ok(Self::uniform(*all)),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(ConfigError::InsetCount {
                count: values.len(),
            }),
        }
    }

    /// Inset for one side.
    pub fn get(&self, side: Side) -> Inset {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Pixel distance of `side`'s inset from its edge.
    pub fn resolve_side(&self, side: Side, container_size: f64) -> f64 {
        self.get(side).to_px(container_size)
    }

    /// Travel bounds along `axis` in the container's local coordinates.
    ///
    /// `min` is the leading (top/left) inset; `max` is the container size
    /// minus the trailing (bottom/right) inset.
    pub fn bounds<T: Float>(&self, axis: Axis, container_size: T) -> Bounds<T> {
        let (leading, trailing) = match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        };
        Bounds::new(
            leading.to_px_in(container_size),
            container_size - trailing.to_px_in(container_size),
        )
    }
}

impl fmt::Display for InsetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for InsetSet {
    type Err = ConfigError;

    /// Whitespace-separated shorthand, e.g. `"10 20% 10 5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = [Inset::ZERO; 4];
        let mut count = 0;
        for token in s.split_whitespace() {
            if count < parsed.len() {
                parsed[count] = Inset::parse(token)?;
            }
            count += 1;
        }
        if count > parsed.len() {
            return Err(ConfigError::InsetCount { count });
        }
        Self::from_insets(&parsed[..count])
    }
}

/// One entry of a list-form inset specification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InsetToken<'a> {
    /// Pixels.
    Number(f64),
    /// `"12"`, `"12px"` or `"40%"`.
    Text(&'a str),
}

impl InsetToken<'_> {
    fn to_inset(self) -> Result<Inset, ConfigError> {
        match self {
            Self::Number(v) if v.is_finite() => Ok(Inset::px(v)),
            Self::Number(_) => Err(ConfigError::NonFiniteInset),
            Self::Text(s) => Inset::parse(s),
        }
    }
}

impl From<f64> for InsetToken<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for InsetToken<'_> {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl<'a> From<&'a str> for InsetToken<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

/// User-facing inset configuration before normalization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InsetSpec<'a> {
    /// Pixels on every side.
    Number(f64),
    /// Whitespace-separated shorthand.
    Text(&'a str),
    /// 1, 2 or 4 tokens.
    List(&'a [InsetToken<'a>]),
}

impl From<f64> for InsetSpec<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for InsetSpec<'_> {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl<'a> From<&'a str> for InsetSpec<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a [InsetToken<'a>]> for InsetSpec<'a> {
    fn from(tokens: &'a [InsetToken<'a>]) -> Self {
        Self::List(tokens)
    }
}

impl<'a, const N: usize> From<&'a [InsetToken<'a>; N]> for InsetSpec<'a> {
    fn from(tokens: &'a [InsetToken<'a>; N]) -> Self {
        Self::List(tokens)
    }
}

/// Normalize an inset specification into four per-side insets.
///
/// Fails with [`ConfigError`] when a list does not hold 1, 2 or 4 entries or
/// a token is neither a number nor a percentage.
pub fn resolve<'a>(spec: impl Into<InsetSpec<'a>>) -> Result<InsetSet, ConfigError> {
    match spec.into() {
        InsetSpec::Number(v) => Ok(InsetSet::uniform(InsetToken::Number(v).to_inset()?)),
        InsetSpec::Text(s) => s.parse(),
        InsetSpec::List(tokens) => {
            if !matches!(tokens.len(), 1 | 2 | 4) {
                return Err(ConfigError::InsetCount {
                    count: tokens.len(),
                });
            }
            let mut parsed = [Inset::ZERO; 4];
            for (slot, token) in parsed.iter_mut().zip(tokens) {
                *slot = token.to_inset()?;
            }
            InsetSet::from_insets(&parsed[..tokens.len()])
        }
    }
}

/// Configuration error, raised before any positioning happens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Inset shorthand must have 1, 2 or 4 values.
    InsetCount { count: usize },
    /// Inset token is not a number or percentage.
    InvalidInsetToken,
    /// Inset value is NaN or infinite.
    NonFiniteInset,
    /// Position method name not recognized.
    UnknownPositionMethod,
    /// Boolean option value not recognized.
    InvalidBool,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsetCount { count } => {
                write!(f, "expected 1, 2 or 4 inset values, got {count}")
            }
            Self::InvalidInsetToken => f.write_str("inset must be a number or percentage"),
            Self::NonFiniteInset => f.write_str("inset must be finite"),
            Self::UnknownPositionMethod => f.write_str("unknown position method"),
            Self::InvalidBool => f.write_str("expected true or false"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(feature = "serde")]
mod serde_shorthand {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::{ConfigError, InsetSet, InsetSpec, InsetToken};

    /// Any shape [`super::resolve`] accepts.
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawInsets {
        Number(f64),
        Text(String),
        List(Vec<RawToken>),
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawToken {
        Number(f64),
        Text(String),
    }

    impl TryFrom<RawInsets> for InsetSet {
        type Error = ConfigError;

        fn try_from(raw: RawInsets) -> Result<Self, Self::Error> {
            match raw {
                RawInsets::Number(v) => super::resolve(InsetSpec::Number(v)),
                RawInsets::Text(s) => super::resolve(s.as_str()),
                RawInsets::List(raw_tokens) => {
                    let tokens: Vec<InsetToken<'_>> = raw_tokens
                        .iter()
                        .map(|t| match t {
                            RawToken::Number(v) => InsetToken::Number(*v),
                            RawToken::Text(s) => InsetToken::Text(s.as_str()),
                        })
                        .collect();
                    super::resolve(tokens.as_slice())
                }
            }
        }
    }

    impl From<InsetSet> for String {
        fn from(insets: InsetSet) -> Self {
            insets.to_string()
        }
    }
}
