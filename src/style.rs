//! Position application strategies and the writer seam.
//!
//! The mapper produces bare offsets; a [`PositionMethod`] turns them into a
//! [`StyleDeclaration`] and a [`PositionWriter`] applies that to the element.

use core::fmt;
use core::str::FromStr;

use crate::inset::ConfigError;

/// How a computed offset is applied to the tracked element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionMethod {
    /// `left` / `top` properties.
    #[cfg_attr(feature = "serde", serde(rename = "elementPosition"))]
    ElementPosition,
    /// 2-D `translate()` transform.
    #[cfg_attr(feature = "serde", serde(rename = "cssTranslate"))]
    Translate,
    /// `translate3d()` transform.
    #[cfg_attr(feature = "serde", serde(rename = "cssTranslate3d"))]
    Translate3d,
    /// `translate3d()` where the writer supports it, `translate()` otherwise.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cssTranslateAuto"))]
    TranslateAuto,
    /// `background-position`.
    #[cfg_attr(feature = "serde", serde(rename = "backgroundPosition"))]
    BackgroundPosition,
}

impl PositionMethod {
    /// Settle [`TranslateAuto`](Self::TranslateAuto) against writer capabilities.
    ///
    /// Done once at setup; every other method is returned unchanged.
    pub fn resolve(self, supports_translate_3d: bool) -> Self {
        match self {
            Self::TranslateAuto if supports_translate_3d => Self::Translate3d,
            Self::TranslateAuto => Self::Translate,
            other => other,
        }
    }

    /// Name used in markup attributes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElementPosition => "elementPosition",
            Self::Translate => "cssTranslate",
            Self::Translate3d => "cssTranslate3d",
            Self::TranslateAuto => "cssTranslateAuto",
            Self::BackgroundPosition => "backgroundPosition",
        }
    }

    /// Build the declaration for a pair of per-axis offsets.
    ///
    /// `None` on an axis means "leave that axis alone". Element positioning
    /// honors that per property; transforms and background position write
    /// both axes at once, so a missing axis becomes `0`. Returns `None` when
    /// both axes are missing.
    ///
    /// An unresolved `TranslateAuto` is treated as `Translate`.
    pub fn declaration(self, left: Option<f64>, top: Option<f64>) -> Option<StyleDeclaration> {
        if left.is_none() && top.is_none() {
            return None;
        }
        let (x, y) = (left.unwrap_or(0.0), top.unwrap_or(0.0));
        Some(match self {
            Self::ElementPosition => StyleDeclaration::Offset { left, top },
            Self::Translate | Self::TranslateAuto => StyleDeclaration::Translate { x, y },
            Self::Translate3d => StyleDeclaration::Translate3d { x, y },
            Self::BackgroundPosition => StyleDeclaration::BackgroundPosition { x, y },
        })
    }
}

impl fmt::Display for PositionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PositionMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: &[(&str, &str, PositionMethod)] = &[
            ("elementPosition", "element-position", PositionMethod::ElementPosition),
            ("cssTranslate", "css-translate", PositionMethod::Translate),
            ("cssTranslate3d", "css-translate-3d", PositionMethod::Translate3d),
            ("cssTranslateAuto", "css-translate-auto", PositionMethod::TranslateAuto),
            ("backgroundPosition", "background-position", PositionMethod::BackgroundPosition),
        ];
        let s = s.trim();
        NAMES
            .iter()
            .find(|(camel, kebab, _)| s.eq_ignore_ascii_case(camel) || s.eq_ignore_ascii_case(kebab))
            .map(|&(_, _, method)| method)
            .ok_or(ConfigError::UnknownPositionMethod)
    }
}

/// Style change produced for one update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleDeclaration {
    /// `left` / `top`; `None` leaves the property untouched.
    Offset {
        left: Option<f64>,
        top: Option<f64>,
    },
    Translate { x: f64, y: f64 },
    Translate3d { x: f64, y: f64 },
    BackgroundPosition { x: f64, y: f64 },
}

impl fmt::Display for StyleDeclaration {
    /// CSS declaration text, e.g. `transform: translate(10px, 20px)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Offset { left, top } => {
                let mut sep = "";
                if let Some(left) = left {
                    write!(f, "left: {left}px")?;
                    sep = "; ";
                }
                if let Some(top) = top {
                    write!(f, "{sep}top: {top}px")?;
                }
                Ok(())
            }
            Self::Translate { x, y } => write!(f, "transform: translate({x}px, {y}px)"),
            Self::Translate3d { x, y } => write!(f, "transform: translate3d({x}px, {y}px, 0)"),
            Self::BackgroundPosition { x, y } => write!(f, "background-position: {x}px {y}px"),
        }
    }
}

/// Applies computed styles to elements identified by `E`.
pub trait PositionWriter<E> {
    /// Apply a position declaration.
    fn apply(&mut self, element: &E, declaration: StyleDeclaration);

    /// Show or hide the element.
    fn set_visible(&mut self, element: &E, visible: bool);

    /// Switch the element to viewport-relative positioning.
    fn make_fixed(&mut self, _element: &E) {}

    /// Remove every style this crate applied to the element.
    fn clear(&mut self, element: &E);

    /// Whether 3-D transforms are available.
    fn supports_translate_3d(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_once() {
        assert_eq!(PositionMethod::TranslateAuto.resolve(true), PositionMethod::Translate3d);
        assert_eq!(PositionMethod::TranslateAuto.resolve(false), PositionMethod::Translate);
        assert_eq!(
            PositionMethod::BackgroundPosition.resolve(true),
            PositionMethod::BackgroundPosition
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("cssTranslate3d".parse(), Ok(PositionMethod::Translate3d));
        assert_eq!("background-position".parse(), Ok(PositionMethod::BackgroundPosition));
        assert_eq!("ELEMENTPOSITION".parse(), Ok(PositionMethod::ElementPosition));
        assert_eq!(
            "slide".parse::<PositionMethod>(),
            Err(ConfigError::UnknownPositionMethod)
        );
        for m in [
            PositionMethod::ElementPosition,
            PositionMethod::Translate,
            PositionMethod::Translate3d,
            PositionMethod::TranslateAuto,
            PositionMethod::BackgroundPosition,
        ] {
            assert_eq!(m.name().parse(), Ok(m));
        }
    }

    #[test]
    fn nothing_to_write() {
        assert_eq!(PositionMethod::Translate.declaration(None, None), None);
        assert_eq!(PositionMethod::ElementPosition.declaration(None, None), None);
    }

    #[test]
    fn element_position_keeps_missing_axis() {
        let d = PositionMethod::ElementPosition.declaration(None, Some(12.5)).unwrap();
        assert_eq!(
            d,
            StyleDeclaration::Offset {
                left: None,
                top: Some(12.5)
            }
        );
        assert_eq!(d.to_string(), "top: 12.5px");
    }

    #[test]
    fn transforms_zero_missing_axis() {
        let d = PositionMethod::Translate3d.declaration(None, Some(-4.0)).unwrap();
        assert_eq!(d, StyleDeclaration::Translate3d { x: 0.0, y: -4.0 });
        assert_eq!(d.to_string(), "transform: translate3d(0px, -4px, 0)");
    }

    #[test]
    fn css_text() {
        let d = PositionMethod::Translate.declaration(Some(10.0), Some(20.0)).unwrap();
        assert_eq!(d.to_string(), "transform: translate(10px, 20px)");
        let d = PositionMethod::BackgroundPosition
            .declaration(Some(3.0), None)
            .unwrap();
        assert_eq!(d.to_string(), "background-position: 3px 0px");
        let d = PositionMethod::ElementPosition
            .declaration(Some(1.0), Some(2.0))
            .unwrap();
        assert_eq!(d.to_string(), "left: 1px; top: 2px");
    }
}
