//! Per-element configuration.
//!
//! # Example
//!
//! ```
//! use zenparallax::{Options, PositionMethod, inset};
//!
//! let options = Options::from_attributes([
//!     ("data-parallax-horizontal", "true"),
//!     ("data-parallax-insets", "10% 0"),
//!     ("class", "hero"),
//! ])
//! .unwrap()
//! .position_method(PositionMethod::ElementPosition);
//!
//! assert!(options.horizontal && options.vertical);
//! assert_eq!(options.insets, inset::resolve("10% 0").unwrap());
//! ```

use whereat::{At, at};

use crate::inset::{ConfigError, InsetSet};
use crate::style::PositionMethod;

/// Prefix of markup attributes read by [`Options::from_attributes`].
pub const ATTRIBUTE_PREFIX: &str = "data-parallax-";

/// Every prefix [`Options::from_attributes`] accepts. `data-parallaxin-` is
/// the jQuery Parallaxin plugin's prefix, so markup written for it keeps working.
pub const ATTRIBUTE_PREFIXES: &[&str] = &[ATTRIBUTE_PREFIX, "data-parallaxin-"];

/// Configuration for one tracked element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Move along the vertical axis.
    pub vertical: bool,
    /// Move along the horizontal axis.
    pub horizontal: bool,
    /// Re-measure the container when the viewport is resized.
    pub responsive: bool,
    /// Position relative to the viewport rather than the container.
    /// `None` detects it from the element's current positioning.
    pub fixed: Option<bool>,
    /// Hide the element while its container is outside the viewport.
    pub hide_on_exit: bool,
    /// Limits on the element's travel within the container.
    pub insets: InsetSet,
    pub position_method: PositionMethod,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            vertical: true,
            horizontal: false,
            responsive: false,
            fixed: None,
            hide_on_exit: true,
            insets: InsetSet::default(),
            position_method: PositionMethod::TranslateAuto,
        }
    }
}

impl Options {
    /// Defaults overridden by `data-parallax-*` attributes.
    ///
    /// Attributes without the prefix and unknown option names are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, At<ConfigError>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        options.apply_attributes(attributes)?;
        Ok(options)
    }

    /// Override fields from `data-parallax-*` (or `data-parallaxin-*`) attributes.
    ///
    /// Option names are matched case-insensitively. Boolean attributes that
    /// are present but empty count as `true`.
    pub fn apply_attributes<'a, I>(&mut self, attributes: I) -> Result<(), At<ConfigError>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            let Some(key) = ATTRIBUTE_PREFIXES
                .iter()
                .find_map(|prefix| strip_prefix_ignore_case(name, prefix))
            else {
                continue;
            };
            self.apply_option(key, value).map_err(|e| at!(e))?;
        }
        Ok(())
    }

    fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let is = |name: &str| key.eq_ignore_ascii_case(name);
        if is("vertical") {
            self.vertical = parse_bool(value)?;
        } else if is("horizontal") {
            self.horizontal = parse_bool(value)?;
        } else if is("responsive") {
            self.responsive = parse_bool(value)?;
        } else if is("fixed") {
            self.fixed = Some(parse_bool(value)?);
        } else if is("hide-on-exit") || is("hideonexit") {
            self.hide_on_exit = parse_bool(value)?;
        } else if is("insets") {
            self.insets = value.parse()?;
        } else if is("position-method") || is("positionmethod") {
            self.position_method = value.parse()?;
        }
        Ok(())
    }

    /// Enable or disable vertical movement.
    pub fn vertical(mut self, enabled: bool) -> Self {
        self.vertical = enabled;
        self
    }

    /// Enable or disable horizontal movement.
    pub fn horizontal(mut self, enabled: bool) -> Self {
        self.horizontal = enabled;
        self
    }

    /// Re-measure on viewport resize.
    pub fn responsive(mut self, enabled: bool) -> Self {
        self.responsive = enabled;
        self
    }

    /// Force viewport-relative (`true`) or container-relative (`false`) positioning.
    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = Some(fixed);
        self
    }

    pub fn hide_on_exit(mut self, enabled: bool) -> Self {
        self.hide_on_exit = enabled;
        self
    }

    /// Set travel limits; see [`crate::inset::resolve`].
    pub fn insets(mut self, insets: InsetSet) -> Self {
        self.insets = insets;
        self
    }

    pub fn position_method(mut self, method: PositionMethod) -> Self {
        self.position_method = method;
        self
    }
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        name.get(prefix.len()..)
    } else {
        None
    }
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    let value = value.trim();
    if value.is_empty() || value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inset::{Inset, resolve};

    #[test]
    fn defaults() {
        let o = Options::default();
        assert!(o.vertical);
        assert!(!o.horizontal);
        assert!(!o.responsive);
        assert_eq!(o.fixed, None);
        assert!(o.hide_on_exit);
        assert_eq!(o.insets, InsetSet::uniform(Inset::ZERO));
        assert_eq!(o.position_method, PositionMethod::TranslateAuto);
    }

    #[test]
    fn attributes_override_defaults() {
        let o = Options::from_attributes([
            ("data-parallax-vertical", "false"),
            ("data-parallax-horizontal", ""),
            ("data-parallax-responsive", "1"),
            ("data-parallax-fixed", "TRUE"),
            ("data-parallax-hide-on-exit", "0"),
            ("data-parallax-insets", "5 10 15 20"),
            ("data-parallax-position-method", "backgroundPosition"),
        ])
        .unwrap();
        assert!(!o.vertical);
        assert!(o.horizontal);
        assert!(o.responsive);
        assert_eq!(o.fixed, Some(true));
        assert!(!o.hide_on_exit);
        assert_eq!(o.insets, resolve("5 10 15 20").unwrap());
        assert_eq!(o.position_method, PositionMethod::BackgroundPosition);
    }

    #[test]
    fn attribute_names_case_insensitive() {
        let o = Options::from_attributes([("DATA-PARALLAX-HideOnExit", "false")]).unwrap();
        assert!(!o.hide_on_exit);
    }

    #[test]
    fn parallaxin_prefix_accepted() {
        let o = Options::from_attributes([
            ("data-parallaxin-horizontal", "true"),
            ("data-parallaxin-insets", "10%"),
            ("data-parallax-responsive", "1"),
        ])
        .unwrap();
        assert!(o.horizontal);
        assert!(o.responsive);
        assert_eq!(o.insets, InsetSet::uniform(Inset::pct(0.1)));

        let err = Options::from_attributes([("data-parallaxin-fixed", "maybe")]).unwrap_err();
        assert_eq!(*err.error(), ConfigError::InvalidBool);
    }

    #[test]
    fn unrelated_attributes_ignored() {
        let o = Options::from_attributes([
            ("id", "hero"),
            ("data-parallax-speed", "fast"),
            ("data-parallax", "x"),
            ("dätä-parallax-vertical", "nope"),
        ])
        .unwrap();
        assert_eq!(o, Options::default());
    }

    #[test]
    fn invalid_values_fail() {
        let err = Options::from_attributes([("data-parallax-insets", "1 2 3")]).unwrap_err();
        assert_eq!(*err.error(), ConfigError::InsetCount { count: 3 });

        let err = Options::from_attributes([("data-parallax-vertical", "yes")]).unwrap_err();
        assert_eq!(*err.error(), ConfigError::InvalidBool);

        let err =
            Options::from_attributes([("data-parallax-position-method", "wobble")]).unwrap_err();
        assert_eq!(*err.error(), ConfigError::UnknownPositionMethod);
    }

    #[test]
    fn apply_onto_existing() {
        let mut o = Options::default().horizontal(true).responsive(true);
        o.apply_attributes([("data-parallax-responsive", "false")])
            .unwrap();
        assert!(o.horizontal);
        assert!(!o.responsive);
    }

    #[test]
    fn builder_setters() {
        let o = Options::default()
            .vertical(false)
            .horizontal(true)
            .fixed(false)
            .hide_on_exit(false)
            .insets(resolve("25%").unwrap())
            .position_method(PositionMethod::Translate);
        assert!(!o.vertical && o.horizontal && !o.hide_on_exit);
        assert_eq!(o.fixed, Some(false));
        assert_eq!(o.insets.top, Inset::pct(0.25));
        assert_eq!(o.position_method, PositionMethod::Translate);
    }
}
