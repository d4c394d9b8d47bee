//! Per-axis parallax position mapping.
//!
//! Maps the scroll position onto an element offset inside its container so
//! the element appears to travel at a different speed than the page. Works
//! on one axis at a time with no state between calls, generic over
//! `f32`/`f64`.
//!
//! # Example
//!
//! ```
//! use zenparallax::{AxisGeometry, Bounds, map_position};
//!
//! let geometry = AxisGeometry {
//!     container_pos: 500.0,
//!     container_size: 300.0,
//!     element_size: 50.0,
//!     scroll_pos: 500.0,
//!     viewport_size: 800.0,
//! };
//! let bounds = Bounds::new(0.0, 300.0);
//!
//! // Container top aligned with the viewport top: element sits at the leading bound.
//! assert_eq!(map_position(bounds, &geometry, false), Some(0.0));
//! // Scrolled back to the top of the page: element sits at the trailing bound.
//! assert_eq!(map_position(bounds, &geometry.with_scroll(0.0), false), Some(250.0));
//! // Past the container: nothing to position.
//! assert_eq!(map_position(bounds, &geometry.with_scroll(900.0), false), None);
//! ```

use num_traits::Float;

/// Scroll axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-right.
    Horizontal,
    /// Top-bottom.
    Vertical,
}

/// Pixel range along one axis that the element's edges may occupy,
/// in the container's local coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds<T = f64> {
    /// Leading (top/left) limit.
    pub min: T,
    /// Trailing (bottom/right) limit.
    pub max: T,
}

impl<T: Float> Bounds<T> {
    /// Create bounds from explicit limits.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Distance between the limits.
    pub fn extent(self) -> T {
        self.max - self.min
    }
}

/// Measurements for one axis, captured in a single pass.
///
/// All values share the scrolling surface's coordinate frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisGeometry<T = f64> {
    /// Container's leading edge.
    pub container_pos: T,
    pub container_size: T,
    /// Tracked element's size along the axis.
    pub element_size: T,
    /// Current scroll offset of the scrolling surface.
    pub scroll_pos: T,
    pub viewport_size: T,
}

impl<T: Float> AxisGeometry<T> {
    /// Same geometry at a different scroll offset.
    pub fn with_scroll(self, scroll_pos: T) -> Self {
        Self { scroll_pos, ..self }
    }

    /// Whether any part of the container intersects the viewport.
    ///
    /// Touching edges count as visible.
    pub fn is_container_visible(&self) -> bool {
        let above = self.container_pos + self.container_size < self.scroll_pos;
        let below = self.container_pos > self.scroll_pos + self.viewport_size;
        !above && !below
    }

    /// Whether the element fits within the viewport.
    pub fn element_fits(&self) -> bool {
        self.element_size <= self.viewport_size
    }
}

/// Linear correspondence between a scroll range and an offset range.
///
/// `offset_start` is produced at `scroll_start`, `offset_end` at `scroll_end`;
/// scroll positions outside the range extrapolate along the same line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TravelRange<T = f64> {
    pub scroll_start: T,
    pub scroll_end: T,
    pub offset_start: T,
    pub offset_end: T,
}

impl<T: Float> TravelRange<T> {
    /// Select the travel range for `geometry`.
    ///
    /// An element that fits the viewport is pinned to the trailing bound
    /// when the container's trailing edge meets the viewport end, and to the
    /// leading bound when the container's leading edge meets the viewport
    /// start. A larger element instead traverses its own excess length while
    /// the container crosses the whole viewport.
    pub fn new(bounds: Bounds<T>, geometry: &AxisGeometry<T>) -> Self {
        let g = geometry;
        if g.element_fits() {
            Self {
                scroll_start: g.container_pos + g.container_size - g.viewport_size,
                scroll_end: g.container_pos,
                offset_start: bounds.max - g.element_size,
                offset_end: bounds.min,
            }
        } else {
            Self {
                scroll_start: g.container_pos - g.viewport_size,
                scroll_end: g.container_pos + g.container_size,
                offset_start: bounds.min - g.element_size,
                offset_end: bounds.max,
            }
        }
    }

    /// Fraction of the way from `scroll_start` to `scroll_end`. Not clamped.
    ///
    /// Non-finite when the scroll range is empty.
    pub fn progress(&self, scroll_pos: T) -> T {
        (scroll_pos - self.scroll_start) / (self.scroll_end - self.scroll_start)
    }

    /// Interpolated offset at `scroll_pos`.
    pub fn offset_at(&self, scroll_pos: T) -> T {
        let t = self.progress(scroll_pos);
        self.offset_start + t * (self.offset_end - self.offset_start)
    }
}

/// Compute the element's offset along one axis.
///
/// Returns `None` when the container lies entirely outside the viewport on
/// this axis, or when the travel range collapses to a single scroll position
/// and the result is non-finite. That happens for an element that fits the
/// viewport inside a container of exactly the viewport's size, or for a
/// larger element when container and viewport sizes sum to zero. With `fixed`, the offset is re-expressed
/// relative to the viewport instead of the container.
pub fn map_position<T: Float>(
    bounds: Bounds<T>,
    geometry: &AxisGeometry<T>,
    fixed: bool,
) -> Option<T> {
    if !geometry.is_container_visible() {
        return None;
    }

    let mut pos = TravelRange::new(bounds, geometry).offset_at(geometry.scroll_pos);
    if fixed {
        pos = pos + (geometry.container_pos - geometry.scroll_pos);
    }

    pos.is_finite().then_some(pos)
}
