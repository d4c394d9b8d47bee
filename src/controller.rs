//! Per-element orchestration: measurement caching, per-axis mapping,
//! visibility, and handing results to the writer.
//!
//! The controller owns every cache; the mapper underneath stays pure.
//! Element handles are opaque (`E`); a [`MeasurementProvider`] reads
//! geometry for them and a [`PositionWriter`] applies the results.

use tracing::{debug, trace};

use crate::inset::InsetSet;
use crate::mapper::{Axis, AxisGeometry, Bounds, map_position};
use crate::options::Options;
use crate::style::{PositionMethod, PositionWriter};

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Left/top pair in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    /// Create a new offset.
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Surface whose scrolling drives an element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollSource<E> {
    /// The document viewport.
    #[default]
    Viewport,
    /// A scrollable (overflowing) element.
    Element(E),
}

/// Reads layout geometry. All values are pixels in document coordinates.
pub trait MeasurementProvider<E> {
    /// Outer box size of an element.
    ///
    /// Hidden elements should report the size they would have when shown.
    fn element_box(&self, element: &E) -> BoxSize;

    /// Position of an element relative to the document.
    fn offset_from_document(&self, element: &E) -> Offset;

    /// Current scroll offset of a scroll source.
    fn scroll_offset(&self, source: &ScrollSource<E>) -> Offset;

    /// Viewport size.
    fn viewport_size(&self) -> BoxSize;

    /// Whether the element is currently viewport-relative (`position: fixed`).
    fn is_fixed(&self, _element: &E) -> bool {
        false
    }
}

/// Outcome of one update.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Horizontal offset, `None` when not positioned on that axis.
    pub left: Option<f64>,
    /// Vertical offset, `None` when not positioned on that axis.
    pub top: Option<f64>,
    /// Whether the element is shown after this update.
    pub visible: bool,
}

impl Frame {
    /// Whether neither axis produced an offset.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }
}

/// Bounds for both axes, derived from one container measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
struct AxisBounds {
    horizontal: Bounds,
    vertical: Bounds,
}

impl AxisBounds {
    fn resolve(insets: &InsetSet, container: BoxSize) -> Self {
        Self {
            horizontal: insets.bounds(Axis::Horizontal, container.width),
            vertical: insets.bounds(Axis::Vertical, container.height),
        }
    }
}

/// A tracked element and its cached measurements.
#[derive(Clone, Debug)]
pub struct Parallax<E> {
    element: E,
    container: E,
    scroll_source: ScrollSource<E>,
    options: Options,
    fixed: bool,
    method: PositionMethod,
    container_size: Option<(BoxSize, AxisBounds)>,
    element_size: Option<BoxSize>,
    viewport: Option<BoxSize>,
    scroll: Option<Offset>,
    hidden: bool,
}

impl<E> Parallax<E> {
    /// Set up an element for tracking.
    ///
    /// Decides fixed positioning (switching the element to it when forced by
    /// `options.fixed`) and settles the position method. No geometry is read
    /// beyond the element's positioning; call [`update`](Self::update) or
    /// register with a [`Registry`](crate::Registry) to place it.
    pub fn new<M, W>(
        element: E,
        container: E,
        scroll_source: ScrollSource<E>,
        options: Options,
        provider: &M,
        writer: &mut W,
    ) -> Self
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let currently_fixed = provider.is_fixed(&element);
        let fixed = options.fixed.unwrap_or(currently_fixed);
        if fixed && !currently_fixed {
            writer.make_fixed(&element);
        }
        let method = options
            .position_method
            .resolve(writer.supports_translate_3d());
        debug!(?method, fixed, "parallax element created");

        Self {
            element,
            container,
            scroll_source,
            options,
            fixed,
            method,
            container_size: None,
            element_size: None,
            viewport: None,
            scroll: None,
            hidden: false,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn scroll_source(&self) -> &ScrollSource<E> {
        &self.scroll_source
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether offsets are viewport-relative.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Position method after [`PositionMethod::resolve`].
    pub fn position_method(&self) -> PositionMethod {
        self.method
    }

    /// Whether the last update hid the element.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Drop every cached measurement; the next update re-measures.
    pub fn reset(&mut self) {
        self.container_size = None;
        self.element_size = None;
        self.viewport = None;
        self.scroll = None;
    }

    /// Recompute and apply the element's position.
    ///
    /// With `recalculate`, container size, bounds, element size and viewport
    /// size are re-measured; otherwise cached values are reused when present.
    /// The container position is measured on every call.
    pub fn update<M, W>(&mut self, provider: &M, writer: &mut W, recalculate: bool) -> Frame
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let (container_size, bounds) = match self.container_size {
            Some(cached) if !recalculate => cached,
            _ => {
                let size = provider.element_box(&self.container);
                let bounds = AxisBounds::resolve(&self.options.insets, size);
                debug!(?size, ?bounds, "container measured");
                self.container_size = Some((size, bounds));
                (size, bounds)
            }
        };
        let element_size = match self.element_size {
            Some(cached) if !recalculate => cached,
            _ => {
                let size = provider.element_box(&self.element);
                self.element_size = Some(size);
                size
            }
        };
        let viewport = match self.viewport {
            Some(cached) if !recalculate => cached,
            _ => {
                let size = provider.viewport_size();
                self.viewport = Some(size);
                size
            }
        };
        let scroll = match self.scroll {
            Some(cached) => cached,
            None => self.read_scroll(provider),
        };
        let container_pos = self.container_position(provider);

        let horizontal = self.options.horizontal.then(|| AxisGeometry {
            container_pos: container_pos.left,
            container_size: container_size.width,
            element_size: element_size.width,
            scroll_pos: scroll.left,
            viewport_size: viewport.width,
        });
        let vertical = self.options.vertical.then(|| AxisGeometry {
            container_pos: container_pos.top,
            container_size: container_size.height,
            element_size: element_size.height,
            scroll_pos: scroll.top,
            viewport_size: viewport.height,
        });
        let left = horizontal.and_then(|g| map_position(bounds.horizontal, &g, self.fixed));
        let top = vertical.and_then(|g| map_position(bounds.vertical, &g, self.fixed));

        if self.options.hide_on_exit {
            // A visible axis with a collapsed travel range skips the write but
            // keeps the element shown.
            let out_of_view = !horizontal
                .iter()
                .chain(vertical.iter())
                .any(AxisGeometry::is_container_visible);
            if out_of_view != self.hidden {
                trace!(hidden = out_of_view, "visibility changed");
                writer.set_visible(&self.element, !out_of_view);
                self.hidden = out_of_view;
            }
        }
        if let Some(declaration) = self.method.declaration(left, top) {
            writer.apply(&self.element, declaration);
        }

        trace!(?left, ?top, "parallax frame");
        Frame {
            left,
            top,
            visible: !self.hidden,
        }
    }

    /// React to a scroll of this element's scroll source.
    ///
    /// Updates only when the scroll offset moved along an enabled axis.
    pub fn on_scroll<M, W>(&mut self, provider: &M, writer: &mut W) -> Option<Frame>
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        let previous = self.scroll;
        let current = self.read_scroll(provider);
        let top_changed = previous.is_none_or(|p| p.top != current.top);
        let left_changed = previous.is_none_or(|p| p.left != current.left);

        if (top_changed && self.options.vertical) || (left_changed && self.options.horizontal) {
            Some(self.update(provider, writer, false))
        } else {
            None
        }
    }

    /// React to a viewport resize.
    ///
    /// The viewport size is always refreshed; responsive elements are
    /// re-measured and repositioned.
    pub fn on_resize<M, W>(&mut self, provider: &M, writer: &mut W) -> Option<Frame>
    where
        M: MeasurementProvider<E>,
        W: PositionWriter<E>,
    {
        if self.options.responsive {
            Some(self.update(provider, writer, true))
        } else {
            self.viewport = Some(provider.viewport_size());
            None
        }
    }

    /// Stop tracking and remove applied styles.
    pub fn destroy<W: PositionWriter<E>>(self, writer: &mut W) -> E {
        writer.clear(&self.element);
        debug!("parallax element destroyed");
        self.element
    }

    fn read_scroll<M: MeasurementProvider<E>>(&mut self, provider: &M) -> Offset {
        let scroll = provider.scroll_offset(&self.scroll_source);
        self.scroll = Some(scroll);
        scroll
    }

    /// Container position relative to the scroll source's content.
    ///
    /// For an element scroll source the document offset is shifted by that
    /// element's scroll and un-shifted by the viewport's.
    fn container_position<M: MeasurementProvider<E>>(&self, provider: &M) -> Offset {
        let document = provider.offset_from_document(&self.container);
        match &self.scroll_source {
            ScrollSource::Viewport => document,
            ScrollSource::Element(_) => {
                let surface = provider.scroll_offset(&self.scroll_source);
                let viewport = provider.scroll_offset(&ScrollSource::Viewport);
                Offset {
                    left: document.left + surface.left - viewport.left,
                    top: document.top + surface.top - viewport.top,
                }
            }
        }
    }
}
