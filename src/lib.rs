//! Scroll-driven parallax positioning.
//!
//! Moves a tracked element inside a bounding container so it appears to
//! travel slower or faster than the page while the container crosses the
//! viewport. The core is pure geometry; DOM measurement and style
//! application sit behind traits.
//!
//! # Modules
//!
//! - [`inset`] - Motion-range insets (CSS shorthand, px or %) and per-axis bounds
//! - [`mapper`] - Per-axis position mapping
//! - [`style`] - Position application strategies and the writer trait
//! - [`options`] - Per-element configuration, including markup attributes
//! - [`controller`] - Measurement caching and two-axis orchestration
//! - [`registry`] - Live instances, event dispatch and per-frame batching (`alloc`)
//! - `svg` - Offset-over-scroll plots for debugging (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

whereat::define_at_crate_info!();

pub mod controller;
pub mod inset;
pub mod mapper;
pub mod options;
#[cfg(feature = "alloc")]
pub mod registry;
pub mod style;
#[cfg(feature = "svg")]
pub mod svg;

pub use controller::{BoxSize, Frame, MeasurementProvider, Offset, Parallax, ScrollSource};
pub use inset::{ConfigError, Inset, InsetSet, InsetSpec, InsetToken, Side, Unit};
pub use mapper::{Axis, AxisGeometry, Bounds, TravelRange, map_position};
pub use options::Options;
#[cfg(feature = "alloc")]
pub use registry::{Event, InstanceId, Registry};
pub use style::{PositionMethod, PositionWriter, StyleDeclaration};
