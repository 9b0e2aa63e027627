//! Device-independent units for metron.
//!
//! Lengths in a user interface are often specified in physical or typographic units (millimetres,
//! points, ems...) but laid out and drawn in device pixels. A [`UnitsContext`] holds the current
//! units for a surface and borrows its [`DeviceMetrics`]; a [`UnitsConverter`] opens a scope on it
//! in which values can be converted to and from device pixels.

mod context;
mod converter;
mod error;
mod units;
pub mod widget;

pub use context::UnitsContext;
pub use converter::{DeviceConvertible, UnitsConverter};
pub use error::{Error, Result};
pub use units::Units;

pub use metron_shell::config::MetricsConfig;
pub use metron_shell::metrics::{DeviceMetrics, FixedMetrics};
pub use metron_shell::window::WindowMetrics;

pub type Dimension = metron_shell::geometry::Dimension;
pub type Size = metron_shell::geometry::Size;
pub type Point = metron_shell::geometry::Point;
pub type Vector = metron_shell::geometry::Vector;
pub type Rect = metron_shell::geometry::Rect;
pub type Margins = metron_shell::geometry::Margins;

pub use metron_shell::geometry::margins;
