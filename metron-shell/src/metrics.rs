//! Device metrics providers.
use crate::{config::MetricsConfig, geometry::Size};
use std::cell::Cell;

/// Physical characteristics of a rendering surface.
///
/// Implementors report live values: callers never cache them, so a change of DPI (e.g. when a
/// window moves to another monitor) is observed by the next query.
pub trait DeviceMetrics {
    /// Whether the other methods currently return meaningful values.
    ///
    /// A surface that is not attached to a device yet (no window, no printer) has no DPI.
    fn metrics_available(&self) -> bool;

    /// Horizontal resolution in dots per inch.
    fn horizontal_dpi(&self) -> f64;

    /// Vertical resolution in dots per inch.
    fn vertical_dpi(&self) -> f64;

    /// Size of one em, in inches (`em_size * dpi` gives pixels).
    fn em_size(&self) -> f64;

    /// Size of the surface in device pixels.
    fn extents(&self) -> Size;
}

impl<'a, M: DeviceMetrics + ?Sized> DeviceMetrics for &'a M {
    fn metrics_available(&self) -> bool {
        (**self).metrics_available()
    }

    fn horizontal_dpi(&self) -> f64 {
        (**self).horizontal_dpi()
    }

    fn vertical_dpi(&self) -> f64 {
        (**self).vertical_dpi()
    }

    fn em_size(&self) -> f64 {
        (**self).em_size()
    }

    fn extents(&self) -> Size {
        (**self).extents()
    }
}

/// Metrics with values set by the application.
///
/// All fields can be changed through a shared reference, so a `FixedMetrics` borrowed by a units
/// context can still be updated (e.g. to simulate a DPI change or a surface being detached).
#[derive(Debug)]
pub struct FixedMetrics {
    available: Cell<bool>,
    horizontal_dpi: Cell<f64>,
    vertical_dpi: Cell<f64>,
    em_size: Cell<f64>,
    extents: Cell<Size>,
}

impl FixedMetrics {
    /// Creates available metrics with the same DPI on both axes.
    pub fn new(dpi: f64, em_size: f64, extents: Size) -> FixedMetrics {
        FixedMetrics::with_dpi(dpi, dpi, em_size, extents)
    }

    pub fn with_dpi(horizontal_dpi: f64, vertical_dpi: f64, em_size: f64, extents: Size) -> FixedMetrics {
        if horizontal_dpi <= 0.0 || vertical_dpi <= 0.0 {
            tracing::warn!(horizontal_dpi, vertical_dpi, "non-positive DPI");
        }
        FixedMetrics {
            available: Cell::new(true),
            horizontal_dpi: Cell::new(horizontal_dpi),
            vertical_dpi: Cell::new(vertical_dpi),
            em_size: Cell::new(em_size),
            extents: Cell::new(extents),
        }
    }

    /// Metrics that report themselves as unavailable until `set_available(true)` is called.
    pub fn unavailable() -> FixedMetrics {
        let metrics = FixedMetrics::from_config(&MetricsConfig::default());
        metrics.available.set(false);
        metrics
    }

    pub fn from_config(config: &MetricsConfig) -> FixedMetrics {
        FixedMetrics::with_dpi(
            config.horizontal_dpi,
            config.vertical_dpi,
            config.em_size,
            config.extents,
        )
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn set_dpi(&self, horizontal_dpi: f64, vertical_dpi: f64) {
        tracing::trace!(horizontal_dpi, vertical_dpi, "dpi changed");
        self.horizontal_dpi.set(horizontal_dpi);
        self.vertical_dpi.set(vertical_dpi);
    }

    pub fn set_em_size(&self, em_size: f64) {
        self.em_size.set(em_size);
    }

    pub fn set_extents(&self, extents: Size) {
        self.extents.set(extents);
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        FixedMetrics::from_config(&MetricsConfig::default())
    }
}

impl DeviceMetrics for FixedMetrics {
    fn metrics_available(&self) -> bool {
        self.available.get()
    }

    fn horizontal_dpi(&self) -> f64 {
        self.horizontal_dpi.get()
    }

    fn vertical_dpi(&self) -> f64 {
        self.vertical_dpi.get()
    }

    fn em_size(&self) -> f64 {
        self.em_size.get()
    }

    fn extents(&self) -> Size {
        self.extents.get()
    }
}
