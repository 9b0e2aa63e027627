//! Metrics of a platform window.
use crate::{config::DEFAULT_EM_SIZE, geometry::Size, metrics::DeviceMetrics};
use std::cell::Cell;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

/// DPI of a window with a scale factor of 1.
const BASE_DPI: f64 = 96.0;

/// Device metrics tracking a winit window.
///
/// The metrics are unavailable until the window is attached. Feed the window events to
/// [`WindowMetrics::handle_event`] so that resizes and scale factor changes are picked up; units
/// contexts borrowing these metrics see the new values immediately.
pub struct WindowMetrics {
    attached: Cell<bool>,
    scale_factor: Cell<f64>,
    physical_size: Cell<PhysicalSize<u32>>,
    em_size: Cell<f64>,
}

impl WindowMetrics {
    /// Creates metrics for a window that doesn't exist yet.
    pub fn detached() -> WindowMetrics {
        WindowMetrics {
            attached: Cell::new(false),
            scale_factor: Cell::new(1.0),
            physical_size: Cell::new(PhysicalSize::new(0, 0)),
            em_size: Cell::new(DEFAULT_EM_SIZE),
        }
    }

    /// Creates attached metrics from a scale factor and a size in physical pixels.
    pub fn new(scale_factor: f64, physical_size: PhysicalSize<u32>) -> WindowMetrics {
        let metrics = WindowMetrics::detached();
        metrics.attach(scale_factor, physical_size);
        metrics
    }

    pub fn from_window(window: &Window) -> WindowMetrics {
        WindowMetrics::new(window.scale_factor(), window.inner_size())
    }

    pub fn attach(&self, scale_factor: f64, physical_size: PhysicalSize<u32>) {
        tracing::trace!(scale_factor, ?physical_size, "window metrics attached");
        self.scale_factor.set(scale_factor);
        self.physical_size.set(physical_size);
        self.attached.set(true);
    }

    pub fn detach(&self) {
        tracing::trace!("window metrics detached");
        self.attached.set(false);
    }

    pub fn set_em_size(&self, em_size: f64) {
        self.em_size.set(em_size);
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor.get()
    }

    /// Updates the metrics from a window event.
    ///
    /// Returns whether the event affected the metrics.
    pub fn handle_event(&self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.physical_size.set(*size);
                true
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                tracing::trace!(scale_factor, "scale factor changed");
                self.scale_factor.set(*scale_factor);
                true
            }
            WindowEvent::Destroyed => {
                self.detach();
                true
            }
            _ => false,
        }
    }
}

impl DeviceMetrics for WindowMetrics {
    fn metrics_available(&self) -> bool {
        self.attached.get()
    }

    fn horizontal_dpi(&self) -> f64 {
        BASE_DPI * self.scale_factor.get()
    }

    fn vertical_dpi(&self) -> f64 {
        BASE_DPI * self.scale_factor.get()
    }

    fn em_size(&self) -> f64 {
        self.em_size.get()
    }

    fn extents(&self) -> Size {
        let size = self.physical_size.get();
        Size::new(size.width as f64, size.height as f64)
    }
}
