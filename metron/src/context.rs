use crate::{converter::UnitsConverter, DeviceMetrics, Error, Result, Units};
use std::cell::Cell;

/// Holds the current units for a device-metrics-bearing entity (a widget, a window surface...).
///
/// The context borrows its metrics: the provider must outlive it. Metrics are never cached, each
/// query goes to the provider.
///
/// The current units can be changed through a shared reference so that nested
/// [`UnitsConverter`]s can all borrow the same context. Contexts are meant to be used on a single
/// thread.
pub struct UnitsContext<'a> {
    source: &'a dyn DeviceMetrics,
    units: Cell<Units>,
}

impl<'a> UnitsContext<'a> {
    /// Creates a context in `Pixels`.
    pub fn new(source: &'a dyn DeviceMetrics) -> UnitsContext<'a> {
        UnitsContext {
            source,
            units: Cell::new(Units::Pixels),
        }
    }

    pub fn device_metrics_available(&self) -> bool {
        self.source.metrics_available()
    }

    /// Returns the device metrics, or `MetricsUnavailable` if the provider has none to offer yet.
    pub fn device_metrics(&self) -> Result<&'a dyn DeviceMetrics> {
        if self.source.metrics_available() {
            Ok(self.source)
        } else {
            Err(Error::MetricsUnavailable)
        }
    }

    /// The provider, whether or not it currently has metrics.
    pub(crate) fn metrics_source(&self) -> &'a dyn DeviceMetrics {
        self.source
    }

    pub fn units(&self) -> Units {
        self.units.get()
    }

    /// Changes the current units and returns the previous ones.
    pub fn set_units(&self, units: Units) -> Units {
        let previous = self.units.replace(units);
        if previous != units {
            tracing::trace!(%previous, %units, "units changed");
        }
        previous
    }

    /// Opens a conversion scope on this context.
    ///
    /// The current units are restored when the returned converter is dropped.
    pub fn converter(&self) -> UnitsConverter<'_, 'a> {
        UnitsConverter::new(self)
    }

    /// Runs `f` with the current units temporarily set to `units`.
    pub fn with_units<R>(&self, units: Units, f: impl FnOnce(&UnitsConverter<'_, 'a>) -> R) -> R {
        let converter = UnitsConverter::with_units(self, units);
        f(&converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;
    use metron_shell::metrics::FixedMetrics;

    #[test]
    fn starts_in_pixels() {
        let metrics = FixedMetrics::default();
        let context = UnitsContext::new(&metrics);
        assert_eq!(context.units(), Units::Pixels);
    }

    #[test]
    fn set_units_returns_previous() {
        let metrics = FixedMetrics::default();
        let context = UnitsContext::new(&metrics);
        assert_eq!(context.set_units(Units::Points), Units::Pixels);
        assert_eq!(context.set_units(Units::Ems), Units::Points);
        assert_eq!(context.units(), Units::Ems);
    }

    #[test]
    fn delegates_to_provider() {
        let metrics = FixedMetrics::new(96.0, 0.2, Size::new(100.0, 100.0));
        let context = UnitsContext::new(&metrics);
        assert!(context.device_metrics_available());
        assert_eq!(context.device_metrics().unwrap().horizontal_dpi(), 96.0);

        metrics.set_dpi(192.0, 192.0);
        assert_eq!(context.device_metrics().unwrap().horizontal_dpi(), 192.0);

        metrics.set_available(false);
        assert!(!context.device_metrics_available());
        assert!(matches!(context.device_metrics(), Err(Error::MetricsUnavailable)));
    }

    #[test]
    fn with_units_restores() {
        let metrics = FixedMetrics::default();
        let context = UnitsContext::new(&metrics);
        context.set_units(Units::Centimetres);
        let seen = context.with_units(Units::Inches, |converter| converter.units());
        assert_eq!(seen, Units::Inches);
        assert_eq!(context.units(), Units::Centimetres);
    }
}
