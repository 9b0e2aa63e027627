//! Conversion scopes.
use crate::{
    context::UnitsContext, Dimension, Error, Margins, Point, Rect, Result, Size, Units, Vector,
};

/// Geometric values that can be converted between units.
///
/// Conversion scales each axis independently: `factors.x` applies to horizontal quantities and
/// `factors.y` to vertical ones.
pub trait DeviceConvertible: Copy {
    fn scale_axes(self, factors: Vector) -> Self;
}

impl DeviceConvertible for Size {
    fn scale_axes(self, factors: Vector) -> Self {
        Size::new(self.width * factors.x, self.height * factors.y)
    }
}

impl DeviceConvertible for Vector {
    fn scale_axes(self, factors: Vector) -> Self {
        Vector::new(self.x * factors.x, self.y * factors.y)
    }
}

impl DeviceConvertible for Point {
    fn scale_axes(self, factors: Vector) -> Self {
        Point::new(self.x * factors.x, self.y * factors.y)
    }
}

/// A bare length is always horizontal.
impl DeviceConvertible for Dimension {
    fn scale_axes(self, factors: Vector) -> Self {
        Size::new(self, 0.0).scale_axes(factors).width
    }
}

/// Origin and size are converted separately.
impl DeviceConvertible for Rect {
    fn scale_axes(self, factors: Vector) -> Self {
        Rect::new(self.origin.scale_axes(factors), self.size.scale_axes(factors))
    }
}

/// Left and right sides are horizontal, top and bottom vertical.
impl DeviceConvertible for Margins {
    fn scale_axes(self, factors: Vector) -> Self {
        let left = Size::new(self.left, 0.0).scale_axes(factors).width;
        let top = Size::new(0.0, self.top).scale_axes(factors).height;
        let right = Size::new(self.right, 0.0).scale_axes(factors).width;
        let bottom = Size::new(0.0, self.bottom).scale_axes(factors).height;
        Margins::new(top, right, bottom, left)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    ToDevice,
    FromDevice,
}

/// A conversion scope on a [`UnitsContext`].
///
/// The converter remembers the units of the context at the time it was created and puts them back
/// when dropped, whatever happened in between. Converters can be nested on the same context: each
/// one restores what was active when it was created, so scopes unwind in LIFO order.
///
/// ```
/// use metron::{FixedMetrics, Size, UnitsContext, Units, UnitsConverter};
///
/// let metrics = FixedMetrics::new(96.0, 1.0 / 6.0, Size::new(800.0, 600.0));
/// let context = UnitsContext::new(&metrics);
/// {
///     let converter = UnitsConverter::with_units(&context, Units::Inches);
///     assert_eq!(converter.to_device_units(2.0).unwrap(), 192.0);
/// }
/// assert_eq!(context.units(), Units::Pixels);
/// ```
pub struct UnitsConverter<'c, 'a> {
    context: &'c UnitsContext<'a>,
    saved_units: Units,
}

impl<'c, 'a> UnitsConverter<'c, 'a> {
    pub fn new(context: &'c UnitsContext<'a>) -> UnitsConverter<'c, 'a> {
        UnitsConverter {
            context,
            saved_units: context.units(),
        }
    }

    /// Opens a scope and switches the context to `units`.
    pub fn with_units(context: &'c UnitsContext<'a>, units: Units) -> UnitsConverter<'c, 'a> {
        let converter = UnitsConverter::new(context);
        converter.set_units(units);
        converter
    }

    /// Units that will be restored when this converter is dropped.
    pub fn saved_units(&self) -> Units {
        self.saved_units
    }

    pub fn units(&self) -> Units {
        self.context.units()
    }

    /// Changes the units of the context, returning the previous ones.
    pub fn set_units(&self, units: Units) -> Units {
        self.context.set_units(units)
    }

    pub fn context(&self) -> &'c UnitsContext<'a> {
        self.context
    }

    /// Converts `value`, expressed in the current units, to device pixels.
    ///
    /// Percentages are relative to the device extents. Without device metrics, only `Pixels`
    /// values can be converted (they are returned unchanged).
    pub fn to_device_units<T: DeviceConvertible>(&self, value: T) -> Result<T> {
        self.convert_with_device_extents(Direction::ToDevice, value)
    }

    /// Converts `value`, expressed in device pixels, to the current units.
    ///
    /// Same rules as [`to_device_units`](Self::to_device_units).
    pub fn from_device_units<T: DeviceConvertible>(&self, value: T) -> Result<T> {
        self.convert_with_device_extents(Direction::FromDevice, value)
    }

    /// Converts `value` to device pixels, with percentages relative to `extents`.
    ///
    /// `Pixels` and `Percentage` don't need device metrics here.
    pub fn to_device_units_in<T: DeviceConvertible>(&self, extents: Size, value: T) -> Result<T> {
        self.convert(Direction::ToDevice, extents, value)
    }

    /// Converts `value` from device pixels, with percentages relative to `extents`.
    pub fn from_device_units_in<T: DeviceConvertible>(
        &self,
        extents: Size,
        value: T,
    ) -> Result<T> {
        self.convert(Direction::FromDevice, extents, value)
    }

    fn convert_with_device_extents<T: DeviceConvertible>(
        &self,
        direction: Direction,
        value: T,
    ) -> Result<T> {
        if !self.context.device_metrics_available() {
            return if self.units() == Units::Pixels {
                Ok(value)
            } else {
                tracing::debug!(units = %self.units(), ?direction, "device metrics unavailable");
                Err(Error::MetricsUnavailable)
            };
        }
        let extents = self.context.device_metrics()?.extents();
        self.convert(direction, extents, value)
    }

    fn convert<T: DeviceConvertible>(
        &self,
        direction: Direction,
        extents: Size,
        value: T,
    ) -> Result<T> {
        let units = self.units();
        if units.needs_device_metrics() && !self.context.device_metrics_available() {
            tracing::debug!(%units, ?direction, "device metrics unavailable");
            return Err(Error::MetricsUnavailable);
        }
        if units == Units::Pixels {
            return Ok(value);
        }

        let metrics = self.context.metrics_source();
        let factors = match direction {
            Direction::ToDevice => units.pixels_per_unit(metrics, extents),
            Direction::FromDevice => units.units_per_pixel(metrics, extents),
        };
        Ok(value.scale_axes(factors))
    }
}

impl<'c, 'a> Drop for UnitsConverter<'c, 'a> {
    fn drop(&mut self) {
        let previous = self.context.set_units(self.saved_units);
        if previous != self.saved_units {
            tracing::trace!(%previous, restored = %self.saved_units, "units restored");
        }
    }
}
