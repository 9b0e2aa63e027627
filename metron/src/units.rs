//! Measurement units.
use crate::{DeviceMetrics, Error, Size, Vector};
use std::{convert::TryFrom, fmt, str::FromStr};

const POINTS_PER_INCH: f64 = 72.0;
const PICAS_PER_INCH: f64 = 6.0;
const MILLIMETRES_PER_INCH: f64 = 25.4;
const CENTIMETRES_PER_INCH: f64 = 2.54;

/// Unit in which lengths are expressed inside a conversion scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Units {
    /// Device pixels.
    Pixels,
    /// 1/72th of an inch.
    Points,
    /// 1/6th of an inch.
    Picas,
    /// Multiples of the device em-size.
    Ems,
    Millimetres,
    Centimetres,
    Inches,
    /// Hundredths of a reference extent.
    Percentage,
}

impl Default for Units {
    fn default() -> Self {
        Units::Pixels
    }
}

impl Units {
    pub const ALL: [Units; 8] = [
        Units::Pixels,
        Units::Points,
        Units::Picas,
        Units::Ems,
        Units::Millimetres,
        Units::Centimetres,
        Units::Inches,
        Units::Percentage,
    ];

    /// Whether converting this unit requires DPI or em-size.
    ///
    /// Percentage only needs a reference extent, which the caller may supply directly.
    pub fn needs_device_metrics(self) -> bool {
        !matches!(self, Units::Pixels | Units::Percentage)
    }

    /// Short name, as accepted by `from_str`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Units::Pixels => "px",
            Units::Points => "pt",
            Units::Picas => "pc",
            Units::Ems => "em",
            Units::Millimetres => "mm",
            Units::Centimetres => "cm",
            Units::Inches => "in",
            Units::Percentage => "%",
        }
    }

    /// Per-axis number of device pixels in one of this unit.
    ///
    /// `extents` is only read for `Percentage`; `metrics` is only read for units that need device
    /// metrics.
    pub fn pixels_per_unit(self, metrics: &dyn DeviceMetrics, extents: Size) -> Vector {
        match self {
            Units::Pixels => Vector::new(1.0, 1.0),
            Units::Points => Vector::new(
                metrics.horizontal_dpi() / POINTS_PER_INCH,
                metrics.vertical_dpi() / POINTS_PER_INCH,
            ),
            Units::Picas => Vector::new(
                metrics.horizontal_dpi() / PICAS_PER_INCH,
                metrics.vertical_dpi() / PICAS_PER_INCH,
            ),
            Units::Ems => Vector::new(
                metrics.em_size() * metrics.horizontal_dpi(),
                metrics.em_size() * metrics.vertical_dpi(),
            ),
            Units::Millimetres => Vector::new(
                metrics.horizontal_dpi() / MILLIMETRES_PER_INCH,
                metrics.vertical_dpi() / MILLIMETRES_PER_INCH,
            ),
            Units::Centimetres => Vector::new(
                metrics.horizontal_dpi() / CENTIMETRES_PER_INCH,
                metrics.vertical_dpi() / CENTIMETRES_PER_INCH,
            ),
            Units::Inches => Vector::new(metrics.horizontal_dpi(), metrics.vertical_dpi()),
            Units::Percentage => Vector::new(extents.width / 100.0, extents.height / 100.0),
        }
    }

    /// Per-axis amount of this unit in one device pixel. Reciprocal of `pixels_per_unit`.
    pub fn units_per_pixel(self, metrics: &dyn DeviceMetrics, extents: Size) -> Vector {
        match self {
            Units::Pixels => Vector::new(1.0, 1.0),
            Units::Points => Vector::new(
                POINTS_PER_INCH / metrics.horizontal_dpi(),
                POINTS_PER_INCH / metrics.vertical_dpi(),
            ),
            Units::Picas => Vector::new(
                PICAS_PER_INCH / metrics.horizontal_dpi(),
                PICAS_PER_INCH / metrics.vertical_dpi(),
            ),
            Units::Ems => Vector::new(
                1.0 / metrics.em_size() / metrics.horizontal_dpi(),
                1.0 / metrics.em_size() / metrics.vertical_dpi(),
            ),
            Units::Millimetres => Vector::new(
                MILLIMETRES_PER_INCH / metrics.horizontal_dpi(),
                MILLIMETRES_PER_INCH / metrics.vertical_dpi(),
            ),
            Units::Centimetres => Vector::new(
                CENTIMETRES_PER_INCH / metrics.horizontal_dpi(),
                CENTIMETRES_PER_INCH / metrics.vertical_dpi(),
            ),
            Units::Inches => Vector::new(1.0 / metrics.horizontal_dpi(), 1.0 / metrics.vertical_dpi()),
            Units::Percentage => Vector::new(100.0 / extents.width, 100.0 / extents.height),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = match s.trim().to_ascii_lowercase().as_str() {
            "px" | "pixel" | "pixels" => Units::Pixels,
            "pt" | "point" | "points" => Units::Points,
            "pc" | "pica" | "picas" => Units::Picas,
            "em" | "ems" => Units::Ems,
            "mm" | "millimetre" | "millimetres" | "millimeter" | "millimeters" => Units::Millimetres,
            "cm" | "centimetre" | "centimetres" | "centimeter" | "centimeters" => Units::Centimetres,
            "in" | "inch" | "inches" => Units::Inches,
            "%" | "percent" | "percentage" => Units::Percentage,
            _ => return Err(Error::UnknownUnits(s.to_string())),
        };
        Ok(units)
    }
}

/// Decodes a unit from its position in [`Units::ALL`].
impl TryFrom<u32> for Units {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Units::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| Error::UnknownUnits(code.to_string()))
    }
}

impl From<Units> for u32 {
    fn from(units: Units) -> u32 {
        units as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_shell::metrics::FixedMetrics;

    fn metrics() -> FixedMetrics {
        FixedMetrics::with_dpi(96.0, 72.0, 0.25, Size::new(1280.0, 720.0))
    }

    #[test]
    fn factor_tables_are_reciprocal() {
        let metrics = metrics();
        let extents = Size::new(200.0, 50.0);
        for &units in Units::ALL.iter() {
            let to = units.pixels_per_unit(&metrics, extents);
            let from = units.units_per_pixel(&metrics, extents);
            assert!((to.x * from.x - 1.0).abs() < 1e-12, "{} horizontal", units);
            assert!((to.y * from.y - 1.0).abs() < 1e-12, "{} vertical", units);
        }
    }

    #[test]
    fn factor_values() {
        let metrics = metrics();
        let extents = Size::new(200.0, 50.0);
        assert_eq!(
            Units::Inches.pixels_per_unit(&metrics, extents),
            Vector::new(96.0, 72.0)
        );
        assert_eq!(
            Units::Picas.pixels_per_unit(&metrics, extents),
            Vector::new(16.0, 12.0)
        );
        assert_eq!(
            Units::Ems.pixels_per_unit(&metrics, extents),
            Vector::new(24.0, 18.0)
        );
        assert_eq!(
            Units::Percentage.pixels_per_unit(&metrics, extents),
            Vector::new(2.0, 0.5)
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("mm".parse::<Units>(), Ok(Units::Millimetres));
        assert_eq!(" Inches ".parse::<Units>(), Ok(Units::Inches));
        assert_eq!("%".parse::<Units>(), Ok(Units::Percentage));
        assert_eq!(
            "furlongs".parse::<Units>(),
            Err(Error::UnknownUnits("furlongs".to_string()))
        );
        for &units in Units::ALL.iter() {
            assert_eq!(units.to_string().parse::<Units>(), Ok(units));
        }
    }

    #[test]
    fn raw_codes() {
        for &units in Units::ALL.iter() {
            assert_eq!(Units::try_from(u32::from(units)), Ok(units));
        }
        assert_eq!(Units::try_from(8u32), Err(Error::UnknownUnits("8".to_string())));
    }

    #[test]
    fn only_pixels_and_percentage_skip_metrics() {
        let independent: Vec<Units> = Units::ALL
            .iter()
            .copied()
            .filter(|u| !u.needs_device_metrics())
            .collect();
        assert_eq!(independent, vec![Units::Pixels, Units::Percentage]);
    }
}
