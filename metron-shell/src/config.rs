//! Default device metrics and their environment overrides.
use crate::{error::Error, geometry::Size};
use std::env;

/// DPI assumed when the platform doesn't report one.
pub const DEFAULT_DPI: f64 = 96.0;
/// One em, in inches (12pt).
pub const DEFAULT_EM_SIZE: f64 = 1.0 / 6.0;
pub const DEFAULT_EXTENTS: Size = Size {
    width: 1920.0,
    height: 1080.0,
    _unit: std::marker::PhantomData,
};

/// Settings used to build metrics for surfaces that are not backed by a platform window
/// (offscreen surfaces, tests, the command-line workbench).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MetricsConfig {
    pub horizontal_dpi: f64,
    pub vertical_dpi: f64,
    pub em_size: f64,
    pub extents: Size,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            horizontal_dpi: DEFAULT_DPI,
            vertical_dpi: DEFAULT_DPI,
            em_size: DEFAULT_EM_SIZE,
            extents: DEFAULT_EXTENTS,
        }
    }
}

impl MetricsConfig {
    /// Default settings, overridden by the `METRON_DPI`, `METRON_HORIZONTAL_DPI`,
    /// `METRON_VERTICAL_DPI`, `METRON_EM_SIZE`, `METRON_WIDTH` and `METRON_HEIGHT` environment
    /// variables when they are set.
    pub fn from_env() -> Result<MetricsConfig, Error> {
        MetricsConfig::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env` but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<MetricsConfig, Error> {
        let mut config = MetricsConfig::default();

        if let Some(dpi) = read_positive(&lookup, "METRON_DPI")? {
            config.horizontal_dpi = dpi;
            config.vertical_dpi = dpi;
        }
        if let Some(dpi) = read_positive(&lookup, "METRON_HORIZONTAL_DPI")? {
            config.horizontal_dpi = dpi;
        }
        if let Some(dpi) = read_positive(&lookup, "METRON_VERTICAL_DPI")? {
            config.vertical_dpi = dpi;
        }
        if let Some(em_size) = read_positive(&lookup, "METRON_EM_SIZE")? {
            config.em_size = em_size;
        }
        if let Some(width) = read_positive(&lookup, "METRON_WIDTH")? {
            config.extents.width = width;
        }
        if let Some(height) = read_positive(&lookup, "METRON_HEIGHT")? {
            config.extents.height = height;
        }

        tracing::debug!(?config, "metrics configuration");
        Ok(config)
    }
}

fn read_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<f64>, Error> {
    let value = match lookup(var) {
        Some(value) => value,
        None => return Ok(None),
    };
    let parsed: f64 = value.trim().parse().map_err(|_| Error::InvalidValue {
        var,
        value: value.clone(),
    })?;
    if !(parsed > 0.0) {
        return Err(Error::NotPositive { var, value: parsed });
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(
        vars: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |var: &str| vars.get(var).map(|v| v.to_string())
    }

    #[test]
    fn defaults_without_overrides() {
        let vars = HashMap::new();
        let config = MetricsConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config, MetricsConfig::default());
    }

    #[test]
    fn per_axis_overrides_win() {
        let mut vars = HashMap::new();
        vars.insert("METRON_DPI", "120");
        vars.insert("METRON_VERTICAL_DPI", "72");
        vars.insert("METRON_WIDTH", "640");
        let config = MetricsConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.horizontal_dpi, 120.0);
        assert_eq!(config.vertical_dpi, 72.0);
        assert_eq!(config.extents, Size::new(640.0, 1080.0));
    }

    #[test]
    fn rejects_garbage() {
        let mut vars = HashMap::new();
        vars.insert("METRON_EM_SIZE", "big");
        assert!(matches!(
            MetricsConfig::from_lookup(lookup(&vars)),
            Err(Error::InvalidValue { var: "METRON_EM_SIZE", .. })
        ));

        let mut vars = HashMap::new();
        vars.insert("METRON_DPI", "-3");
        assert!(matches!(
            MetricsConfig::from_lookup(lookup(&vars)),
            Err(Error::NotPositive { var: "METRON_DPI", .. })
        ));
    }
}
