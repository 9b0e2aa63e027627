use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use metron::{
    margins,
    widget::{Button, Checkable, PointerButton},
    FixedMetrics, MetricsConfig, Point, Rect, Size, Units, UnitsContext, UnitsConverter,
};

#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "Converts lengths between units for a simulated device", long_about = None)]
struct Cli {
    #[command(flatten)]
    device: DeviceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides on top of the `METRON_*` environment configuration.
#[derive(Args)]
struct DeviceArgs {
    /// DPI on both axes
    #[arg(long, global = true)]
    dpi: Option<f64>,

    /// Horizontal DPI
    #[arg(long, global = true)]
    hdpi: Option<f64>,

    /// Vertical DPI
    #[arg(long, global = true)]
    vdpi: Option<f64>,

    /// Em-size in inches
    #[arg(long, global = true)]
    em_size: Option<f64>,

    /// Device width in pixels (reference for percentages)
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Device height in pixels (reference for percentages)
    #[arg(long, global = true)]
    height: Option<f64>,

    /// Simulate a device that has no metrics yet
    #[arg(long, global = true)]
    detached: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a length from one unit to another, through device pixels
    Convert {
        value: f64,

        /// Units of the value (px, pt, pc, em, mm, cm, in, %)
        from: Units,

        /// Target units
        #[arg(long, default_value = "px")]
        to: Units,
    },

    /// Compute the pixel margins of a push button from margins in the given units
    Margins {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,

        #[arg(long, default_value = "mm")]
        units: Units,
    },

    /// Click a checkable button a number of times and print its actions
    Click {
        #[arg(default_value = "&Toggle")]
        label: String,

        #[arg(long, default_value_t = 1)]
        times: u32,

        /// Allow the indeterminate state
        #[arg(long)]
        tri_state: bool,
    },
}

impl DeviceArgs {
    fn config(&self) -> anyhow::Result<MetricsConfig> {
        let mut config = MetricsConfig::from_env().context("invalid metrics configuration")?;
        if let Some(dpi) = self.dpi {
            config.horizontal_dpi = dpi;
            config.vertical_dpi = dpi;
        }
        if let Some(dpi) = self.hdpi {
            config.horizontal_dpi = dpi;
        }
        if let Some(dpi) = self.vdpi {
            config.vertical_dpi = dpi;
        }
        if let Some(em_size) = self.em_size {
            config.em_size = em_size;
        }
        if let Some(width) = self.width {
            config.extents.width = width;
        }
        if let Some(height) = self.height {
            config.extents.height = height;
        }
        Ok(config)
    }
}

fn convert(context: &UnitsContext, value: f64, from: Units, to: Units) -> anyhow::Result<()> {
    let pixels = UnitsConverter::with_units(context, from)
        .to_device_units(value)
        .with_context(|| format!("cannot convert from {}", from))?;
    let result = UnitsConverter::with_units(context, to)
        .from_device_units(pixels)
        .with_context(|| format!("cannot convert to {}", to))?;
    println!("{}{} = {}px = {}{}", value, from, pixels, result, to);
    Ok(())
}

fn button_margins(
    context: &UnitsContext,
    logical: metron::Margins,
    units: Units,
) -> anyhow::Result<()> {
    let button = Button::new("OK");
    let converter = UnitsConverter::with_units(context, units);
    let device = button.device_margins(&converter, logical)?;
    println!(
        "left {}px, top {}px, right {}px, bottom {}px",
        device.left, device.top, device.right, device.bottom
    );
    Ok(())
}

fn click(label: String, times: u32, tri_state: bool) -> anyhow::Result<()> {
    let mut button = Button::new(label);
    if tri_state {
        button.set_checkable(Checkable::TriState);
        button.set_indeterminate()?;
    } else {
        button.set_checkable(Checkable::BiState);
    }
    if let Some(mnemonic) = button.mnemonic() {
        println!("mnemonic: {}", mnemonic);
    }

    let bounds = Rect::new(Point::origin(), Size::new(80.0, 24.0));
    let center = bounds.center();
    for _ in 0..times {
        button.pointer_pressed(PointerButton::Left, center);
        button.pointer_released(PointerButton::Left, center, bounds);
    }
    for action in button.take_actions() {
        println!("{:?}", action);
    }
    println!("checked state: {:?}", button.checked_state());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let metrics = FixedMetrics::from_config(&cli.device.config()?);
    metrics.set_available(!cli.device.detached);
    let context = UnitsContext::new(&metrics);

    match cli.command {
        Commands::Convert { value, from, to } => convert(&context, value, from, to),
        Commands::Margins {
            left,
            top,
            right,
            bottom,
            units,
        } => button_margins(&context, margins(left, top, right, bottom), units),
        Commands::Click {
            label,
            times,
            tri_state,
        } => click(label, times, tri_state),
    }
}
