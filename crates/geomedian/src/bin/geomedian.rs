//! geomedian CLI: mark the geographic median of a mask image.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use geomedian::pipeline::{self, GeomedianParams};
use geomedian::{BackgroundRule, Rgba};
use log::LevelFilter;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "geomedian")]
#[command(
    about = "Find the point splitting an image's foreground into equal halves on each axis and mark it with a cross"
)]
#[command(version)]
struct Cli {
    /// Input image (background = top-left pixel color).
    input: PathBuf,

    /// Output image; format follows the extension, PNG if it has none or an unknown one.
    output: PathBuf,

    /// JSON file with pipeline parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of the run.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Use a fixed background color instead of the top-left pixel, as `r,g,b,a`.
    #[arg(long, value_parser = parse_rgba)]
    background: Option<Rgba>,

    /// Cross arm length is image width (height) divided by this value.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    marker_divisor: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON-formatted tracing output.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        geomedian::core::verbosity_level(self.verbose)
    }

    fn params(&self) -> CliResult<GeomedianParams> {
        let mut params = match &self.config {
            Some(path) => GeomedianParams::load(path)
                .map_err(|e| -> CliError { format!("{}: {e}", path.display()).into() })?,
            None => GeomedianParams::default(),
        };
        if let Some(color) = self.background {
            params.median.background = BackgroundRule::Fixed {
                rgba: color.channels(),
            };
        }
        if let Some(div) = self.marker_divisor {
            params.marker.size_divisor = div;
        }
        Ok(params)
    }
}

fn parse_rgba(raw: &str) -> Result<Rgba, String> {
    let channels = raw
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<u8>, _>>()?;
    let rgba: [u8; 4] = channels
        .try_into()
        .map_err(|v: Vec<u8>| format!("expected 4 channels, got {}", v.len()))?;
    Ok(Rgba(rgba))
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let params = cli.params()?;
    let report = pipeline::run(&cli.input, &cli.output, &params)?;

    if let Some(path) = &cli.report {
        pipeline::write_report(&report, path)?;
        log::info!("wrote report to {}", path.display());
    }

    println!("{} {}", report.point.x, report.point.y);
    Ok(())
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) -> CliResult<()> {
    geomedian::core::init_with_level(cli.level())?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) -> CliResult<()> {
    // Ignore errors if a logger/subscriber was already installed.
    let _ = tracing_log::LogTracer::init_with_filter(cli.level());
    geomedian::core::init_tracing(cli.json_logs);
    Ok(())
}
