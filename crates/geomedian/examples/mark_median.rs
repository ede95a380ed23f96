use geomedian::pipeline::{self, GeomedianParams};

#[cfg(feature = "tracing")]
use geomedian::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("Usage: mark_median <input_image> <output_image>");
        return Ok(());
    };

    let report = pipeline::run(&input, &output, &GeomedianParams::default())?;
    println!(
        "median at ({}, {}) over {} foreground px",
        report.point.x, report.point.y, report.foreground_pixels
    );

    Ok(())
}
