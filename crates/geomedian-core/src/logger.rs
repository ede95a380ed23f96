//! Stderr logging for the geomedian crates.
//!
//! Records from `geomedian*` targets pass at the configured level. Records from
//! dependencies (decoders, encoders) are held at `warn` or quieter so `-vvv`
//! does not drown the median trace in PNG chunk chatter.
//!
//! Lines look like `+  12ms DEBUG median: x=17 of 80`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

const OWN_TARGET_PREFIX: &str = "geomedian";

/// Map a `-v` repeat count to a filter: warnings by default, then info,
/// debug and trace.
pub fn verbosity_level(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

struct StderrLogger {
    level: LevelFilter,
    dependency_level: LevelFilter,
    started: Instant,
}

impl StderrLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            dependency_level: level.min(LevelFilter::Warn),
            started: Instant::now(),
        }
    }

    fn filter_for(&self, target: &str) -> LevelFilter {
        if target.starts_with(OWN_TARGET_PREFIX) {
            self.level
        } else {
            self.dependency_level
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let millis = self.started.elapsed().as_millis();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "+{millis:>5}ms {:<5} {}: {}",
            record.level(),
            short_target(record.target()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Last path segment of a module target (`geomedian_core::median` -> `median`).
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger, letting geomedian records through at `level`.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger::new(level));
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, geomedian spans and events are shown at `info` and
/// everything else at `warn`.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,geomedian=info,geomedian_core=info"));
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn meta(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn short_target_keeps_last_segment() {
        assert_eq!(short_target("geomedian_core::median"), "median");
        assert_eq!(short_target("geomedian"), "geomedian");
    }

    #[test]
    fn dependencies_are_capped_at_warn() {
        let logger = StderrLogger::new(LevelFilter::Trace);
        assert!(logger.enabled(&meta(Level::Trace, "geomedian_core::median")));
        assert!(logger.enabled(&meta(Level::Debug, "geomedian::pipeline")));
        assert!(!logger.enabled(&meta(Level::Info, "png::decoder")));
        assert!(logger.enabled(&meta(Level::Warn, "png::decoder")));
    }

    #[test]
    fn quiet_level_applies_to_everyone() {
        let logger = StderrLogger::new(LevelFilter::Error);
        assert!(!logger.enabled(&meta(Level::Warn, "geomedian::pipeline")));
        assert!(!logger.enabled(&meta(Level::Warn, "image::codecs")));
        assert!(logger.enabled(&meta(Level::Error, "image::codecs")));
    }

    #[test]
    fn verbosity_count_maps_to_filters() {
        assert_eq!(verbosity_level(0), LevelFilter::Warn);
        assert_eq!(verbosity_level(1), LevelFilter::Info);
        assert_eq!(verbosity_level(2), LevelFilter::Debug);
        assert_eq!(verbosity_level(7), LevelFilter::Trace);
    }
}
