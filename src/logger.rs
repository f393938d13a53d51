use log::{LevelFilter, Log, Metadata, Record};

/// Writes `datepick` log records to stderr
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with("datepick")
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Maximum log level for the number of `-v` flags given
pub(crate) fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub(crate) fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Off);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(2), LevelFilter::Trace);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }

    #[test]
    fn test_only_own_targets() {
        let own = Metadata::builder()
            .level(Level::Debug)
            .target("datepick::navigate")
            .build();
        let foreign = Metadata::builder()
            .level(Level::Debug)
            .target("lexopt")
            .build();
        assert!(StderrLogger.enabled(&own));
        assert!(!StderrLogger.enabled(&foreign));
    }
}
