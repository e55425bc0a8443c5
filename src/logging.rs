//! Logger setup for the command line tools

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Environment variable holding the log level (`error` .. `trace`)
pub const LOG_ENV: &str = "TONESMITH_LOG";

/// Level named by `value`, `Info` when absent or unrecognized
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the global logger
///
/// Does nothing if a logger is already installed.
pub fn init() {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    let _ = SimpleLogger::new().with_level(level).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some("WARN")), LevelFilter::Warn);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
    }
}
