//! Logger setup for the binary.
//!
//! Uses `log4rs.yml` from the working directory when present, otherwise a
//! stderr console appender so log lines never mix with the report on stdout.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BITSPLITTER_LOG";
/// Optional log4rs config file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Turn the raw env value into a level. Unset means [`LevelFilter::Warn`].
pub fn parse_level(raw: Option<&str>) -> Result<LevelFilter, String> {
    match raw {
        None => Ok(DEFAULT_LEVEL),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| format!("unknown log level {value:?} in {LOG_ENV}")),
    }
}

/// Initialise log4rs. Call once, after `.env` has been loaded.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::debug!("logging configured from {LOG_CONFIG_FILE}");
        return Ok(());
    }

    let raw = std::env::var(LOG_ENV).ok();
    let (level, bad_level) = match parse_level(raw.as_deref()) {
        Ok(level) => (level, None),
        Err(e) => (DEFAULT_LEVEL, Some(e)),
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;

    if let Some(e) = bad_level {
        log::warn!("{e}, using {DEFAULT_LEVEL}");
    }
    Ok(())
}
