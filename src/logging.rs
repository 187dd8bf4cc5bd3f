#![cfg(feature = "std")]
//! Stderr logger for the binaries.
//!
//! `BROADSIDE_LOG` takes a comma-separated list: a level (`error` .. `trace`)
//! and any number of module names. When modules are listed, debug and trace
//! records are shown only for those modules, e.g. `debug,fleet`. Other crates
//! only get through at `warn` and above.

use log::{Level, LevelFilter, Metadata, Record};
use std::env;
use std::io::{self, Write};
use std::string::String;
use std::sync::OnceLock;
use std::time::Instant;
use std::vec::Vec;

/// Environment variable holding the log setting.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

const CRATE_TARGET: &str = "broadside";

#[derive(Debug)]
struct BroadsideLogger {
    level: LevelFilter,
    modules: Vec<String>,
    started: Instant,
}

impl BroadsideLogger {
    fn from_setting(setting: &str, fallback: LevelFilter) -> Self {
        let mut level = fallback;
        let mut modules = Vec::new();
        for part in setting.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.parse::<LevelFilter>() {
                Ok(l) => level = l,
                Err(_) => modules.push(part.to_string()),
            }
        }
        BroadsideLogger {
            level,
            modules,
            started: Instant::now(),
        }
    }

    fn module_selected(&self, target: &str) -> bool {
        if self.modules.is_empty() {
            return true;
        }
        target
            .strip_prefix(CRATE_TARGET)
            .and_then(|rest| rest.strip_prefix("::"))
            .is_some_and(|module| self.modules.iter().any(|m| module.starts_with(m.as_str())))
    }
}

impl log::Log for BroadsideLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        if !metadata.target().starts_with(CRATE_TARGET) {
            return metadata.level() <= Level::Warn;
        }
        metadata.level() <= Level::Info || self.module_selected(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{:>8.3} {:<5} {}: {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<BroadsideLogger> = OnceLock::new();

/// Installs the stderr logger from `BROADSIDE_LOG`, defaulting to `info`.
/// Calling it again is harmless.
pub fn init_logging() {
    init_logging_with(None);
}

/// Like [`init_logging`], but an explicit `level` wins over the level in the
/// environment. Module filters from the environment still apply.
pub fn init_logging_with(level: Option<LevelFilter>) {
    let logger = LOGGER.get_or_init(|| {
        let setting = env::var(LOG_ENV).unwrap_or_default();
        let mut logger = BroadsideLogger::from_setting(&setting, LevelFilter::Info);
        if let Some(level) = level {
            logger.level = level;
        }
        logger
    });
    let _ = log::set_logger(logger).map(|()| log::set_max_level(logger.level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn meta(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn setting_parses_level_and_modules() {
        let logger = BroadsideLogger::from_setting("debug, fleet", LevelFilter::Info);
        assert_eq!(logger.level, LevelFilter::Debug);
        assert_eq!(logger.modules, vec!["fleet".to_string()]);

        let logger = BroadsideLogger::from_setting("", LevelFilter::Info);
        assert_eq!(logger.level, LevelFilter::Info);
        assert!(logger.modules.is_empty());
    }

    #[test]
    fn module_filter_limits_debug_records() {
        let logger = BroadsideLogger::from_setting("trace,fleet", LevelFilter::Info);
        assert!(logger.enabled(&meta(Level::Trace, "broadside::fleet")));
        assert!(!logger.enabled(&meta(Level::Debug, "broadside::controller")));
        assert!(logger.enabled(&meta(Level::Info, "broadside::controller")));
    }

    #[test]
    fn other_crates_need_warn() {
        let logger = BroadsideLogger::from_setting("trace", LevelFilter::Info);
        assert!(logger.enabled(&meta(Level::Debug, "broadside")));
        assert!(!logger.enabled(&meta(Level::Info, "clap")));
        assert!(logger.enabled(&meta(Level::Warn, "clap")));
    }
}
