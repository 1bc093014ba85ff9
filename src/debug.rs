//! Logging bridge for the termremote binary.
//!
//! Routes `log::info!()` and friends either to stderr or, when
//! `TERMREMOTE_LOG_FILE` is set, to that file. The level comes from the
//! `--log-level` flag, then the `TERMREMOTE_LOG` environment variable,
//! then defaults to `warn`. Stdout is left alone so command output stays
//! machine-readable.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the default log level
pub const LOG_LEVEL_ENV: &str = "TERMREMOTE_LOG";

/// Environment variable naming a file to log to instead of stderr
pub const LOG_FILE_ENV: &str = "TERMREMOTE_LOG_FILE";

struct LogBridge {
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        let mut file = self.file.lock();
        match file.as_mut() {
            Some(f) => {
                let _ = f.write_all(line.as_bytes());
            }
            None => {
                let _ = std::io::stderr().write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Pick the effective level: explicit flag, then environment, then `warn`.
pub fn resolve_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    cli_level
        .or_else(|| {
            std::env::var(LOG_LEVEL_ENV)
                .ok()
                .and_then(|v| parse_level(&v))
        })
        .unwrap_or(LevelFilter::Warn)
}

/// Install the bridge as the global logger. Later calls are no-ops.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let level = resolve_level(cli_level);

    let file = std::env::var_os(LOG_FILE_ENV).and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| eprintln!("termremote: cannot open log file {path:?}: {e}"))
            .ok()
    });

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        file: Mutex::new(file),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Trace)),
            LevelFilter::Trace
        );
    }
}
