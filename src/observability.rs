//! This module provides the logging hooks of the encoder.
//!
//! All diagnostics go through the `log` facade. The `log_metric!` macro emits
//! one structured line per event at `debug` level and is compiled out of
//! release builds. `enable_verbose_logging` installs an `env_logger` backend
//! for callers that do not bring their own.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::error::BwtpackError;

/// Logs a structured key-value metric line at `debug` level, only in debug builds.
///
/// # Example
/// ```
/// use bwtpack::log_metric;
/// let runs = 4;
/// log_metric!("event" = "run_length_encode", "runs" = &runs);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("BWTPACK_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `info`-level `env_logger` backend, once per process.
///
/// With `log_file`, records are appended to that file instead of stderr.
/// Later calls are no-ops, as is a call made after another logger was
/// installed.
pub fn enable_verbose_logging(log_file: Option<String>) -> Result<(), BwtpackError> {
    let target = match log_file {
        Some(filename) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(&filename)
                .map_err(|e| {
                    BwtpackError::InvalidConfig(format!("cannot open log file {}: {}", filename, e))
                })?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Just the level and the message.
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_logging_is_idempotent() {
        assert!(enable_verbose_logging(None).is_ok());
        assert!(enable_verbose_logging(None).is_ok());
        log_metric!("event" = "test", "value" = 1);
    }

    #[test]
    fn test_unopenable_log_file_is_an_error() {
        let result = enable_verbose_logging(Some("/nonexistent-dir/bwtpack.log".to_string()));
        assert!(matches!(result, Err(BwtpackError::InvalidConfig(_))));
    }
}
