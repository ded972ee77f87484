//! Logging setup for Flowtune with file output and optional stdout.
//!
//! Logs always go to a file (`warn` and up unless a filter says otherwise).
//! Stdout logging is enabled when `FLOWTUNE_LOG` or `RUST_LOG` is set, or in
//! debug builds.
//!
//! Filter priority: `FLOWTUNE_LOG` > `RUST_LOG` > default (`warn` globally,
//! `info` for the flowtune crates). A bare level like `FLOWTUNE_LOG=debug`
//! is expanded to the flowtune crate namespaces; anything containing `=` or
//! `,` is passed through as an ordinary tracing filter.
//!
//! Default log file: `<data_local_dir>/flowtune/logs/flowtune-<pid>.log`,
//! overridable with `--log-file`.

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Initialize logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(
    log_file_path: Option<PathBuf>,
) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("FLOWTUNE_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);
    let stdout_layer = stdout_enabled.then(|| fmt::layer().with_filter(create_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize stdout-only logging for tests. Safe to call repeatedly.
pub fn test() {
    let _ = fmt().with_env_filter(create_filter()).try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("flowtune-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flowtune")
        .join("logs");

    (dir, filename)
}

/// File filter: user-specified filter if one is set, otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("FLOWTUNE_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    EnvFilter::new("warn")
}

fn create_filter() -> EnvFilter {
    if let Ok(flowtune_log) = env::var("FLOWTUNE_LOG") {
        return expand_flowtune_log(&flowtune_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new("warn,flowtune=info,flowtune_core=info,flowtune_bin=info")
}

/// Expand a bare `FLOWTUNE_LOG` level into the flowtune crate namespaces;
/// pass advanced per-module syntax through untouched.
fn expand_flowtune_log(flowtune_log: &str) -> EnvFilter {
    if flowtune_log.contains('=') || flowtune_log.contains(',') {
        return EnvFilter::new(flowtune_log);
    }

    EnvFilter::new(format!(
        "warn,flowtune={flowtune_log},flowtune_core={flowtune_log},flowtune_bin={flowtune_log}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_uses_pid_filename() {
        let (_, filename) = resolve_log_path(None);
        assert!(filename.starts_with("flowtune-"));
        assert!(filename.ends_with(".log"));
    }

    #[test]
    fn override_with_extension_is_split_into_dir_and_name() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/logs/run.log")));
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "run.log");
    }

    #[test]
    fn override_without_extension_is_a_directory() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/flowtune-logs")));
        assert_eq!(dir, PathBuf::from("/tmp/flowtune-logs"));
        assert!(name.starts_with("flowtune-"));
    }
}
