use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI log-level name to the lowercase directive `EnvFilter` expects.
fn normalise_level(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Non-blocking appender for `path`; the directory is created when missing
/// and an existing file is appended to.
fn file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to `log_file` when one is given, otherwise to stderr so they
/// never interleave with the menu on stdout. Unrecognised levels fall back
/// to `"warn"`.
///
/// The returned guard flushes the file writer when dropped and must be held
/// for as long as the program logs.
pub fn setup_logging(
    log_level: &str,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = log_file.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(guard)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_normalise_level_maps_cli_names() {
        assert_eq!(normalise_level("DEBUG"), "debug");
        assert_eq!(normalise_level("INFO"), "info");
        assert_eq!(normalise_level("WARNING"), "warn");
        assert_eq!(normalise_level("ERROR"), "error");
    }

    #[test]
    fn test_normalise_level_critical_is_least_verbose() {
        assert_eq!(normalise_level("CRITICAL"), "error");
        assert_ne!(normalise_level("CRITICAL"), normalise_level("DEBUG"));
    }

    #[test]
    fn test_normalise_level_is_case_insensitive() {
        assert_eq!(normalise_level("warning"), "warn");
        assert_eq!(normalise_level("Info"), "info");
        assert_eq!(normalise_level("critical"), "error");
    }

    #[test]
    fn test_normalise_level_passes_directives_through() {
        assert_eq!(normalise_level("TRACE"), "trace");
        assert!(EnvFilter::try_new(normalise_level("monkey_ui=debug")).is_ok());
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("logs").join("monkey.log");

        let (mut writer, guard) = file_writer(&path).expect("file writer");
        writeln!(writer, "started").expect("write");
        drop(guard);

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "started\n");
    }

    #[test]
    fn test_file_writer_appends() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("monkey.log");

        let (mut first, guard) = file_writer(&path).expect("first writer");
        writeln!(first, "one").expect("write");
        drop(guard);

        let (mut second, guard) = file_writer(&path).expect("second writer");
        writeln!(second, "two").expect("write");
        drop(guard);

        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn test_file_writer_rejects_path_without_file_name() {
        assert!(file_writer(Path::new("/")).is_err());
    }
}
