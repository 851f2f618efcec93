use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Browse a catalog of monkey species from the console
#[derive(Parser, Debug, Clone)]
#[command(
    name = "monkey-console",
    about = "Browse a catalog of monkey species from the console",
    version
)]
pub struct Settings {
    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["auto", "dark", "light", "plain"])]
    pub theme: String,

    /// Seed for the random monkey picker (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated latency added to each catalog query, in milliseconds
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u64).range(0..=10_000))]
    pub latency_ms: u64,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path (logs go to stderr when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and resolve `"auto"` values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        let settings = Settings::parse_from(args);
        let colour_allowed = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self::resolve_auto_values(settings, colour_allowed)
    }

    /// Resolve the `"auto"` theme and apply the `--debug` flag.
    ///
    /// `"auto"` becomes `"plain"` when colour output is not allowed; otherwise
    /// it stays `"auto"` and the UI picks dark or light from the terminal.
    fn resolve_auto_values(mut settings: Settings, colour_allowed: bool) -> Settings {
        if settings.theme == "auto" && !colour_allowed {
            settings.theme = "plain".to_string();
        }

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
