mod bootstrap;

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{bail, Result};
use monkey_core::settings::Settings;
use monkey_data::catalog::Catalog;
use monkey_runtime::catalog_service::CatalogService;
use monkey_ui::app::MenuController;
use monkey_ui::console::{Console, LineConsole, TerminalConsole};
use monkey_ui::themes::Theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::load();

    // Dropping the guard flushes any buffered file logs.
    let _log_guard =
        bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Monkey Console v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Theme: {}, Seed: {:?}, Latency: {}ms",
        settings.theme,
        settings.seed,
        settings.latency_ms
    );

    let catalog = match settings.seed {
        Some(seed) => Catalog::from_seed_with_rng_seed(seed)?,
        None => Catalog::from_seed()?,
    };
    if catalog.is_empty() {
        bail!("the monkey catalog has no records");
    }
    tracing::info!("Loaded {} monkey species", catalog.count());

    let service =
        CatalogService::with_latency(catalog, Duration::from_millis(settings.latency_ms));
    let theme = Theme::from_name(&settings.theme);

    // Single-key acknowledgement needs a real terminal; piped input is read
    // line by line instead.
    if io::stdin().is_terminal() {
        run_menu(service, TerminalConsole::new(), theme).await
    } else {
        tracing::info!("stdin is not a terminal; using line input");
        run_menu(service, LineConsole::new(io::stdin().lock(), io::stdout()), theme).await
    }
}

async fn run_menu<C: Console>(service: CatalogService, console: C, theme: Theme) -> Result<()> {
    let mut controller = MenuController::new(service, console, theme);
    controller.run().await?;
    Ok(())
}
