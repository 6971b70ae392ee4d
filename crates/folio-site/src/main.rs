//! Entry point for the Folio portfolio site.
//!
//! Loads the site configuration, installs logging and launches the Dioxus
//! desktop window.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;

use folio_core::{Route, SiteConfig, SiteContent};
use folio_logging::{FolioSubscriberBuilder, LogConfig};
use folio_site::SITE_CSS;
use folio_site::components::RootApp;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Personal portfolio site")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View to open first, by path (e.g. /projects)
    #[arg(short, long)]
    route: Option<String>,

    /// Directory for preferences and logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Debug-level console output, no log files
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SiteConfig::load(args.config.as_deref()).context("loading site config")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = args.route.as_deref() {
        config.initial_route = Route::resolve(path);
    }
    config.ephemeral |= args.ephemeral;

    let log_config = if args.verbose {
        LogConfig::development()
    } else {
        LogConfig::production(config.log_dir())
    };
    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(log_config)
        .init()
        .context("installing logging")?;

    let profile = &SiteContent::builtin().profile;
    info!(
        route = %config.initial_route,
        data_dir = %config.data_dir.display(),
        ephemeral = config.ephemeral,
        "Starting Folio"
    );

    let window = config.window;
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{} | Portfolio", profile.name))
                        .with_inner_size(LogicalSize::new(window.width, window.height))
                        .with_maximized(window.maximized),
                )
                .with_custom_head(format!(
                    r#"
                    <meta name="viewport" content="width=device-width, initial-scale=1">
                    <style>{}</style>
                    "#,
                    SITE_CSS
                )),
        )
        .with_context(config)
        .launch(RootApp);

    Ok(())
}
