//! MAAT School - training school dashboard and company showcase.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use maat_school as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use app::config::{self, AppConfig, ConfigLoadResult, StartView};
use app::ui::{App, SetupApp, SetupWizard};

/// Training school dashboard and company showcase.
#[derive(Parser)]
#[command(name = "maat-school")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Face of the application to open first
    #[arg(long, value_enum)]
    view: Option<StartView>,
}

/// Application launch mode.
enum LaunchMode {
    /// Normal operation with valid config.
    Normal(AppConfig),
    /// Sign-up wizard for first run or invalid config.
    Setup(SetupWizard, Option<String>),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging();

    tracing::info!("MAAT School starting...");

    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let launch_mode = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            LaunchMode::Normal(config)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, starting sign-up wizard");
            LaunchMode::Setup(SetupWizard::new(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            LaunchMode::Setup(SetupWizard::new(), Some(e.to_string()))
        }
    };

    match launch_mode {
        LaunchMode::Normal(mut config) => {
            if let Some(view) = cli.view {
                config.ui.start_view = view;
            }
            run_main_app(config, config_path)
        }
        LaunchMode::Setup(wizard, error) => run_setup_wizard(wizard, error, config_path),
    }
}

/// Stderr plus a daily rolling file in the platform data directory.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("maat-school")
        .filename_suffix("log")
        .build(config::log_dir());

    match appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
            tracing::warn!("File logging disabled: {}", e);
            None
        }
    }
}

/// Register the icon font next to the default fonts.
fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Run the sign-up wizard.
fn run_setup_wizard(wizard: SetupWizard, initial_error: Option<String>, config_path: PathBuf) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MAAT School - Inscription")
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([520.0, 460.0])
            .with_resizable(true),
        ..Default::default()
    };

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    eframe::run_native(
        "MAAT School - Inscription",
        options,
        Box::new(|cc| {
            install_fonts(&cc.egui_ctx);
            Ok(Box::new(SetupApp::new(wizard, initial_error, config_path, rt)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Sign-up wizard failed: {e}"))
}

/// Run the main application.
fn run_main_app(config: AppConfig, config_path: PathBuf) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MAAT School")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 620.0]),
        ..Default::default()
    };

    // Runtime for the simulated network requests
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    eframe::run_native(
        "MAAT School",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            install_fonts(&cc.egui_ctx);
            Ok(Box::new(App::new(config, config_path, rt)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application failed: {e}"))
}
