#![allow(non_snake_case)]

mod app;
mod components;
mod document_root;
mod mail_client;
mod sections;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use portfolio_core::{SiteContent, Theme};
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Prince Akowe | Portfolio";

/// Theme the page starts in, set from command line
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Starting theme (light unless `--dark` was passed)
pub fn initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

/// Phoenix - Prince Akowe's portfolio
#[derive(Parser, Debug)]
#[command(name = "phoenix-portfolio")]
#[command(about = "Single-page portfolio of Prince Akowe, frontend developer")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Navigation to a missing anchor fails silently in the page
    SiteContent::default()
        .validate()
        .context("site content is inconsistent")?;

    let theme = args.theme();
    let _ = INITIAL_THEME.set(theme);

    tracing::info!(%theme, width = args.width, height = args.height, "Starting portfolio");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
