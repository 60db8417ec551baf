#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod driver;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lovecard_core::content::RECIPIENT;
use lovecard_core::{logging, CardConfig};

/// Effective configuration, set once from the command line
static CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (loaded at startup or defaults)
pub fn card_config() -> CardConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Love Week - a scroll-driven greeting card
#[derive(Parser, Debug)]
#[command(name = "lovecard-desktop")]
#[command(about = "Love Week - a scroll-driven greeting card")]
struct Args {
    /// Config file (default: <config dir>/lovecard/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in px
    #[arg(long)]
    width: Option<f64>,

    /// Window height in px
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> Result<()> {
    logging::init("info");

    let args = Args::parse();

    let mut config = CardConfig::load_or_default(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.validate()?;

    let (window_width, window_height) = (config.window.width, config.window.height);
    let title = format!("Love Week for {}", RECIPIENT);

    tracing::info!(
        width = window_width,
        height = window_height,
        fallback_ms = ?config.barrier_fallback_ms,
        "starting '{}'",
        title
    );

    let _ = CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(window).launch(app::App);
    Ok(())
}
