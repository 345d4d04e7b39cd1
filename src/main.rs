#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use membercard_core::CardConfig;
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "membercard_desktop=info,membercard_core=info";

/// Global card configuration, set from command line
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (loaded from --config or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Member Card - animated glass card demo
#[derive(Parser, Debug)]
#[command(name = "membercard-desktop")]
#[command(about = "Member Card - pointer-tracked holographic card")]
struct Args {
    /// JSON card configuration (layout, palette, content); missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 640.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CardConfig::load(path)
            .with_context(|| format!("Failed to load card config from {}", path.display()))?,
        None => CardConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    tracing::info!(
        holder = %config.content.holder_name,
        tier = %config.content.tier,
        "Starting member card"
    );

    // Store config globally for the root component
    let _ = CARD_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Member Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
