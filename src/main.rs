#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Catalog endpoint, set from command line
static CATALOG_ENDPOINT: OnceLock<String> = OnceLock::new();

/// Get the catalog endpoint (set from command line or default)
pub fn get_catalog_endpoint() -> String {
    CATALOG_ENDPOINT
        .get()
        .cloned()
        .unwrap_or_else(|| storefront_core::DEFAULT_ENDPOINT.to_string())
}

/// Storefront - Product Catalog Browser
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "Storefront - browse a remote product catalog")]
struct Args {
    /// Catalog endpoint URL (override to point at a mock or staging server)
    #[arg(short, long)]
    endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(endpoint) = args.endpoint {
        let _ = CATALOG_ENDPOINT.set(endpoint);
    }

    tracing::info!("Starting Storefront with catalog endpoint: {}", get_catalog_endpoint());

    // Wide enough for the four-column grid
    let window_width = 1280.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Storefront")
                .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
                .with_resizable(true)
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
