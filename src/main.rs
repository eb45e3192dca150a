mod app;
mod chart;
mod cli;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use clap::Parser;
use eframe::egui;

use crate::cli::Args;
use crate::config::{WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let dataset = data::loader::load_file(&args.data)
        .with_context(|| format!("cannot start without launch data ({})", args.data.display()))?;
    let bounds = dataset.bounds();
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        args.data.display(),
        dataset.sites().len(),
        bounds.min,
        bounds.max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
