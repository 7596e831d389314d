mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::EuroDashApp;
use eframe::egui;
use state::AppState;

/// Bundled Eurostat extract (regenerate with `cargo run --bin generate_sample`).
const DATA_PATH: &str = "data/nama_10_gdp_1_Data.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_dataset(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    let state = AppState::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EuroDash – Eurostat GDP components",
        options,
        Box::new(move |_cc| Ok(Box::new(EuroDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
