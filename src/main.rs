use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spell_grid::utils::{load_bundled_spells, FileCookieStore, Preferences};
use spell_grid::SpellGridApp;

fn main() -> Result<(), Box<dyn Error>> {
    // Logging, overridable through RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spell_grid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The dataset is read once and never mutated.
    let spells = load_bundled_spells();
    // Saved theme and columns are only read back if the user opted in
    let preferences = Preferences::load(FileCookieStore::default());

    // Window setup

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([640.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    // Start the UI
    eframe::run_native(
        "5e Spell Table",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SpellGridApp::new(&spells, preferences)))),
    )?;

    Ok(())
}
