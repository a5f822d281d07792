use clap::Parser;
use eframe::egui;

use surtitre::cli::Args;
use surtitre::ui::App;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "starting surtitre ({} -> {}, ocr language {})",
        args.source_lang,
        args.target_lang,
        args.ocr_lang
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("surtitre")
            .with_position(egui::pos2(200.0, 200.0))
            .with_inner_size(egui::vec2(300.0, 100.0))
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "surtitre",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(&args)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
