//! Application shell: main window, minimize handling, and the single
//! top-level error handler for the translate pipeline.

use eframe::egui;
use log::{error, info};

use surtitre_ocr::{OcrEngine, TesseractEngine};

use crate::capture::{PrimaryScreen, ScreenSource};
use crate::cli::Args;
use crate::session::Session;
use crate::translate::{GoogleTranslator, Translator};

use super::chrome::Chrome;
use super::trigger::TriggerEvent;
use super::{overlay, trigger};

pub struct App {
    session: Session,
    chrome: Chrome,
    screen: Box<dyn ScreenSource>,
    ocr: Box<dyn OcrEngine>,
    translator: Box<dyn Translator>,
    ocr_language: String,
}

impl App {
    pub fn new(args: &Args) -> Self {
        Self {
            session: Session::new(),
            chrome: Chrome::default(),
            screen: Box::new(PrimaryScreen::new()),
            ocr: Box::new(TesseractEngine::new()),
            translator: Box::new(GoogleTranslator::new(&args.source_lang, &args.target_lang)),
            ocr_language: args.ocr_lang.clone(),
        }
    }

    /// Runs one translate pass. Everything happens synchronously on the UI
    /// thread, including the per-line network calls; errors are shown in a
    /// blocking dialog and the already-created overlays stay on screen.
    fn run_translate(&mut self) {
        self.chrome.on_activated();
        info!("translate action triggered");

        let result = self.session.translate_screen(
            self.screen.as_ref(),
            self.ocr.as_ref(),
            self.translator.as_ref(),
            &self.ocr_language,
        );

        if let Err(e) = result {
            error!("translate operation failed: {e}");
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("surtitre")
                .set_description(format!("The translate operation failed:\n\n{e}"))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().minimized.unwrap_or(false)) {
            self.chrome.on_minimized();
            // Come back next frame for the deferred hide.
            ctx.request_repaint();
        }
        if self.chrome.take_pending_hide() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        }

        if !self.chrome.main_hidden() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    let button = egui::Button::new("Translate screen");
                    if ui.add_sized(egui::vec2(200.0, 60.0), button).clicked() {
                        self.run_translate();
                    }
                });
            });
        }

        if self.chrome.trigger_visible() && trigger::show_trigger(ctx) == TriggerEvent::Translate {
            self.run_translate();
        }

        overlay::show_overlays(ctx, self.session.overlays());
    }
}
