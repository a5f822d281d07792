//! Floating trigger: a small draggable always-on-top button that re-invokes
//! the translate action while the main window is hidden.

use eframe::egui;

const TRIGGER_SIZE: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    None,
    Translate,
}

/// Declares the trigger viewport and reports whether it was clicked this
/// frame. A press-drag moves the window instead of triggering.
pub fn show_trigger(ctx: &egui::Context) -> TriggerEvent {
    let builder = egui::ViewportBuilder::default()
        .with_title("surtitre")
        .with_position(egui::pos2(50.0, 50.0))
        .with_inner_size(egui::vec2(TRIGGER_SIZE, TRIGGER_SIZE))
        .with_decorations(false)
        .with_always_on_top()
        .with_taskbar(false);

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("floating-trigger"),
        builder,
        |ctx, _class| {
            let mut event = TriggerEvent::None;
            egui::CentralPanel::default().show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("🎯").size(24.0));
                let response = ui.add_sized(ui.available_size(), button);
                if response.clicked() {
                    event = TriggerEvent::Translate;
                } else if response.drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
            });
            event
        },
    )
}
