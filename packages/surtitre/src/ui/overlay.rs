//! Overlay viewports: one borderless always-on-top window per translated
//! line, positioned exactly over the original text.

use eframe::egui;

use crate::session::Overlay;

const TEXT_SIZE: f32 = 16.0;

fn fill_color() -> egui::Color32 {
    // Pale yellow, mostly opaque, so the translation stays legible against
    // arbitrary backgrounds.
    egui::Color32::from_rgba_unmultiplied(255, 255, 200, 200)
}

/// Declares one viewport per overlay. Immediate viewports close as soon as
/// they stop being declared, so clearing the session's overlay collection is
/// enough to take every window off screen on the next frame.
pub fn show_overlays(ctx: &egui::Context, overlays: &[Overlay]) {
    // Fragment geometry is in physical screen pixels; viewports are placed
    // in logical points.
    let scale = ctx.pixels_per_point();

    for (index, overlay) in overlays.iter().enumerate() {
        let bbox = overlay.bounding_box;
        let position = egui::pos2(bbox.x as f32 / scale, bbox.y as f32 / scale);
        let size = egui::vec2(bbox.width as f32 / scale, bbox.height as f32 / scale);

        let builder = egui::ViewportBuilder::default()
            .with_title("surtitre overlay")
            .with_position(position)
            .with_inner_size(size)
            .with_decorations(false)
            .with_always_on_top()
            .with_transparent(true)
            .with_mouse_passthrough(true)
            .with_taskbar(false);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of(("overlay", index)),
            builder,
            |ctx, _class| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::new().fill(fill_color()))
                    .show(ctx, |ui| {
                        ui.label(
                            egui::RichText::new(&overlay.text)
                                .color(egui::Color32::BLACK)
                                .size(TEXT_SIZE),
                        );
                    });
            },
        );
    }
}
