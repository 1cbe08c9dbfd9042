use eframe::egui;

use crate::host::DrawSurface;
use crate::notification::Rgb;
use crate::panel::OverlayPanel;

/// [`DrawSurface`] backed by an egui `Ui`. Each text run becomes a colored
/// label; a pending scroll request moves the enclosing scroll area to the
/// cursor, which sits after the newest message.
pub struct EguiSurface<'a> {
    ui: &'a mut egui::Ui,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ui: &'a mut egui::Ui) -> Self {
        Self { ui }
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn text_run(&mut self, text: &str, color: Rgb) {
        let color = egui::Color32::from_rgb(color.r, color.g, color.b);
        self.ui.label(egui::RichText::new(text).color(color));
    }

    fn scroll_to_bottom(&mut self) {
        self.ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
    }
}

/// Draw the panel as a fixed borderless window at its configured rectangle.
/// Call once per frame from the egui update loop; hidden panels draw
/// nothing.
pub fn show(panel: &OverlayPanel, ctx: &egui::Context) {
    if !panel.is_visible() {
        return;
    }
    let r = panel.rect();
    let rect = egui::Rect::from_min_max(
        egui::pos2(r.left as f32, r.top as f32),
        egui::pos2(r.right as f32, r.bottom as f32),
    );
    egui::Window::new("notifications")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_rect(rect)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let mut surface = EguiSurface::new(ui);
                    panel.build_interface(&mut surface);
                });
        });
}
