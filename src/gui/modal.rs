use eframe::egui;
use crate::gui::app::SpellGridApp;
use crate::utils::CookieStore;

impl<S: CookieStore> SpellGridApp<S> {
    pub fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = &self.modal else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(modal.title.as_str())
            .collapsible(false)
            .resizable(true)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    ui.label(modal.text.as_str());
                });
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modal = None;
        }
    }
}
