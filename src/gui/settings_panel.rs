use eframe::egui;
use crate::gui::app::SpellGridApp;
use crate::models::codes::CodeTable;
use crate::models::{Column, Theme};
use crate::utils::CookieStore;

impl<S: CookieStore> SpellGridApp<S> {
    pub fn show_settings_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("settings_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("X").clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.separator();

                egui::CollapsingHeader::new("Cookies").default_open(true).show(ui, |ui| {
                    let use_cookies = self.preferences.use_cookies();
                    ui.horizontal(|ui| {
                        if ui.add_enabled(!use_cookies, egui::Button::new("Enable")).clicked() {
                            self.preferences.enable_cookies();
                        }
                        if ui.add_enabled(use_cookies, egui::Button::new("Disable")).clicked() {
                            self.preferences.disable_cookies();
                        }
                    });
                    if !self.preferences.cookies_available() {
                        ui.small("Cookies are unavailable; settings last for this session only.");
                    }
                });

                egui::CollapsingHeader::new("Theme").default_open(true).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for theme in Theme::all() {
                            let current = self.preferences.theme() == *theme;
                            if ui.add_enabled(!current, egui::Button::new(theme.display_name())).clicked() {
                                self.preferences.set_theme(*theme);
                            }
                        }
                    });
                });

                egui::CollapsingHeader::new("Columns").default_open(true).show(ui, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for column in Column::all() {
                            let mut shown = self.preferences.columns().is_shown(*column);
                            if ui.checkbox(&mut shown, column.display_name()).changed() {
                                self.preferences.toggle_column(*column);
                            }
                        }
                        if ui.button("Show all").clicked() {
                            self.preferences.reset_columns();
                        }
                    });
                });
            });
    }
}
