use eframe::egui;
use crate::gui::grid::{CellModal, SpellGrid};
use crate::gui::helpers::visuals_for;
use crate::gui::table_view::GridAction;
use crate::models::{build_rows, SpellRecord, Theme};
use crate::utils::{CookieStore, FileCookieStore, Preferences};

pub struct SpellGridApp<S: CookieStore = FileCookieStore> {
    /// Rows, filters and sort state
    pub grid: SpellGrid,
    /// Theme, column visibility and cookie opt-in
    pub preferences: Preferences<S>,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Long-text cell currently shown in the modal
    pub modal: Option<CellModal>,
    /// Theme last pushed to the egui context
    applied_theme: Option<Theme>,
}

impl<S: CookieStore> SpellGridApp<S> {
    pub fn new(spells: &[SpellRecord], preferences: Preferences<S>) -> Self {
        Self {
            grid: SpellGrid::new(build_rows(spells)),
            preferences,
            show_settings: false,
            modal: None,
            applied_theme: None,
        }
    }

    pub fn apply_action(&mut self, action: GridAction) {
        // Header, filter menu and row interactions collected during the last frame
        match action {
            GridAction::CycleSort(column) => self.grid.cycle_sort(column),
            GridAction::ToggleFilter(column, code) => {
                if let Some(filter) = self.grid.filter_mut(column) {
                    filter.toggle(code);
                }
            }
            GridAction::SelectAll(column) => {
                if let Some(filter) = self.grid.filter_mut(column) {
                    filter.select_all();
                }
            }
            GridAction::SelectNone(column) => {
                if let Some(filter) = self.grid.filter_mut(column) {
                    filter.select_none();
                }
            }
            GridAction::ToggleRow(index) => self.grid.toggle_row_selection(index),
            GridAction::OpenModal(index, column) => {
                if let Some(modal) = self.grid.modal_for_cell(index, column) {
                    self.modal = Some(modal);
                }
            }
        }
        // Re-filter and re-sort before the next frame reads the rows
        self.grid.refresh();
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let theme = self.preferences.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(visuals_for(theme));
            self.applied_theme = Some(theme);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Spells");
                ui.separator();

                let total = self.grid.rows().len();
                let visible = self.grid.visible_rows().len();
                ui.label(format!("Showing {} of {}", visible, total));

                let selected = self.grid.selected_rows().len();
                if selected > 0 {
                    ui.label(format!("({} selected)", selected));
                }

                // Restoring an empty model set resets every filter to all selected
                if ui.add_enabled(self.grid.is_any_filter_active(), egui::Button::new("Clear filters")).clicked() {
                    self.grid.set_filter_models(Default::default());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
        });
    }
}

impl<S: CookieStore> eframe::App for SpellGridApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme changes from the settings panel
        self.sync_theme(ctx);
        self.show_top_bar(ctx);

        if self.show_settings {
            self.show_settings_panel(ctx);
        }

        // Draw the table, then apply what the user clicked
        let actions = egui::CentralPanel::default().show(ctx, |ui| self.show_table(ui)).inner;
        for action in actions {
            self.apply_action(action);
        }

        // Long-text modal sits above everything else
        self.show_modal(ctx);
    }
}
