use eframe::egui;
use egui_extras::{Column as TableColumn, TableBuilder};
use crate::gui::app::SpellGridApp;
use crate::gui::grid::{cell_text, SortDirection};
use crate::gui::helpers::header_label;
use crate::models::codes::CodeTable;
use crate::models::Column;
use crate::utils::CookieStore;

/// User interaction collected while drawing the table and applied after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    CycleSort(Column),
    ToggleFilter(Column, i64),
    SelectAll(Column),
    SelectNone(Column),
    ToggleRow(usize),
    OpenModal(usize, Column),
}

impl<S: CookieStore> SpellGridApp<S> {
    pub fn show_table(&mut self, ui: &mut egui::Ui) -> Vec<GridAction> {
        let mut actions = Vec::new();
        let columns = self.preferences.columns().shown();
        let visible = self.grid.visible_rows().to_vec();
        let grid = &self.grid;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(TableColumn::exact(28.0));
        for column in &columns {
            table = table.column(TableColumn::initial(column.initial_width()).at_least(40.0).clip(true));
        }

        table
            .header(26.0, |mut header| {
                header.col(|_ui| {});
                for column in &columns {
                    header.col(|ui| {
                        let arrow = match grid.sort() {
                            Some(sort) if sort.column == *column => Some(match sort.direction {
                                SortDirection::Ascending => "▲",
                                SortDirection::Descending => "▼",
                            }),
                            _ => None,
                        };
                        let title = header_label(column.display_name(), arrow);
                        if ui.add(egui::Button::new(egui::RichText::new(title).strong()).frame(false)).clicked() {
                            actions.push(GridAction::CycleSort(*column));
                        }

                        if let Some(filter) = grid.filter(*column) {
                            let icon = if filter.is_filter_active() { "⏷●" } else { "⏷" };
                            ui.menu_button(icon, |ui| {
                                ui.set_min_width(160.0);
                                for option in filter.options() {
                                    let mut checked = option.checked;
                                    if ui.checkbox(&mut checked, option.label).changed() {
                                        actions.push(GridAction::ToggleFilter(*column, option.code));
                                    }
                                }
                                ui.separator();
                                ui.horizontal(|ui| {
                                    if ui.button("All").clicked() {
                                        actions.push(GridAction::SelectAll(*column));
                                    }
                                    if ui.button("None").clicked() {
                                        actions.push(GridAction::SelectNone(*column));
                                    }
                                });
                            });
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(22.0, visible.len(), |mut table_row| {
                    let index = visible[table_row.index()];
                    let Some(row) = grid.row(index) else {
                        return;
                    };

                    table_row.col(|ui| {
                        let mut selected = grid.is_row_selected(index);
                        if ui.checkbox(&mut selected, "").changed() {
                            actions.push(GridAction::ToggleRow(index));
                        }
                    });

                    for column in &columns {
                        table_row.col(|ui| {
                            let text = cell_text(row, *column);
                            match (column, &row.link) {
                                (Column::Name, Some(link)) => {
                                    ui.hyperlink_to(text, link);
                                }
                                _ if column.opens_modal() && !text.is_empty() => {
                                    let response = ui
                                        .add(egui::Label::new(text).truncate().sense(egui::Sense::click()))
                                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                                    if response.clicked() {
                                        actions.push(GridAction::OpenModal(index, *column));
                                    }
                                }
                                _ => {
                                    ui.add(egui::Label::new(text).truncate());
                                }
                            }
                        });
                    }
                });
            });

        if visible.is_empty() {
            ui.add_space(8.0);
            if grid.rows().is_empty() {
                ui.label("No spell data available");
            } else {
                ui.label("No spells match the current filters");
            }
        }

        actions
    }
}
