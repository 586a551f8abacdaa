use eframe::egui;
use crate::models::Theme;

pub fn visuals_for(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Header label with the sort arrow, if any.
pub fn header_label(title: &str, arrow: Option<&str>) -> String {
    match arrow {
        Some(arrow) => format!("{} {}", title, arrow),
        None => title.to_string(),
    }
}
