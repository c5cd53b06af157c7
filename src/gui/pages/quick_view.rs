// src/gui/pages/quick_view.rs
use eframe::egui::{self, RichText};

use super::Page;
use crate::config::consts::QUICK_VIEW_ROWS;
use crate::gui::{actions, app::{App, Preview}, components::data_table};

pub struct QuickViewPage;
pub static PAGE: QuickViewPage = QuickViewPage;

impl Page for QuickViewPage {
    fn title(&self) -> &'static str { "Quick view" }

    fn on_enter(&self, app: &mut App) {
        actions::reload_quick_view(app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "First {QUICK_VIEW_ROWS} rows of the CSV files saved in {}",
                app.state.options.export.dir().display()
            ));
            if ui.button("Reload").clicked() {
                actions::reload_quick_view(app);
            }
        });
        ui.separator();

        let warn = ui.visuals().warn_fg_color;
        let dir = app.state.options.export.dir().to_path_buf();
        ui.columns(app.quick_view.len().max(1), |cols| {
            for (ui, (kind, preview)) in cols.iter_mut().zip(&app.quick_view) {
                let file = kind.file_name();
                match preview {
                    Preview::Loaded(ds) if ds.is_empty() => {
                        ui.label(RichText::new(format!("{} has a header but no rows.", dir.join(file).display())).color(warn));
                    }
                    Preview::Loaded(ds) => {
                        ui.label(format!("Found {}", dir.join(file).display()));
                        data_table::draw(ui, file, &ds.headers, &ds.rows, 420.0);
                    }
                    Preview::Missing => {
                        ui.label(RichText::new(format!("{} has not been exported yet.", dir.join(file).display())).color(warn));
                    }
                    Preview::Failed(e) => {
                        ui.label(RichText::new(format!("Could not read {file}: {e}")).color(warn));
                    }
                }
            }
        });
    }
}
