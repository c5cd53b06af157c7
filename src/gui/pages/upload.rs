// src/gui/pages/upload.rs
use eframe::egui::{self, DragValue, RichText};

use super::{BUCKET_HEADERS, Page, bucket_rows};
use crate::config::consts::ALPHA0_RANGE;
use crate::gui::{actions, app::App, components::{data_table, metrics}};

pub struct UploadPage;
pub static PAGE: UploadPage = UploadPage;

impl Page for UploadPage {
    fn title(&self) -> &'static str { "Upload & analyze" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Analyze your own CSV (needs at least the columns cap and count).");

        let mut run = false;
        ui.horizontal(|ui| {
            ui.label("File:");
            let edit = ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.upload_path)
                    .hint_text("path/to/counts.csv")
                    .desired_width(320.0),
            );
            run |= edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.label("alpha0:");
            ui.add(DragValue::new(&mut app.state.gui.upload_alpha0).range(ALPHA0_RANGE).speed(10.0));
            run |= ui.button("Analyze").clicked();
        });
        if run {
            actions::analyze_upload(app);
        }

        match &app.upload {
            None => {}
            Some(Err(e)) => {
                ui.label(RichText::new(e).color(ui.visuals().error_fg_color));
            }
            Some(Ok(u)) => {
                ui.add_space(6.0);
                metrics::summary(ui, None, u.total, &u.fit);
                ui.add_space(6.0);
                data_table::draw(ui, "upload_ranked", &BUCKET_HEADERS, &bucket_rows(u.ranked.rows()), 480.0);
            }
        }
    }
}
