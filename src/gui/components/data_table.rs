// src/gui/components/data_table.rs
//
// Read-only grid for string rows. Purely a view.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

const ROW_H: f32 = 18.0;

pub fn draw<H: AsRef<str>>(ui: &mut egui::Ui, id: &str, headers: &[H], rows: &[Vec<String>], max_height: f32) {
    if headers.is_empty() {
        return;
    }
    let cols = headers.len();

    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .id_salt(("table_state", id))
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(48.0).clip(true), cols)
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .header(22.0, |mut header| {
                for h in headers {
                    header.col(|ui| {
                        ui.label(RichText::new(h.as_ref()).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_H, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for ci in 0..cols {
                        row.col(|ui| {
                            ui.label(cells.get(ci).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            });
    });
}
