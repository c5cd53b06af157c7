// src/gui/pages/evaluation.rs
use eframe::egui::{self, ComboBox};

use super::Page;
use crate::gui::{app::App, components::data_table};
use crate::stats::{EvaluatedBucket, Judgement};

const HEADERS: [&str; 12] = [
    "Pair", "Count", "Frequency", "Posterior", "1d", "7d", "30d", "90d", "Post 7d", "Post 30d", "Post 90d", "Judgement",
];

pub struct EvaluationPage;
pub static PAGE: EvaluationPage = EvaluationPage;

fn row(e: &EvaluatedBucket) -> Vec<String> {
    let (b, w) = (&e.bucket, &e.window);
    cells![
        b.cap,
        b.count,
        format!("{:.4}", b.freq),
        format!("{:.6}", b.post_p),
        w.hits_1d,
        w.hits_7d,
        w.hits_30d,
        w.hits_90d,
        format!("{:.6}", w.post_7d),
        format!("{:.6}", w.post_30d),
        format!("{:.6}", w.post_90d),
        e.judgement,
    ]
}

impl Page for EvaluationPage {
    fn title(&self) -> &'static str { "Evaluation" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(a) = app.analysis.as_ref() else {
            ui.label("Run a crawl first; windows of 1, 7, 30 and 90 days are compared here.");
            return;
        };

        let filter = &mut app.state.gui.judgement_filter;
        ComboBox::from_label("Judgement")
            .selected_text(filter.map_or("All", Judgement::label))
            .show_ui(ui, |ui| {
                ui.selectable_value(filter, None, "All");
                for j in Judgement::ALL {
                    ui.selectable_value(filter, Some(j), j.label());
                }
            });

        let rows: Vec<Vec<String>> = a
            .evaluated
            .iter()
            .filter(|e| filter.is_none_or(|j| e.judgement == j))
            .map(row)
            .collect();
        ui.label(format!("{} of {} pairs", rows.len(), a.evaluated.len()));
        data_table::draw(ui, "evaluation", &HEADERS, &rows, 560.0);
    }
}
