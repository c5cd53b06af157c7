// src/gui/pages/analysis.rs
use eframe::egui;

use super::{BUCKET_HEADERS, Page, bucket_rows};
use crate::gui::{app::App, components::{data_table, metrics}};
use crate::model::CrawlResult;

/// `newest … oldest` keys of the crawl, as the page listed them.
pub(crate) fn day_span(days: &CrawlResult) -> Option<String> {
    let first = days.days().first()?;
    let last = days.days().last()?;
    Some(format!("Days {} … {}", first.key(), last.key()))
}

pub struct AnalysisPage;
pub static PAGE: AnalysisPage = AnalysisPage;

impl Page for AnalysisPage {
    fn title(&self) -> &'static str { "Analysis" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(a) = app.analysis.as_ref() else {
            ui.label("Choose settings in the sidebar, then press Crawl & analyze.");
            return;
        };

        metrics::summary(ui, Some(a.days), a.total, &a.fit);
        if let Some(span) = app.crawl.as_ref().and_then(day_span) {
            ui.label(span);
        }
        ui.add_space(8.0);

        let opts = &app.state.options.analysis;
        ui.heading("Top suggestions by posterior");
        let picks = a.suggestions(opts.threshold, opts.top_k);
        if picks.is_empty() {
            ui.label(format!("No pair reaches a posterior of {:.3}.", opts.threshold));
        } else {
            data_table::draw(ui, "suggestions", &BUCKET_HEADERS, &bucket_rows(&picks), 320.0);
        }

        ui.add_space(8.0);
        ui.collapsing("Full table 00–99", |ui| {
            data_table::draw(ui, "ranked_full", &BUCKET_HEADERS, &bucket_rows(a.ranked.rows()), 480.0);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayRecord;

    #[test]
    fn day_span_names_first_and_last_keys() {
        assert_eq!(day_span(&CrawlResult::new()), None);
        let days: CrawlResult = ["12-05-2025", "11-05-2025", "10-05-2025"]
            .into_iter()
            .map(|k| DayRecord::new(k, Vec::new()))
            .collect();
        assert_eq!(day_span(&days).as_deref(), Some("Days 12-05-2025 … 10-05-2025"));
    }
}
