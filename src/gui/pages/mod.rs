// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod analysis;
pub mod evaluation;
pub mod quick_view;
pub mod upload;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}

pub(crate) const BUCKET_HEADERS: [&str; 4] = ["Pair", "Count", "Frequency", "Posterior"];

pub(crate) fn bucket_rows<'a>(rows: impl IntoIterator<Item = &'a crate::stats::Bucket>) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|b| cells![b.cap, b.count, format!("{:.4}", b.freq), format!("{:.6}", b.post_p)])
        .collect()
}
