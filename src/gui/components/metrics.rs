// src/gui/components/metrics.rs
use eframe::egui::{self, RichText};

use crate::config::consts::SIGNIFICANCE_LEVEL;
use crate::stats::GoodnessOfFit;

/// Label over a large value.
pub fn metric(ui: &mut egui::Ui, label: &str, value: impl Into<String>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small());
            ui.label(RichText::new(value.into()).strong().size(20.0));
        });
    });
}

/// Days / N / χ² / p-value cards plus the reading hint.
pub fn summary(ui: &mut egui::Ui, days: Option<usize>, total: u64, fit: &GoodnessOfFit) {
    ui.horizontal_wrapped(|ui| {
        if let Some(days) = days {
            metric(ui, "Days collected", days.to_string());
        }
        metric(ui, "Total pairs (N)", total.to_string());
        metric(ui, "Chi-square", format!("{:.2}", fit.statistic));
        metric(ui, "p-value", format!("{:.6}", fit.p_value));
    });

    let verdict = if fit.is_significant() {
        "counts deviate significantly from uniform"
    } else {
        "counts look close to random"
    };
    ui.label(
        RichText::new(format!(
            "Reference: about 1% per pair 00–99. p-value < {SIGNIFICANCE_LEVEL} means a significant deviation; here {verdict}."
        ))
        .small()
        .weak(),
    );
}
