// src/gui/components/sidebar.rs
//
// Run settings, the crawl button and the export controls.

use eframe::egui::{self, ComboBox, DragValue, Slider};

use crate::{
    config::{
        Window,
        consts::{ALPHA0_RANGE, THRESHOLD_RANGE, TOP_K_RANGE},
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Settings");
    ui.add_space(4.0);

    {
        let opts = &mut app.state.options.analysis;

        let prev = opts.window;
        let mut window = prev;
        ComboBox::from_label("Window")
            .selected_text(window.label())
            .show_ui(ui, |ui| {
                for w in Window::ALL {
                    ui.selectable_value(&mut window, w, w.label());
                }
            });
        if window != prev {
            opts.set_window(window);
            logf!("UI: window → {window}");
        }

        ui.label("alpha0 (Dirichlet prior strength)");
        ui.add(DragValue::new(&mut opts.alpha0).range(ALPHA0_RANGE).speed(10.0))
            .on_hover_text("Strength of the uniform 1% prior. Little data → larger alpha0.");

        ui.label("Posterior threshold");
        ui.add(Slider::new(&mut opts.threshold, THRESHOLD_RANGE).step_by(0.001).fixed_decimals(3));

        ui.label("Max suggestions");
        ui.add(Slider::new(&mut opts.top_k, TOP_K_RANGE));
    }

    ui.separator();
    if ui.add_sized([ui.available_width(), 28.0], egui::Button::new("Crawl & analyze")).clicked() {
        actions::crawl_and_analyze(app);
    }

    ui.separator();
    ui.label("Export folder");
    if ui
        .add(egui::TextEdit::singleline(&mut app.state.gui.export_dir).font(egui::TextStyle::Monospace))
        .changed()
    {
        logd!("UI: export_dir → {}", app.state.gui.export_dir);
    }
    let can_export = app.analysis.is_some();
    if ui.add_enabled(can_export, egui::Button::new("Export CSV")).clicked() {
        actions::export(app);
    }
    for path in &app.exported {
        ui.label(egui::RichText::new(path.display().to_string()).small().monospace());
    }
}
