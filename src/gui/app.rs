// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{ExportKind, state::AppState},
    model::CrawlResult,
    stats::Analysis,
    store::DataSet,
    upload::UploadAnalysis,
};

use super::{
    actions,
    components::{sidebar, tabs},
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "XSMB Loto – Bayes/Dirichlet",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Contents of one quick-view panel.
#[derive(Clone, Debug)]
pub enum Preview {
    Missing,
    Loaded(DataSet),
    Failed(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // last crawl + analysis run
    pub crawl: Option<CrawlResult>,
    pub analysis: Option<Analysis>,
    pub exported: Vec<PathBuf>,

    // quick view of files already in the data dir
    pub quick_view: Vec<(ExportKind, Preview)>,

    // upload tab
    pub upload: Option<Result<UploadAnalysis, String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            status: Arc::new(Mutex::new(s!("Pick settings in the sidebar, then Crawl & analyze"))),
            crawl: None,
            analysis: None,
            exported: Vec::new(),
            quick_view: Vec::new(),
            upload: None,
        };
        app.state.options.export.set_dir(&app.state.gui.export_dir);
        actions::reload_quick_view(&mut app);
        logf!("Init: window={}, alpha0={}", app.state.options.analysis.window, app.state.options.analysis.alpha0);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("settings")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                sidebar::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt(("page", page.title()))
                .show(ui, |ui| page.draw(ui, self));
        });
    }
}
