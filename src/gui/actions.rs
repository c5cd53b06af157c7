// src/gui/actions.rs
//
// Button handlers. Everything runs on the UI thread; the crawl blocks until
// the page is fetched and parsed.

use std::path::Path;

use crate::{
    config::{ExportKind, consts::QUICK_VIEW_ROWS},
    export,
    gui::{app::{App, Preview}, progress::GuiProgress},
    core::HttpFetcher,
    scrape::crawl_with,
    stats::analyze,
    store, upload,
};

pub fn crawl_and_analyze(app: &mut App) {
    app.state.options.analysis.clamp();
    let opts = app.state.options.analysis.clone();
    let fetch = app.state.options.fetch.clone();
    logf!("Crawl: Begin window={} max_days={} alpha0={}", opts.window, opts.max_days, opts.alpha0);

    let mut prog = GuiProgress::new(app.status.clone());
    let res = HttpFetcher::new(&fetch)
        .and_then(|f| crawl_with(&f, &fetch, opts.window, opts.max_days, Some(&mut prog)));

    match res {
        Ok(days) => {
            let analysis = analyze(&days, opts.alpha0);
            app.crawl = Some(days);
            app.analysis = Some(analysis);
            // every run is written to the data dir
            export(app);
        }
        Err(e) => {
            loge!("Crawl: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn export(app: &mut App) {
    let Some(analysis) = app.analysis.as_ref() else {
        app.status("Nothing to export yet");
        return;
    };
    app.state.options.export.set_dir(&app.state.gui.export_dir);

    match export::export_analysis(analysis, &app.state.options.export) {
        Ok(paths) => {
            app.status(format!("Saved {} files to {}", paths.len(), app.state.options.export.dir().display()));
            app.exported = paths;
            reload_quick_view(app);
        }
        Err(e) => {
            loge!("Export: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}

pub fn reload_quick_view(app: &mut App) {
    let opts = &app.state.options.export;
    app.quick_view = [ExportKind::Ranked, ExportKind::Full]
        .into_iter()
        .map(|kind| (kind, preview(&opts.path_for(kind))))
        .collect();
}

fn preview(path: &Path) -> Preview {
    match store::load_preview(path, QUICK_VIEW_ROWS) {
        Ok(Some(ds)) => Preview::Loaded(ds),
        Ok(None) => Preview::Missing,
        Err(e) => {
            loge!("Quick view: {}: {e}", path.display());
            Preview::Failed(e.to_string())
        }
    }
}

pub fn analyze_upload(app: &mut App) {
    let text = app.state.gui.upload_path.trim().to_string();
    if text.is_empty() {
        app.status("Enter the path of a CSV with cap and count columns");
        return;
    }
    let alpha0 = app.state.gui.upload_alpha0;
    let res = upload::load_counts(Path::new(&text)).map(|t| upload::analyze_upload(t, alpha0));
    match &res {
        Ok(u) => app.status(format!("Analyzed {text} (N={})", u.total)),
        Err(e) => {
            logw!("Upload: {text}: {e}");
            app.status(format!("Upload rejected: {e}"));
        }
    }
    app.upload = Some(res.map_err(|e| e.to_string()));
}
