// src/config/state.rs
use super::consts::{DATA_DIR, DEFAULT_ALPHA0};
use super::options::AppOptions;
use crate::stats::Judgement;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Evaluation page -> only rows with this judgement (None = all)
    pub judgement_filter: Option<Judgement>,

    /// Upload page -> text box contents and its own smoothing strength
    pub upload_path: String,
    pub upload_alpha0: f64,

    /// Export directory text box
    pub export_dir: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            judgement_filter: None,
            upload_path: s!(),
            upload_alpha0: DEFAULT_ALPHA0,
            export_dir: s!(DATA_DIR),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
