// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod state;

pub use options::{AnalysisOptions, AppOptions, ExportKind, ExportOptions, FetchConfig, Window};
pub use state::{AppState, GuiState};
