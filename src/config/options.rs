// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub fetch: FetchConfig,
    pub analysis: AnalysisOptions,
    pub export: ExportOptions,
}

/// Fetch settings honor the `XSMB_*` environment overrides.
impl Default for AppOptions {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppOptions {
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            fetch: FetchConfig::from_lookup(lookup),
            analysis: AnalysisOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Which results page to crawl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Window {
    #[default]
    Days60,
    Days90,
}

impl Window {
    pub const ALL: [Window; 2] = [Window::Days60, Window::Days90];

    pub fn days(self) -> usize {
        match self {
            Window::Days60 => 60,
            Window::Days90 => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Window::Days60 => "60 days",
            Window::Days90 => "90 days",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "60" => Ok(Window::Days60),
            "90" => Ok(Window::Days90),
            other => Err(Error::UnknownWindow(s!(other))),
        }
    }
}

/// Where and how pages are fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchConfig {
    pub url_60: String,
    pub url_90: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_60: s!(URL_60),
            url_90: s!(URL_90),
            headers: vec![(s!("User-Agent"), s!(USER_AGENT))],
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    pub fn url_for(&self, window: Window) -> &str {
        match window {
            Window::Days60 => &self.url_60,
            Window::Days90 => &self.url_90,
        }
    }

    /// Defaults, overridden by `XSMB_URL_60`, `XSMB_URL_90` and `XSMB_TIMEOUT_SECS`.
    /// A timeout that does not parse as whole seconds is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = lookup(ENV_URL_60).filter(|u| !u.trim().is_empty()) {
            cfg.url_60 = url;
        }
        if let Some(url) = lookup(ENV_URL_90).filter(|u| !u.trim().is_empty()) {
            cfg.url_90 = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|t| t.trim().parse::<u64>().ok()) {
            cfg.timeout = Duration::from_secs(secs);
        }
        cfg
    }
}

/// Knobs for one crawl + analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub window: Window,
    pub max_days: usize,
    pub alpha0: f64,
    pub threshold: f64,
    pub top_k: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window: Window::default(),
            max_days: DEFAULT_MAX_DAYS,
            alpha0: DEFAULT_ALPHA0,
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AnalysisOptions {
    /// Switch window; the day cap follows it.
    pub fn set_window(&mut self, window: Window) {
        self.window = window;
        self.max_days = window.days();
    }

    /// Pull values back into the ranges the sliders offer.
    pub fn clamp(&mut self) {
        self.alpha0 = self.alpha0.clamp(*ALPHA0_RANGE.start(), *ALPHA0_RANGE.end());
        self.threshold = self.threshold.clamp(*THRESHOLD_RANGE.start(), *THRESHOLD_RANGE.end());
        self.top_k = self.top_k.clamp(*TOP_K_RANGE.start(), *TOP_K_RANGE.end());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Ranked,
    Full,
    Evaluated,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [ExportKind::Ranked, ExportKind::Full, ExportKind::Evaluated];

    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Ranked => RANKED_FILE,
            ExportKind::Full => FULL_FILE,
            ExportKind::Evaluated => EVALUATED_FILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Ranked => "Ranked",
            ExportKind::Full => "Full",
            ExportKind::Evaluated => "Evaluated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DATA_DIR) }
    }
}

impl ExportOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: ExportKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Parse GUI text into the output directory. Blank text restores the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.dir = if s.is_empty() { PathBuf::from(DATA_DIR) } else { PathBuf::from(s) };
    }
}
