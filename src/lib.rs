// src/lib.rs
//! XSMB loto tails: crawl the results page, reduce each drawing to its
//! two-digit tails, then smooth, test, rank and compare windows.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod gui;
pub mod model;
pub mod parse;
pub mod progress;
pub mod scrape;
pub mod stats;
pub mod store;
pub mod upload;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
mod display;

pub use config::Window;
pub use error::{Error, Result};
pub use model::{CrawlResult, DayRecord, Tail};
pub use scrape::{Crawler, crawl, crawl_with, parse_doc};
pub use stats::{
    Analysis, FrequencyTable, GoodnessOfFit, analyze, chi_square_test, counts_from_days, dirichlet_smoothing,
    evaluate_numbers, rank,
};
