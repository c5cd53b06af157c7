// src/parse/mod.rs
//! Page → per-table tail lists.

pub mod classify;
pub mod day_key;
pub mod document;
pub mod extract;
pub mod normalize;
pub mod patterns;
pub mod table;

pub use classify::{TableKind, classify};
pub use day_key::DayKeyResolver;
pub use document::Document;
pub use extract::extract_pairs;
pub use normalize::{Rejected, normalize_day};
pub use patterns::Patterns;
pub use table::Table;
