// src/scrape/mod.rs
mod crawl;

pub use crawl::{Crawler, crawl, crawl_with, parse_doc};
