// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::analysis::PAGE,
    &pages::evaluation::PAGE,
    &pages::quick_view::PAGE,
    &pages::upload::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_at(idx: usize) -> &'static dyn Page {
    PAGES.get(idx).copied().unwrap_or(PAGES[0])
}
