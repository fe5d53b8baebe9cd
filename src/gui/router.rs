// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::explorer::PAGE,
    &pages::domains::PAGE,
    &pages::skills::PAGE,
    &pages::trends::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: &PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == *kind).unwrap_or(0)
}
