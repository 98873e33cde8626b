// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications for the Jonas catalog. Each spec
//! focuses on a single page and encodes *where the ground truth lives in
//! the HTML* and *how to extract it robustly*.
//!
//! - **Pure HTML parsing** with the tolerant `core::html` helpers:
//!   case-insensitive tag blocks, labelled sibling-pair lookup, entity and
//!   whitespace normalization. No full-document regexes.
//! - **Caching/persistence and aggregation do not live here** — that is
//!   `store` and `scrape::collect_manuscripts`.
//! - Specs are testable **offline** against captured fixtures; the network
//!   touch-point is a single `fetch_and_extract` per spec.
pub mod manuscript;
