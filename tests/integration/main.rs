//! Integration tests for collection and update runs
//!
//! These tests use wiremock to serve listing pages, article pages and feeds,
//! and run the collectors end-to-end against them.

mod common;
mod html_tests;
mod rss_tests;
mod update_tests;
