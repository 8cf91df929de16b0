//! Physics lessons web application.
//!
//! Serves a fixed curriculum of physics lessons as server-rendered pages with
//! previous/next navigation, plus a small JSON API for per-user lesson ratings.
//!
//! - [`curriculum`]: the ordered lesson list and the navigator over it.
//! - [`pages`]: HTML templates, selected by page name.
//! - [`db`]: SQLite-backed ratings store for the [`models`] types.
//! - [`api`]: axum router and handlers.
//! - [`config`]: server configuration from environment and CLI.

pub mod api;
pub mod config;
pub mod curriculum;
pub mod db;
pub mod models;
pub mod pages;
