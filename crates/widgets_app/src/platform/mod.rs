//! Terminal shell hosting one widget at a time.
mod app;
mod effects;
mod ui;

pub use app::run_app;
