//! Terminal platform wiring for the pager driver.
mod app;
mod effects;
mod logging;
mod persistence;
mod source;
mod ui;

pub use app::run_app;
