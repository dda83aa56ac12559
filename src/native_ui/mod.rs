//! Native egui-based desktop window for Bill Splitter

mod app;
mod preferences;
mod theme;

pub use app::run;
