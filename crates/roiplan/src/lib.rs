//! Terminal dashboard for the ROI sandbox
//!
//! Wires the `roiplan_core` model to a ratatui interface:
//! - A sidebar of adjustable assumptions with two presets
//! - An ROI calculator tab with CSV export
//! - A sensitivity tab charting savings, ROI and payback against one lever
//! - Theory and about tabs rendering local markdown documents

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
