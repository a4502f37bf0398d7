// Year Grid Library
// Exports all modules for testing and reuse

pub mod models;
pub mod ui_egui;
pub mod utils;

pub use models::config::{BackgroundShape, FontStyle, TitleGravity, YearConfig};
pub use ui_egui::year_view::{YearView, YearViewResult};
