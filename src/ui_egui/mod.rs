// egui-facing modules: style resolution, layout, rendering, hit-testing,
// selection state and the widget itself.

pub mod layout;
pub mod render;
pub mod selection;
pub mod styles;
pub mod year_view;
