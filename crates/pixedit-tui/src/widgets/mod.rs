//! The editor's widgets.

pub mod color_adjuster;
pub mod draw_area;
pub mod palette;
pub mod toolbox;

pub use color_adjuster::ColorAdjuster;
pub use draw_area::DrawArea;
pub use palette::Palette;
pub use toolbox::Toolbox;
