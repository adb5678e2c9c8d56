pub mod paint;
pub mod painter;

pub use paint::paint_frame;
pub use painter::{LineCap, Painter, Theme};
