//! The drawing seam: everything the paint pass needs from a 2D backend.
//!
//! Backends implement [`Painter`] (Canvas2D in `wires-wasm`, a
//! recording painter in tests); the frame logic never touches a real
//! drawing context.

use wires_core::Color;

/// Line end-cap style for stroked wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// Minimal 2D drawing surface consumed by the paint pass.
pub trait Painter {
    /// Flood the whole surface with `color`.
    fn fill_background(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
        cap: LineCap,
    );

    /// Overlay text (top-left anchored). Backends without text support
    /// may make this a no-op.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// Theme-dependent board colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub overlay_text: Color,
}

impl Theme {
    /// Dark theme: the classic black board.
    pub fn dark() -> Self {
        Self {
            bg: Color::rgb8(0x00, 0x00, 0x00),
            overlay_text: Color::rgb8(0xff, 0xff, 0xff),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            bg: Color::rgb8(0xf5, 0xf5, 0xf7),
            overlay_text: Color::rgb8(0x1c, 0x1c, 0x1e),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
