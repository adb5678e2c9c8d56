//! Canvas2D backend for the `Painter` seam.
//!
//! Translates the paint pass's calls into `CanvasRenderingContext2d`
//! operations. Colors cross the boundary as CSS hex strings.

use web_sys::CanvasRenderingContext2d;
use wires_core::Color;
use wires_render::{LineCap, Painter};

/// A painter borrowing a 2D context for the duration of one frame.
pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Painter for CanvasPainter<'_> {
    fn fill_background(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
        cap: LineCap,
    ) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap(match cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        });
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.ctx.set_font("20px sans-serif");
        self.ctx.set_text_baseline("top");
        self.ctx.set_fill_style_str(&color.to_hex());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
