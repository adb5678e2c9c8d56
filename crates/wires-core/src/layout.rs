//! Board geometry: evenly spaced endpoint bands on the left and right
//! edges of the render surface.
//!
//! Every region derives from the viewport size, the wire count, and two
//! constants (band thickness, butt length). With `spacing = height /
//! (count + 1)` and the half-band upward shift, bands are evenly
//! distributed and pairwise disjoint by construction.

use serde::{Deserialize, Serialize};

/// The canvas (viewport) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Tunable board parameters. Lengths are in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Thickness of an endpoint band and of every stroked wire.
    pub wire_thickness: f32,
    /// Horizontal extent of an endpoint butt from its edge.
    pub butt_length: f32,
    /// Drop the drag origin when a release lands outside every right
    /// endpoint. Off by default: a missed drop keeps the drag armed and
    /// the next on-target release still commits it.
    pub clear_missed_drop: bool,
    /// Paint the active wire index in the corner each frame.
    pub debug_overlay: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            wire_thickness: 20.0,
            butt_length: 50.0,
            clear_missed_drop: false,
            debug_overlay: false,
        }
    }
}

/// Fixed rectangular hit-area for one wire terminus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    /// Inclusive on all four sides.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Resolved endpoint geometry for one board instance.
///
/// Computed once at startup (and again on resize); hit-testing and
/// painting both read the same regions, so what you see is what you hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    viewport: Viewport,
    thickness: f32,
    butt_length: f32,
    wire_count: usize,
}

impl BoardLayout {
    pub fn new(viewport: Viewport, config: &BoardConfig, wire_count: usize) -> Self {
        Self {
            viewport,
            thickness: config.wire_thickness,
            butt_length: config.butt_length,
            wire_count,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn wire_count(&self) -> usize {
        self.wire_count
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Vertical distance between consecutive band tops.
    pub fn spacing(&self) -> f32 {
        self.viewport.height / (self.wire_count as f32 + 1.0)
    }

    /// Top edge of band `idx` on either side.
    pub fn wire_y(&self, idx: usize) -> f32 {
        let offset = self.spacing() - self.thickness / 2.0;
        idx as f32 * self.spacing() + offset
    }

    pub fn left_region(&self, idx: usize) -> Region {
        Region {
            x: 0.0,
            y: self.wire_y(idx),
            width: self.butt_length,
            height: self.thickness,
        }
    }

    pub fn right_region(&self, idx: usize) -> Region {
        Region {
            x: self.viewport.width - self.butt_length,
            y: self.wire_y(idx),
            width: self.butt_length,
            height: self.thickness,
        }
    }

    /// Stroke anchor for wire `idx` on the left side: the inner edge of
    /// the butt, at the band's vertical center.
    pub fn left_anchor(&self, idx: usize) -> (f32, f32) {
        let (_, cy) = self.left_region(idx).center();
        (self.butt_length, cy)
    }

    /// Stroke anchor for right-hand slot `idx`.
    pub fn right_anchor(&self, idx: usize) -> (f32, f32) {
        let (_, cy) = self.right_region(idx).center();
        (self.viewport.width - self.butt_length, cy)
    }

    /// Left endpoint under `(x, y)`, if any. Every band is checked and
    /// the last match wins; bands are disjoint by construction, so at
    /// most one can match.
    pub fn hit_left(&self, x: f32, y: f32) -> Option<usize> {
        let mut hit = None;
        for idx in 0..self.wire_count {
            if self.left_region(idx).contains(x, y) {
                hit = Some(idx);
            }
        }
        hit
    }

    /// Right endpoint under `(x, y)`, if any. First match wins.
    pub fn hit_right(&self, x: f32, y: f32) -> Option<usize> {
        (0..self.wire_count).find(|&idx| self.right_region(idx).contains(x, y))
    }
}
