//! Pointer-state tracking.
//!
//! Raw-input bookkeeping only: where the pointer is, whether the button
//! is held, and where the hold started. Hit-testing and connection
//! logic live in [`crate::resolver`]. Every input is accepted
//! unconditionally; coordinates are trusted as local to the surface.

/// Live pointer state, mutated by the four event hooks and snapshotted
/// once per frame by the resolver for edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Current position; `None` once the pointer leaves the surface.
    pub position: Option<(f32, f32)>,
    /// Whether the button is currently held.
    pub pressed: bool,
    /// Position latched when the button went down; cleared on release.
    pub press_origin: Option<(f32, f32)>,
}

impl PointerState {
    /// Pointer moved. Does not touch the held flag or the origin.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
    }

    /// Pointer left the surface. The held flag and origin survive; a
    /// drag may wander off-canvas and come back.
    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Button went down at `(x, y)`. The origin latches only if unset:
    /// a repeated press event while already held must not move it.
    pub fn press(&mut self, x: f32, y: f32) {
        self.pressed = true;
        if self.press_origin.is_none() {
            self.press_origin = Some((x, y));
        }
    }

    /// Button released. Clears the latched origin.
    pub fn release(&mut self) {
        self.pressed = false;
        self.press_origin = None;
    }
}
