//! Edge-triggered drag resolution.
//!
//! Once per frame the resolver compares the previous frame's pointer
//! snapshot against the live state, derives press/release edges, and
//! advances the drag state machine: a press on a left endpoint starts a
//! drag, a release on a right endpoint commits it into the connection
//! table. Any number of pointer events may arrive between two frames;
//! only the presence of an edge matters, never the event count.

use crate::input::PointerState;
use wires_core::{BoardLayout, ConnectionMap};

/// Per-drag state machine.
///
/// `active_wire` is `None` while idle and `Some(i)` while wire `i` is
/// being dragged from its left endpoint. A release that misses every
/// right endpoint leaves the drag armed unless `clear_missed_drop` is
/// set.
#[derive(Debug, Clone, Default)]
pub struct DragResolver {
    prev: PointerState,
    active_wire: Option<usize>,
    clear_missed_drop: bool,
}

impl DragResolver {
    pub fn new(clear_missed_drop: bool) -> Self {
        Self {
            prev: PointerState::default(),
            active_wire: None,
            clear_missed_drop,
        }
    }

    /// The wire currently being dragged, if any.
    pub fn active_wire(&self) -> Option<usize> {
        self.active_wire
    }

    /// Back to idle; used when a new game starts.
    pub fn reset(&mut self) {
        self.prev = PointerState::default();
        self.active_wire = None;
    }

    /// Advance one frame. Call exactly once per frame, before painting.
    pub fn update(
        &mut self,
        pointer: &PointerState,
        layout: &BoardLayout,
        connections: &mut ConnectionMap,
    ) {
        // Press edge: the button went down since the last frame.
        if !self.prev.pressed
            && pointer.pressed
            && let Some((ox, oy)) = pointer.press_origin
        {
            if let Some(wire) = layout.hit_left(ox, oy) {
                log::debug!("drag start: wire {wire}");
                self.active_wire = Some(wire);
            }
            // A press on empty board leaves `active_wire` alone: it
            // starts out `None`, so the first unmatched press stays idle.
        }

        // Release edge: the button came up since the last frame. The
        // drop target is the CURRENT position, not the press origin.
        if self.prev.pressed
            && !pointer.pressed
            && let Some(wire) = self.active_wire
        {
            let target = pointer
                .position
                .and_then(|(x, y)| layout.hit_right(x, y));
            match target {
                Some(slot) => {
                    log::debug!("wire {wire} connected to right slot {slot}");
                    connections.connect(wire, slot);
                    self.active_wire = None;
                }
                None if self.clear_missed_drop => {
                    log::debug!("missed drop: wire {wire} cancelled");
                    self.active_wire = None;
                }
                // Missed drop: the drag stays armed until a later
                // release lands on a right endpoint.
                None => {}
            }
        }

        self.prev = *pointer;
    }
}
