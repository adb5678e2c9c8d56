//! Frame painting: board state → [`Painter`] calls.
//!
//! Pure read + paint, no state mutation. Draw order matters: committed
//! wires go down first, then the endpoint butts on both edges, then the
//! live drag line. The live line stays on top, and butts are never
//! occluded by wire strokes crossing them.

use crate::painter::{LineCap, Painter, Theme};
use wires_core::{Board, BoardLayout};
use wires_editor::PointerState;

/// Paint one frame of the board.
pub fn paint_frame<P: Painter>(
    painter: &mut P,
    board: &Board,
    layout: &BoardLayout,
    pointer: &PointerState,
    active_wire: Option<usize>,
    theme: &Theme,
    debug_overlay: bool,
) {
    painter.fill_background(theme.bg);

    // Committed wires, colored by their left endpoint.
    let mut committed = 0usize;
    for (left, right) in board.connections.iter() {
        painter.stroke_line(
            layout.left_anchor(left),
            layout.right_anchor(right),
            board.palette.color(left),
            layout.thickness(),
            LineCap::Round,
        );
        committed += 1;
    }

    // Left butts, palette order.
    for (wire, color) in board.palette.iter().enumerate() {
        let r = layout.left_region(wire);
        painter.fill_rect(r.x, r.y, r.width, r.height, color);
    }

    // Right butts, shuffled order.
    for (slot, &wire) in board.right_order.iter().enumerate() {
        let r = layout.right_region(slot);
        painter.fill_rect(r.x, r.y, r.width, r.height, board.palette.color(wire));
    }

    // Live drag line, from the grabbed butt to the cursor.
    if pointer.pressed
        && let Some(wire) = active_wire
        && let Some((x, y)) = pointer.position
    {
        painter.stroke_line(
            layout.left_anchor(wire),
            (x, y),
            board.palette.color(wire),
            layout.thickness(),
            LineCap::Round,
        );
    }

    if debug_overlay {
        let label = match active_wire {
            Some(wire) => format!("active wire: {wire}"),
            None => "active wire: none".to_string(),
        };
        painter.fill_text(&label, 20.0, 20.0, theme.overlay_text);
    }

    log::trace!(
        "painted frame: {committed} wires committed, active {active_wire:?}"
    );
}
