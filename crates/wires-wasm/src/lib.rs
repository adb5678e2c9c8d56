//! WASM bridge for Wires: runs the puzzle on an HTML canvas.
//!
//! Compiled via `wasm-pack build --target web`. The host page can drive
//! [`WiresBoard`] itself (feed pointer events, call `frame` from its own
//! render loop), or call [`mount`] once and let this crate attach the
//! event listeners and the `requestAnimationFrame` loop.

mod render2d;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use render2d::CanvasPainter;
use wires_core::{Board, BoardConfig, BoardLayout, Palette, Viewport};
use wires_editor::{DragResolver, PointerState};
use wires_render::{Theme, paint_frame};

/// The main WASM-facing board controller.
///
/// Owns every piece of game state (board, layout, pointer, resolver).
/// All interaction from the host page goes through this struct; nothing
/// lives in module-level singletons.
#[wasm_bindgen]
pub struct WiresBoard {
    board: Board,
    config: BoardConfig,
    layout: BoardLayout,
    pointer: PointerState,
    resolver: DragResolver,
    theme: Theme,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl WiresBoard {
    /// Create a board controller for a `width` × `height` surface,
    /// shuffled from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: u32) -> Self {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();

        let config = BoardConfig::default();
        let board = Board::new(Palette::classic(), seed);
        let layout = BoardLayout::new(
            Viewport {
                width: width as f32,
                height: height as f32,
            },
            &config,
            board.wire_count(),
        );

        Self {
            board,
            config,
            layout,
            pointer: PointerState::default(),
            resolver: DragResolver::new(config.clear_missed_drop),
            theme: Theme::default(),
            width,
            height,
        }
    }

    /// Re-shuffle the right-hand endpoints and drop every connection.
    /// The live pointer state is left alone.
    pub fn new_game(&mut self, seed: u32) {
        self.board.new_game(seed);
        self.resolver.reset();
    }

    /// Resize the surface; endpoint geometry is recomputed.
    pub fn resize(&mut self, width: f64, height: f64) {
        log::debug!("resize to {width}x{height}");
        self.width = width;
        self.height = height;
        self.layout = BoardLayout::new(
            Viewport {
                width: width as f32,
                height: height as f32,
            },
            &self.config,
            self.board.wire_count(),
        );
    }

    // ─── Pointer event hooks ─────────────────────────────────────────

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x as f32, y as f32);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        self.pointer.press(x as f32, y as f32);
    }

    pub fn pointer_released(&mut self) {
        self.pointer.release();
    }

    // ─── Frame loop ──────────────────────────────────────────────────

    /// Resolve this frame's pointer edges, then paint. Call exactly
    /// once per animation frame.
    pub fn frame(&mut self, ctx: &CanvasRenderingContext2d) {
        self.resolver
            .update(&self.pointer, &self.layout, &mut self.board.connections);
        let mut painter = CanvasPainter::new(ctx, self.width, self.height);
        paint_frame(
            &mut painter,
            &self.board,
            &self.layout,
            &self.pointer,
            self.resolver.active_wire(),
            &self.theme,
            self.config.debug_overlay,
        );
    }

    // ─── Host-facing knobs ───────────────────────────────────────────

    pub fn set_theme(&mut self, is_dark: bool) {
        self.theme = if is_dark { Theme::dark() } else { Theme::light() };
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        self.config.debug_overlay = on;
    }

    /// Board status as JSON:
    /// `{"wires":4,"connected":1,"connections":[[0,2]]}`.
    pub fn status_json(&self) -> String {
        board_status_json(&self.board)
    }
}

#[derive(Serialize)]
struct BoardStatus {
    wires: usize,
    connected: usize,
    connections: Vec<(usize, usize)>,
}

fn board_status_json(board: &Board) -> String {
    let status = BoardStatus {
        wires: board.wire_count(),
        connected: board.connections.connected_count(),
        connections: board.connections.iter().collect(),
    };
    serde_json::to_string(&status).unwrap_or_else(|_| "{}".to_string())
}

// ─── Self-contained mounting ─────────────────────────────────────────────

/// Attach the puzzle to the canvas with the given DOM id and start the
/// frame loop. The seed comes from the clock, so every page load deals
/// a fresh shuffle.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    web_sys::console::log_1(&JsValue::from_str("Wires!"));

    let seed = js_sys::Date::now() as u32;
    log::info!("mounting board on #{canvas_id}, seed {seed:#010x}");
    let board = Rc::new(RefCell::new(WiresBoard::new(
        canvas.width() as f64,
        canvas.height() as f64,
        seed,
    )));

    attach_pointer_events(&canvas, &board)?;
    start_frame_loop(board, ctx);
    Ok(())
}

/// Convert client coordinates into canvas-internal pixels so hit
/// testing keeps working when CSS scales the canvas element.
fn event_canvas_coords(e: &MouseEvent, canvas: &HtmlCanvasElement) -> (f64, f64) {
    if let Some(el) = canvas.dyn_ref::<web_sys::Element>() {
        let rect = el.get_bounding_client_rect();
        let x =
            (e.client_x() as f64 - rect.left()) * (canvas.width() as f64) / rect.width().max(1.0);
        let y =
            (e.client_y() as f64 - rect.top()) * (canvas.height() as f64) / rect.height().max(1.0);
        (x, y)
    } else {
        (e.offset_x() as f64, e.offset_y() as f64)
    }
}

fn attach_pointer_events(
    canvas: &HtmlCanvasElement,
    board: &Rc<RefCell<WiresBoard>>,
) -> Result<(), JsValue> {
    {
        let b = board.clone();
        let cv = canvas.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let (x, y) = event_canvas_coords(&e, &cv);
            b.borrow_mut().pointer_moved(x, y);
        }));
        canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        let b = board.clone();
        let mouseleave = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            b.borrow_mut().pointer_left();
        }));
        canvas
            .add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref())?;
        mouseleave.forget();
    }
    {
        let b = board.clone();
        let cv = canvas.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let (x, y) = event_canvas_coords(&e, &cv);
            b.borrow_mut().pointer_pressed(x, y);
        }));
        canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let b = board.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            b.borrow_mut().pointer_released();
        }));
        canvas.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }
    Ok(())
}

fn start_frame_loop(board: Rc<RefCell<WiresBoard>>, ctx: CanvasRenderingContext2d) {
    type FrameClosure = Closure<dyn FnMut(f64)>;
    let f: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        board.borrow_mut().frame(&ctx);
        if let Some(win) = web_sys::window()
            && let Some(cb) = f.borrow().as_ref()
        {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(win) = web_sys::window()
        && let Some(cb) = g.borrow().as_ref()
    {
        let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Wires WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_json_lists_connections_in_left_order() {
        let mut board = Board::new(Palette::classic(), 1);
        board.connections.connect(2, 0);
        board.connections.connect(0, 3);
        assert_eq!(
            board_status_json(&board),
            r#"{"wires":4,"connected":2,"connections":[[0,3],[2,0]]}"#
        );
    }

    #[test]
    fn status_json_on_a_fresh_board() {
        let board = Board::new(Palette::classic(), 1);
        assert_eq!(
            board_status_json(&board),
            r#"{"wires":4,"connected":0,"connections":[]}"#
        );
    }
}
