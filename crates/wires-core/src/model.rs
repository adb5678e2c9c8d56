//! Core data model for the wire puzzle.
//!
//! A board holds an immutable palette of wire colors, the shuffled order
//! the colors appear in on the right-hand edge, and the committed
//! left→right connections. The shuffled order and the connections are
//! reset together by [`Board::new_game`]; everything else is fixed at
//! startup.

use crate::shuffle::shuffled_order;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels. Usable in constants.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    /// Parse a hex color string: `#RGB` or `#RRGGBB`, with optional `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb8(r, g, b))
            }
            _ => None,
        }
    }

    /// Emit as a CSS hex string, `#RRGGBB` or `#RRGGBBAA` when
    /// translucent. Canvas2D fill/stroke styles accept this form.
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = (self.a * 255.0).round() as u8;

        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// The classic four-wire palette, left-hand order.
pub const CLASSIC_PALETTE: [Color; 4] = [
    Color::rgb8(0x19, 0xb5, 0xfe), // blue
    Color::rgb8(0xff, 0x63, 0x47), // red
    Color::rgb8(0x2e, 0xcc, 0x91), // green
    Color::rgb8(0xbe, 0x90, 0xd4), // purple
];

// ─── Palette ─────────────────────────────────────────────────────────────

/// An ordered, fixed set of distinct wire colors. Immutable after startup;
/// wire `i` everywhere means the `i`-th color of the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: SmallVec<[Color; 8]>,
}

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// The classic blue/red/green/purple board.
    pub fn classic() -> Self {
        Self::new(CLASSIC_PALETTE)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, wire: usize) -> Color {
        self.colors[wire]
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

// ─── Connections ─────────────────────────────────────────────────────────

/// The committed left→right pairings produced by completed drag gestures.
///
/// Keyed by left endpoint index: a left index holds at most one right
/// index at a time, and reconnecting overwrites. Right indices may repeat
/// across left keys; two left wires are allowed to land on the same
/// right endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionMap {
    slots: SmallVec<[Option<usize>; 8]>,
}

impl ConnectionMap {
    /// An empty table with one slot per wire.
    pub fn new(wire_count: usize) -> Self {
        Self {
            slots: smallvec::smallvec![None; wire_count],
        }
    }

    /// Drop every connection, keeping the slot count.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Record `left → right`, overwriting any previous target for `left`.
    /// Out-of-range left indices are ignored.
    pub fn connect(&mut self, left: usize, right: usize) {
        if let Some(slot) = self.slots.get_mut(left) {
            *slot = Some(right);
        }
    }

    pub fn get(&self, left: usize) -> Option<usize> {
        self.slots.get(left).copied().flatten()
    }

    /// All committed `(left, right)` pairs, in left-index order.
    /// (Pair order is immaterial to rendering; wires do not interact.)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(left, slot)| slot.map(|right| (left, right)))
    }

    pub fn connected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn wire_count(&self) -> usize {
        self.slots.len()
    }
}

// ─── Board state ─────────────────────────────────────────────────────────

/// One puzzle instance.
///
/// `right_order[j]` is the wire (palette index) displayed at right-hand
/// slot `j`; it is always a permutation of `0..palette.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub palette: Palette,
    pub right_order: SmallVec<[usize; 8]>,
    pub connections: ConnectionMap,
}

impl Board {
    /// A fresh board, already shuffled from `seed`.
    pub fn new(palette: Palette, seed: u32) -> Self {
        let wire_count = palette.len();
        let mut board = Self {
            palette,
            right_order: SmallVec::new(),
            connections: ConnectionMap::new(wire_count),
        };
        board.new_game(seed);
        board
    }

    /// Re-shuffle the right-hand endpoints and drop every connection.
    /// The two are always reset together.
    pub fn new_game(&mut self, seed: u32) {
        self.right_order = shuffled_order(self.palette.len(), seed);
        self.connections.clear();
        log::info!(
            "new game: {} wires, seed {seed:#010x}",
            self.palette.len()
        );
    }

    pub fn wire_count(&self) -> usize {
        self.palette.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex("#19b5fe").unwrap();
        assert_eq!(c.to_hex(), "#19B5FE");

        let short = Color::from_hex("f00").unwrap();
        assert_eq!(short.to_hex(), "#FF0000");

        assert_eq!(Color::from_hex("not-a-color"), None);
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn translucent_hex_keeps_alpha() {
        let c = Color::rgba(1.0, 1.0, 1.0, 0.5);
        assert_eq!(c.to_hex(), "#FFFFFF80");
    }

    #[test]
    fn classic_palette_matches_hex_sources() {
        let expected = ["#19b5fe", "#ff6347", "#2ecc91", "#be90d4"];
        for (color, hex) in CLASSIC_PALETTE.iter().zip(expected) {
            assert_eq!(*color, Color::from_hex(hex).unwrap());
        }
    }

    #[test]
    fn connect_overwrites_previous_target() {
        let mut map = ConnectionMap::new(4);
        map.connect(1, 3);
        assert_eq!(map.get(1), Some(3));

        // A later drag from the same left endpoint replaces the pairing.
        map.connect(1, 0);
        assert_eq!(map.get(1), Some(0));
        assert_eq!(map.connected_count(), 1);
    }

    #[test]
    fn right_endpoint_may_be_shared() {
        let mut map = ConnectionMap::new(4);
        map.connect(0, 2);
        map.connect(3, 2);
        assert_eq!(map.get(0), Some(2));
        assert_eq!(map.get(3), Some(2));
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(0, 2), (3, 2)]);
    }

    #[test]
    fn out_of_range_connect_is_ignored() {
        let mut map = ConnectionMap::new(4);
        map.connect(9, 1);
        assert_eq!(map.connected_count(), 0);
    }

    #[test]
    fn new_game_resets_connections_and_reshuffles() {
        let mut board = Board::new(Palette::classic(), 7);
        board.connections.connect(0, 1);
        board.connections.connect(2, 2);

        board.new_game(8);
        assert_eq!(board.connections.connected_count(), 0);

        let mut sorted: Vec<usize> = board.right_order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}
