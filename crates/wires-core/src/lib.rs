pub mod layout;
pub mod model;
pub mod shuffle;

pub use layout::{BoardConfig, BoardLayout, Region, Viewport};
pub use model::{Board, CLASSIC_PALETTE, Color, ConnectionMap, Palette};
pub use shuffle::shuffled_order;
