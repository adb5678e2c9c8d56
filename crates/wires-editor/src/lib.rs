pub mod input;
pub mod resolver;

pub use input::PointerState;
pub use resolver::DragResolver;
