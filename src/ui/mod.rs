pub mod arrows;
pub mod grid;
pub mod theme;

pub use arrows::Connector;
pub use grid::{show_grid, GridInteraction};
