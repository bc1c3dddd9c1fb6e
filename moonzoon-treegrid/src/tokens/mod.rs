// Design Token System for report view components

pub mod color;
pub mod spacing;
pub mod theme;

pub use color::*;
pub use spacing::*;
pub use theme::*;
