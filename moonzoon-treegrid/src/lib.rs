// Tree table component library for MoonZoon report views

pub mod components;
pub mod tokens;

// Re-export everything for easy access
pub use components::*;
pub use tokens::*;
