// Component Library for MoonZoon report views

pub mod tree_table;

// Re-export components for easy access
pub use tree_table::*;
