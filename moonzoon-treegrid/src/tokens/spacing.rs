// Spacing Token System

pub const SPACING_2: u32 = 2;   // Tight gaps
pub const SPACING_4: u32 = 4;   // Compact gaps
pub const SPACING_8: u32 = 8;   // Default gaps
pub const SPACING_12: u32 = 12; // Comfortable padding
pub const SPACING_16: u32 = 16; // Tree indentation step
