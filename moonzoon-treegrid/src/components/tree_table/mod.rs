// TreeTable - collapsible tree rendering for server-rendered report tables
//
// Turns a flat table whose rows carry hierarchy markers in their class
// attribute into an expand/collapse tree, purely through visibility
// toggling and indentation. Rows are never created or removed; the
// component only mutates visibility, expander icon state and the zebra
// stripes of the visible rows.

mod builder;
mod component;
mod dom_updater;
mod layout;
mod markers;
mod striping;
mod toggle;

// Public API exports
pub use builder::TreeTableBuilder;
pub use component::TreeTable;
pub use dom_updater::TreeTableDom;
pub use layout::{INDENT_STEP, IconState, RowLayout, RowSource, plan_rows};
pub use markers::{EXPANDER_ID_PREFIX, MARKER_CLASS, RowMarkers, START_EXPANDED_CLASS};
pub use striping::{STRIPED_TABLE_CLASS, Stripe, stripe_rows};
pub use toggle::{RowChange, WalkRow, collapse_walk, expand_walk};

// Re-export for builder pattern entry point
pub fn tree_table() -> TreeTableBuilder {
    TreeTableBuilder::new()
}
