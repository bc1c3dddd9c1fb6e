use std::collections::HashMap;

use indexmap::IndexSet;

use super::markers::RowMarkers;
use crate::tokens::SPACING_16;

/// Pixel offset added per nesting level.
pub const INDENT_STEP: u32 = SPACING_16;

/// Visual state of an expander icon, recorded in the DOM as the icon's
/// class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Expanded,
    Collapsed,
}

/// One row as fed into the initialization scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSource {
    pub markers: RowMarkers,
    /// Indent read back from a marker element injected by an earlier pass.
    pub existing_indent: Option<u32>,
}

/// What the initialization scan decided for one tree row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    /// Index of the row in the scanned slice.
    pub index: usize,
    pub id: String,
    pub indent: u32,
    /// False when the row already carries a marker element from an earlier
    /// pass; nothing is injected then and the row is left as-is.
    pub inject: bool,
    /// Initial icon state; blacklisted rows get no icon.
    pub icon: Option<IconState>,
    pub hidden: bool,
    pub icon_faded: bool,
    /// The start-expanded hint was honored; its class is removed.
    pub clear_start_expanded: bool,
}

/// Single forward scan over rows in document order.
///
/// Indents derive from the parent's recorded indent plus [`INDENT_STEP`]
/// (0 for roots and unrecorded parents). Rows flagged start-expanded or
/// carrying doubly-nested children begin expanded and join the
/// expanded-ancestor set; a fresh row whose parent is not in that set is
/// hidden immediately. Rows without an id are skipped entirely.
///
/// The indent map and the expanded set live and die with one call, so
/// several independent tables on a page never share state.
pub fn plan_rows(rows: &[RowSource]) -> Vec<RowLayout> {
    let mut layouts: Vec<RowLayout> = Vec::new();
    let mut indents: HashMap<String, u32> = HashMap::new();
    let mut expanded_parents: IndexSet<String> = IndexSet::new();
    // (position in `layouts`, indent, has icon) of the previous tree row
    let mut prev: Option<(usize, u32, bool)> = None;

    for (index, row) in rows.iter().enumerate() {
        let Some(id) = row.markers.id.clone() else {
            continue;
        };

        let exists = row.existing_indent.is_some();
        let indent = match row.existing_indent {
            Some(indent) => indent,
            None => row
                .markers
                .parent_id
                .as_ref()
                .and_then(|parent_id| indents.get(parent_id))
                .map_or(0, |parent_indent| parent_indent + INDENT_STEP),
        };

        let mut layout = RowLayout {
            index,
            id: id.clone(),
            indent,
            inject: !exists,
            icon: None,
            hidden: false,
            icon_faded: false,
            clear_start_expanded: false,
        };

        if !exists {
            let start_expanded = row.markers.start_expanded || row.markers.has_double_children;
            if !row.markers.blacklisted {
                layout.icon = Some(if start_expanded {
                    IconState::Expanded
                } else {
                    IconState::Collapsed
                });
            }
            if start_expanded {
                expanded_parents.insert(id.clone());
            }
            layout.clear_start_expanded = row.markers.start_expanded;
            if let Some(parent_id) = &row.markers.parent_id {
                if !expanded_parents.contains(parent_id) {
                    layout.hidden = true;
                }
            }
        }

        indents.insert(id, indent);

        // A row at the same or shallower indent means the previous tree row
        // has no deeper descendant directly below it: its icon fades out.
        let has_icon = !row.markers.blacklisted;
        if let Some((prev_pos, prev_indent, prev_has_icon)) = prev {
            if prev_has_icon {
                layouts[prev_pos].icon_faded = prev_indent >= indent;
            }
        }
        prev = Some((layouts.len(), indent, has_icon));
        layouts.push(layout);
    }

    // A leaf has no following deeper row.
    if let Some((last_pos, _, has_icon)) = prev {
        if has_icon {
            layouts[last_pos].icon_faded = true;
        }
    }

    layouts
}
