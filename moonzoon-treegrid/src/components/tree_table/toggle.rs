use indexmap::IndexSet;

use super::layout::IconState;
use super::markers::RowMarkers;

/// Visibility change for one walked row, indexed into the walked slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    Hide { index: usize },
    Show { index: usize },
}

/// A row following the clicked one, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkRow {
    pub markers: RowMarkers,
    /// Current state of the row's own expander icon, if it has one.
    pub icon: Option<IconState>,
}

/// Forward walk hiding the clicked row's whole subtree.
///
/// Descendants cascade-hide regardless of their own icon state. The walk
/// stops at the first row whose parent is outside the tracked set and at
/// any row without an id.
pub fn collapse_walk(clicked_id: &str, following: &[WalkRow]) -> Vec<RowChange> {
    let mut tracked: IndexSet<&str> = IndexSet::new();
    tracked.insert(clicked_id);

    let mut changes = Vec::new();
    for (index, row) in following.iter().enumerate() {
        let Some(id) = row.markers.id.as_deref() else {
            break;
        };
        match row.markers.parent_id.as_deref() {
            Some(parent_id) if tracked.contains(parent_id) => {
                changes.push(RowChange::Hide { index });
                tracked.insert(id);
            }
            _ => break,
        }
    }
    changes
}

/// Forward walk revealing the clicked row's children.
///
/// A shown row extends the tracked set only while its own icon is already
/// expanded, so collapsed descendants stay hidden. Unlike the collapse
/// walk, rows whose parent is outside the tracked set are skipped, not a
/// stop; only a row without an id ends the walk early.
pub fn expand_walk(clicked_id: &str, following: &[WalkRow]) -> Vec<RowChange> {
    let mut tracked: IndexSet<&str> = IndexSet::new();
    tracked.insert(clicked_id);

    let mut changes = Vec::new();
    for (index, row) in following.iter().enumerate() {
        let Some(id) = row.markers.id.as_deref() else {
            break;
        };
        if let Some(parent_id) = row.markers.parent_id.as_deref() {
            if tracked.contains(parent_id) {
                changes.push(RowChange::Show { index });
                if row.icon == Some(IconState::Expanded) {
                    tracked.insert(id);
                }
            }
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_row(class_attr: &str, icon: Option<IconState>) -> WalkRow {
        WalkRow {
            markers: RowMarkers::parse(Some(class_attr)),
            icon,
        }
    }

    #[test]
    fn collapse_hides_the_descendant_closure() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Expanded)),
            walk_row("treegrid-c treegrid-parent-b", Some(IconState::Collapsed)),
            walk_row("treegrid-d treegrid-parent-c", Some(IconState::Collapsed)),
        ];

        let changes = collapse_walk("a", &following);

        assert_eq!(
            changes,
            vec![
                RowChange::Hide { index: 0 },
                RowChange::Hide { index: 1 },
                RowChange::Hide { index: 2 },
            ]
        );
    }

    #[test]
    fn collapse_stops_outside_the_subtree() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("treegrid-x treegrid-parent-z", Some(IconState::Collapsed)),
            // Even a row parented to the clicked one is out of reach once
            // the walk has stopped.
            walk_row("treegrid-d treegrid-parent-a", Some(IconState::Collapsed)),
        ];

        let changes = collapse_walk("a", &following);

        assert_eq!(changes, vec![RowChange::Hide { index: 0 }]);
    }

    #[test]
    fn collapse_stops_at_a_plain_row() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("plain", None),
            walk_row("treegrid-d treegrid-parent-a", Some(IconState::Collapsed)),
        ];

        let changes = collapse_walk("a", &following);

        assert_eq!(changes, vec![RowChange::Hide { index: 0 }]);
    }

    #[test]
    fn expand_reveals_one_level_by_default() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("treegrid-c treegrid-parent-b", Some(IconState::Collapsed)),
        ];

        let changes = expand_walk("a", &following);

        assert_eq!(changes, vec![RowChange::Show { index: 0 }]);
    }

    #[test]
    fn expand_recurses_through_already_expanded_children() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Expanded)),
            walk_row("treegrid-c treegrid-parent-b", Some(IconState::Collapsed)),
        ];

        let changes = expand_walk("a", &following);

        assert_eq!(
            changes,
            vec![RowChange::Show { index: 0 }, RowChange::Show { index: 1 }]
        );
    }

    #[test]
    fn expand_skips_foreign_rows_and_continues() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("treegrid-x treegrid-parent-z", Some(IconState::Collapsed)),
            walk_row("treegrid-d treegrid-parent-a", Some(IconState::Collapsed)),
        ];

        let changes = expand_walk("a", &following);

        assert_eq!(
            changes,
            vec![RowChange::Show { index: 0 }, RowChange::Show { index: 2 }]
        );
    }

    #[test]
    fn expand_stops_at_a_plain_row() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("plain", None),
            walk_row("treegrid-d treegrid-parent-a", Some(IconState::Collapsed)),
        ];

        let changes = expand_walk("a", &following);

        assert_eq!(changes, vec![RowChange::Show { index: 0 }]);
    }

    #[test]
    fn blacklisted_rows_propagate_on_collapse_but_never_extend_expand() {
        // A blacklisted row has no icon, so it can be hidden with its
        // parent yet never reveals its own children on expand.
        let following = [
            walk_row("treegrid-b treegrid-parent-a black", None),
            walk_row("treegrid-c treegrid-parent-b", Some(IconState::Collapsed)),
        ];

        let collapse = collapse_walk("a", &following);
        assert_eq!(
            collapse,
            vec![RowChange::Hide { index: 0 }, RowChange::Hide { index: 1 }]
        );

        let expand = expand_walk("a", &following);
        assert_eq!(expand, vec![RowChange::Show { index: 0 }]);
    }

    #[test]
    fn roots_after_the_subtree_stop_a_collapse() {
        let following = [
            walk_row("treegrid-b treegrid-parent-a", Some(IconState::Collapsed)),
            walk_row("treegrid-r children", Some(IconState::Collapsed)),
        ];

        let changes = collapse_walk("a", &following);

        assert_eq!(changes, vec![RowChange::Hide { index: 0 }]);
    }
}
