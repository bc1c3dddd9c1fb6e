/// Class of the indentation marker element injected into the hierarchy cell.
pub const MARKER_CLASS: &str = "tabletree";

/// Element id prefix of expander icons, followed by the row id.
pub const EXPANDER_ID_PREFIX: &str = "tt_expander_";

/// Visibility hint class; consumed by the initialization pass.
pub const START_EXPANDED_CLASS: &str = "tr-show";

const PARENT_PREFIX: &str = "treegrid-parent-";
const ID_PREFIX: &str = "treegrid-";
const CHILDREN_TOKEN: &str = "children";
const DOUBLE_TOKEN: &str = "double";
const BLACKLIST_TOKEN: &str = "black";

/// Hierarchy markers decoded from a row's space-separated class attribute.
///
/// Server-rendered report rows encode their tree position as class tokens:
/// `treegrid-<id>`, `treegrid-parent-<id>`, `children`, `double`, `black`
/// and the `tr-show` start-expanded hint. A row without an id token is not
/// part of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowMarkers {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub has_children: bool,
    pub has_double_children: bool,
    pub blacklisted: bool,
    pub start_expanded: bool,
}

impl RowMarkers {
    /// Decode markers from a class attribute. Unrecognized tokens are
    /// ignored and a missing attribute yields a plain (non-tree) row.
    pub fn parse(class_attr: Option<&str>) -> Self {
        let mut markers = Self::default();
        let Some(class_attr) = class_attr else {
            return markers;
        };
        for token in class_attr.split_whitespace() {
            // The parent prefix must be tested first: the id prefix matches
            // every parent token too.
            if let Some(parent_id) = token.strip_prefix(PARENT_PREFIX) {
                if !parent_id.is_empty() {
                    markers.parent_id = Some(parent_id.to_owned());
                }
            } else if let Some(id) = token.strip_prefix(ID_PREFIX) {
                if !id.is_empty() {
                    markers.id = Some(id.to_owned());
                }
            } else if token == CHILDREN_TOKEN {
                markers.has_children = true;
            } else if token == DOUBLE_TOKEN {
                markers.has_double_children = true;
            } else if token == BLACKLIST_TOKEN {
                markers.blacklisted = true;
            } else if token == START_EXPANDED_CLASS {
                markers.start_expanded = true;
            }
        }
        markers
    }

    /// Rows without an id do not participate in tree behavior at all.
    pub fn is_tree_row(&self) -> bool {
        self.id.is_some()
    }
}
