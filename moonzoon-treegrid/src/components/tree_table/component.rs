use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use super::dom_updater::TreeTableDom;
use super::layout::{IconState, RowSource, plan_rows};
use super::markers::{RowMarkers, START_EXPANDED_CLASS};
use super::toggle::{WalkRow, collapse_walk, expand_walk};

/// Configured tree table renderer.
///
/// One instance per table; all per-pass state (indent map, expanded set)
/// is local to [`TreeTable::init`], so independent tables on a page never
/// interfere.
pub struct TreeTable {
    pub(super) column: u32,
    pub(super) expanded_class: String,
    pub(super) collapsed_class: String,
}

impl TreeTable {
    /// Run the initialization pass over `table` and bind expander clicks.
    ///
    /// Safe to call again on the same table: rows already carrying marker
    /// elements keep their indentation and handlers untouched.
    pub fn init(&self, table: Element) {
        let dom = Rc::new(TreeTableDom::new(table, self.column));
        let rows = dom.rows();
        let sources: Vec<RowSource> = rows.iter().map(|row| dom.row_source(row)).collect();
        let layouts = plan_rows(&sources);

        for layout in &layouts {
            let row = &rows[layout.index];
            if !layout.inject {
                continue;
            }
            if let Some(icon) =
                dom.inject_marker(row, layout, &self.expanded_class, &self.collapsed_class)
            {
                self.bind_expander(&dom, row, &icon, &layout.id);
            }
            if layout.clear_start_expanded {
                let _ = row.class_list().remove_1(START_EXPANDED_CLASS);
            }
            if layout.hidden {
                dom.hide_row(row);
            }
        }

        // Fade decisions cover icons kept from earlier passes as well.
        for layout in &layouts {
            if let Some(icon) = dom.expander_icon(&rows[layout.index]) {
                dom.set_icon_opacity(&icon, layout.icon_faded);
            }
        }

        dom.update_colors();
        zoon::println!("[TREE_TABLE] initialized {} tree rows", layouts.len());
    }

    /// Bind the toggle handler to a freshly-injected expander icon. The
    /// handler branches on the icon's recorded class string, so repeated
    /// clicks simply keep toggling.
    fn bind_expander(&self, dom: &Rc<TreeTableDom>, row: &Element, icon: &Element, id: &str) {
        let dom = Rc::clone(dom);
        let row = row.clone();
        let icon = icon.clone();
        let id = id.to_owned();
        let expanded_class = self.expanded_class.clone();
        let collapsed_class = self.collapsed_class.clone();

        let handler = Closure::<dyn FnMut()>::new(move || {
            let state = icon.get_attribute("class").unwrap_or_default();

            let following = following_rows(&row);
            let walk_rows: Vec<WalkRow> = following
                .iter()
                .map(|row| WalkRow {
                    markers: RowMarkers::parse(row.get_attribute("class").as_deref()),
                    icon: dom.first_icon(row).and_then(|icon| {
                        icon_state(&icon, &expanded_class, &collapsed_class)
                    }),
                })
                .collect();

            let changes = if state == expanded_class {
                icon.set_attribute("class", &collapsed_class)
                    .expect("Failed to swap expander icon");
                collapse_walk(&id, &walk_rows)
            } else if state == collapsed_class {
                icon.set_attribute("class", &expanded_class)
                    .expect("Failed to swap expander icon");
                expand_walk(&id, &walk_rows)
            } else {
                return;
            };

            dom.apply_changes(&changes, &following);
            dom.update_colors();
        });

        icon.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .expect("Failed to bind expander click");
        // Expanders live for the page lifetime; rows are never torn down.
        handler.forget();
    }
}

/// Sibling rows after `row`, in document order, up to the first non-row
/// sibling.
fn following_rows(row: &Element) -> Vec<Element> {
    let mut rows = Vec::new();
    let mut current = row.next_element_sibling();
    while let Some(element) = current {
        if element.tag_name() != "TR" {
            break;
        }
        current = element.next_element_sibling();
        rows.push(element);
    }
    rows
}

fn icon_state(icon: &Element, expanded_class: &str, collapsed_class: &str) -> Option<IconState> {
    let class = icon.get_attribute("class").unwrap_or_default();
    if class == expanded_class {
        Some(IconState::Expanded)
    } else if class == collapsed_class {
        Some(IconState::Collapsed)
    } else {
        None
    }
}
