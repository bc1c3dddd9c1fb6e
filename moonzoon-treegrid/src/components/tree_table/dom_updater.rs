use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::layout::{IconState, RowLayout, RowSource};
use super::markers::{EXPANDER_ID_PREFIX, MARKER_CLASS, RowMarkers};
use super::striping::{STRIPED_TABLE_CLASS, stripe_rows};
use super::toggle::RowChange;
use crate::tokens::current_theme;

/// DOM access for one tree table.
///
/// Reads the server-rendered rows into typed descriptors and applies the
/// decisions of the pure layers back to the table: injected markers,
/// visibility, icon fades and zebra stripes. Malformed rows are skipped
/// silently; the table keeps working as a plain table for them.
pub struct TreeTableDom {
    table: Element,
    column: u32,
}

impl TreeTableDom {
    pub fn new(table: Element, column: u32) -> Self {
        Self { table, column }
    }

    pub fn table(&self) -> &Element {
        &self.table
    }

    fn document(&self) -> Document {
        self.table
            .owner_document()
            .expect("table is detached from any document")
    }

    /// All `<tr>` elements of the table, in document order.
    pub fn rows(&self) -> Vec<Element> {
        let list = self.table.get_elements_by_tag_name("tr");
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    /// The hierarchy cell of a row (1-based column), when present.
    pub fn marker_cell(&self, row: &Element) -> Option<Element> {
        row.children().item(self.column.saturating_sub(1))
    }

    /// Decode one row into the initialization scan's input, picking up the
    /// indent of a marker element left by an earlier pass.
    pub fn row_source(&self, row: &Element) -> RowSource {
        let markers = RowMarkers::parse(row.get_attribute("class").as_deref());
        let existing_indent = self.find_marker(row).map(|marker| {
            let margin = marker
                .style()
                .get_property_value("margin-left")
                .unwrap_or_default();
            parse_px(&margin).unwrap_or(0)
        });
        RowSource {
            markers,
            existing_indent,
        }
    }

    fn find_marker(&self, row: &Element) -> Option<HtmlElement> {
        self.marker_cell(row)
            .and_then(|cell| {
                cell.query_selector(&format!(".{MARKER_CLASS}"))
                    .ok()
                    .flatten()
            })
            .and_then(|marker| marker.dyn_into().ok())
    }

    /// Inject the marker span and, unless the row is blacklisted, the
    /// expander icon at the front of the hierarchy cell. Returns the icon
    /// so the caller can bind its click handler.
    pub fn inject_marker(
        &self,
        row: &Element,
        layout: &RowLayout,
        expanded_class: &str,
        collapsed_class: &str,
    ) -> Option<Element> {
        let cell = self.marker_cell(row)?;
        let document = self.document();

        let marker = document
            .create_element("span")
            .expect("Failed to create marker element");
        marker
            .set_attribute("class", MARKER_CLASS)
            .expect("Failed to class marker element");
        marker
            .set_attribute("style", &format!("margin-left: {}px;", layout.indent))
            .expect("Failed to indent marker element");

        let icon = layout.icon.map(|state| {
            let icon = document
                .create_element("i")
                .expect("Failed to create expander icon");
            let class = match state {
                IconState::Expanded => expanded_class,
                IconState::Collapsed => collapsed_class,
            };
            icon.set_attribute("class", class)
                .expect("Failed to class expander icon");
            icon.set_attribute("id", &format!("{EXPANDER_ID_PREFIX}{}", layout.id))
                .expect("Failed to id expander icon");
            icon.set_attribute("style", "cursor: pointer;")
                .expect("Failed to style expander icon");
            icon
        });

        let first = cell.first_element_child();
        if let Some(icon) = &icon {
            cell.insert_before(icon, first.as_deref())
                .expect("Failed to insert expander icon");
            let icon_node: &web_sys::Node = icon.as_ref();
            cell.insert_before(&marker, Some(icon_node))
                .expect("Failed to insert marker element");
        } else {
            cell.insert_before(&marker, first.as_deref())
                .expect("Failed to insert marker element");
        }

        icon
    }

    /// The row's own expander icon, looked up inside the hierarchy cell.
    pub fn expander_icon(&self, row: &Element) -> Option<HtmlElement> {
        self.marker_cell(row)
            .and_then(|cell| cell.query_selector("i").ok().flatten())
            .and_then(|icon| icon.dyn_into().ok())
    }

    /// First icon anywhere in the row; the walk reads its class string as
    /// the row's recorded expand state.
    pub fn first_icon(&self, row: &Element) -> Option<Element> {
        row.query_selector("i").ok().flatten()
    }

    pub fn set_icon_opacity(&self, icon: &HtmlElement, faded: bool) {
        icon.style()
            .set_property("opacity", if faded { "0" } else { "1" })
            .expect("Failed to set icon opacity");
    }

    pub fn hide_row(&self, row: &Element) {
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            row.style()
                .set_property("display", "none")
                .expect("Failed to hide row");
        }
    }

    pub fn show_row(&self, row: &Element) {
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            let _ = row.style().remove_property("display");
        }
    }

    pub fn row_visible(&self, row: &Element) -> bool {
        row.dyn_ref::<HtmlElement>()
            .map(|row| row.style().get_property_value("display").unwrap_or_default() != "none")
            .unwrap_or(false)
    }

    /// Apply one toggle's visibility changes to the walked rows.
    pub fn apply_changes(&self, changes: &[RowChange], rows: &[Element]) {
        for change in changes {
            match *change {
                RowChange::Hide { index } => self.hide_row(&rows[index]),
                RowChange::Show { index } => self.show_row(&rows[index]),
            }
        }
    }

    /// Restripe the visible rows of the table's first tbody. Tables without
    /// the opt-in class are left alone.
    pub fn update_colors(&self) {
        if !self.table.class_list().contains(STRIPED_TABLE_CLASS) {
            return;
        }
        let Some(body) = self.table.query_selector("tbody").ok().flatten() else {
            return;
        };
        let list = body.get_elements_by_tag_name("tr");
        let rows: Vec<Element> = (0..list.length()).filter_map(|i| list.item(i)).collect();
        let visible: Vec<bool> = rows.iter().map(|row| self.row_visible(row)).collect();

        let theme = current_theme();
        for (row, stripe) in rows.iter().zip(stripe_rows(&visible)) {
            let (Some(row), Some(stripe)) = (row.dyn_ref::<HtmlElement>(), stripe) else {
                continue;
            };
            row.style()
                .set_property("background", stripe.background(theme))
                .expect("Failed to stripe row");
        }
    }
}

fn parse_px(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px").and_then(|v| v.trim().parse().ok())
}
