use super::component::TreeTable;

/// Fluent configuration for a [`TreeTable`].
///
/// The hierarchy column index is 1-based, matching the markup the server
/// renders. The two icon classes are the full class strings the expander
/// icon toggles between.
pub struct TreeTableBuilder {
    column: u32,
    expanded_class: Option<String>,
    collapsed_class: Option<String>,
}

impl TreeTableBuilder {
    pub fn new() -> Self {
        Self {
            column: 1,
            expanded_class: None,
            collapsed_class: None,
        }
    }

    /// 1-based index of the column holding the hierarchy markers.
    pub fn column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    /// Icon class marking an expanded row.
    pub fn expanded_class(mut self, class: impl Into<String>) -> Self {
        self.expanded_class = Some(class.into());
        self
    }

    /// Icon class marking a collapsed row.
    pub fn collapsed_class(mut self, class: impl Into<String>) -> Self {
        self.collapsed_class = Some(class.into());
        self
    }

    /// Build the configured tree table renderer.
    pub fn build(self) -> TreeTable {
        TreeTable {
            column: self.column,
            expanded_class: self.expanded_class.expect("expanded_class is required"),
            collapsed_class: self.collapsed_class.expect("collapsed_class is required"),
        }
    }
}

impl Default for TreeTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
