use leptos::prelude::*;
use std::sync::Arc;

/// Declarative mapping from a row to one displayed/exported cell.
///
/// The engine never looks inside the row type: every column carries an
/// explicit accessor resolved at configuration time. `key` is nominal — it is
/// what search configurations refer to and what identifies the column — while
/// `header` is the human label used for the table header and the export
/// document.
pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    /// Export placeholder for rows where the accessor yields nothing
    /// ("No description", "Never", ...). Keeps spreadsheet columns
    /// self-explanatory instead of leaving blank cells.
    pub empty_label: &'static str,
    accessor: Arc<dyn Fn(&T) -> Option<String> + Send + Sync>,
    cell: Option<Arc<dyn Fn(&T) -> AnyView + Send + Sync>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            empty_label: self.empty_label,
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        header: &'static str,
        accessor: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header,
            empty_label: "-",
            accessor: Arc::new(accessor),
            cell: None,
        }
    }

    /// Column whose accessor always yields a value.
    pub fn text(
        key: &'static str,
        header: &'static str,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, header, move |row| Some(accessor(row)))
    }

    pub fn with_empty_label(mut self, label: &'static str) -> Self {
        self.empty_label = label;
        self
    }

    /// Custom cell renderer. The accessor is still used for search and
    /// export, so the raw value and the rendered markup can differ.
    pub fn with_cell(mut self, cell: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(cell));
        self
    }

    /// Raw field value for this column, if the row has one.
    pub fn value(&self, row: &T) -> Option<String> {
        (self.accessor)(row)
    }

    /// Value as it appears in an exported document.
    pub fn export_value(&self, row: &T) -> String {
        self.value(row)
            .unwrap_or_else(|| self.empty_label.to_string())
    }

    /// Rendered table cell content.
    pub fn render(&self, row: &T) -> AnyView {
        match &self.cell {
            Some(cell) => cell(row),
            None => {
                let text = self.export_value(row);
                view! { <span>{text}</span> }.into_any()
            }
        }
    }
}
