//! Export of the currently filtered dataset to a CSV file download.
use super::column::Column;
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Build the CSV document for `rows` using the column schema.
///
/// Headers come from the column labels; cell values from the column
/// accessors (raw values, not rendered markup), with each column's
/// `empty_label` standing in for missing values. An empty `rows` slice still
/// produces a headers-only document. The leading UTF-8 BOM keeps non-ASCII
/// text intact when the file is opened in Excel.
pub fn csv_document<T>(rows: &[T], columns: &[Column<T>]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = columns
        .iter()
        .map(|c| escape_csv_cell(c.header))
        .collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&c.export_value(row)))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// `{Resource}_{yyyy-MM-dd}.csv` — deterministic per resource and day, so
/// repeated exports in one session resolve to the same name.
pub fn export_file_name(resource: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", resource, date.format("%Y-%m-%d"))
}

/// Serialize the filtered rows and trigger a browser download.
///
/// Any failure is returned to the caller (which surfaces it as a toast);
/// nothing here may panic past the adapter boundary.
pub fn download_csv<T>(rows: &[T], columns: &[Column<T>], resource: &str) -> Result<(), String> {
    let content = csv_document(rows, columns);
    let filename = export_file_name(resource, chrono::Utc::now().date_naive());
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &filename)
}

/// Quote a cell when it contains the separator, quotes or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download via a transient object-URL anchor appended to the document body.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        note: Option<String>,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::text("name", "Name", |r: &Row| r.name.clone()),
            Column::new("note", "Note", |r: &Row| r.note.clone())
                .with_empty_label("No description"),
        ]
    }

    #[test]
    fn document_has_bom_headers_and_one_line_per_row() {
        let rows = vec![
            Row {
                name: "Desk".into(),
                note: Some("oak".into()),
            },
            Row {
                name: "Lamp".into(),
                note: None,
            },
        ];
        let doc = csv_document(&rows, &columns());
        assert_eq!(doc, "\u{FEFF}Name;Note\nDesk;oak\nLamp;No description\n");
    }

    #[test]
    fn empty_set_produces_headers_only() {
        let doc = csv_document(&Vec::<Row>::new(), &columns());
        assert_eq!(doc, "\u{FEFF}Name;Note\n");
    }

    #[test]
    fn cells_with_separator_or_quotes_are_quoted() {
        let rows = vec![Row {
            name: "a;b".into(),
            note: Some("say \"hi\"\nnow".into()),
        }];
        let doc = csv_document(&rows, &columns());
        assert_eq!(doc, "\u{FEFF}Name;Note\n\"a;b\";\"say \"\"hi\"\"\nnow\"\n");
    }

    #[test]
    fn export_scope_is_whatever_slice_it_is_given() {
        // 100-row dataset narrowed upstream: only the surviving rows land.
        let all: Vec<Row> = (0..100)
            .map(|i| Row {
                name: format!("row-{i}"),
                note: None,
            })
            .collect();
        let filtered: Vec<Row> = all.iter().filter(|r| r.name.contains("99")).cloned().collect();
        assert_eq!(filtered.len(), 1);
        let doc = csv_document(&filtered, &columns());
        assert_eq!(doc.lines().count(), 2); // header + 1 record
    }

    #[test]
    fn file_name_is_resource_and_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_file_name("Products", date), "Products_2024-03-05.csv");
        // Deterministic per invocation day.
        assert_eq!(
            export_file_name("Products", date),
            export_file_name("Products", date)
        );
    }
}
