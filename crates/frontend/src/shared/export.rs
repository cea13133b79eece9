//! CSV export and browser downloads
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Types that can be written as CSV rows
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Header plus one line per record, joined with `,` and `\n`.
///
/// Cells are written as-is: a cell containing the delimiter shifts the
/// columns of its row, so such cells are reported with a warning.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));

    for (index, item) in data.iter().enumerate() {
        let row = item.to_csv_row();
        if row.iter().any(|cell| cell.contains(',') || cell.contains('\n')) {
            log::warn!("CSV row {} has a cell containing a delimiter", index + 1);
        }
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Save `content` as a file through a temporary anchor element
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_blob(content, mime)?;
    download_blob(&blob, filename)
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

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

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl CsvExportable for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["Key", "Value"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_header_only_for_empty_data() {
        assert_eq!(build_csv::<Pair>(&[]), "Key,Value");
    }

    #[test]
    fn test_no_trailing_newline_and_no_escaping() {
        let csv = build_csv(&[Pair("a", "1"), Pair("b", "x,y")]);
        assert_eq!(csv, "Key,Value\na,1\nb,x,y");
    }
}
