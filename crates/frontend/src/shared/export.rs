/// CSV download of the rows a dashboard currently shows
use contracts::shared::pipeline::{export_file_name, to_csv, Record};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Serialise `rows` and hand the file to the browser as
/// `<dataset>_<qualifier>.csv`.
///
/// An empty selection still downloads a header-only file.
pub fn export_records<'a, R, I>(rows: I, dataset: &str, qualifier: &str) -> Result<(), String>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let content = to_csv(rows).map_err(|e| format!("Failed to build CSV: {}", e))?;
    let filename = export_file_name(dataset, qualifier);

    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &filename)?;

    log::info!("Exported {} ({} bytes)", filename, content.len());
    Ok(())
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Object URL + hidden anchor click, no network involved
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

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

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
