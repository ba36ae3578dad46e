pub fn build_csv<I, R>(headers: &[&str], rows: I) -> Result<String, String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(headers)
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV is not UTF-8: {}", e))
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let a = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    log::debug!("skipping download of {} ({} bytes)", filename, csv_data.len());
    Ok(())
}
