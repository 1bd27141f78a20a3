//! Browser downloads for exported table data.

use anyhow::{anyhow, Result};
use serde::Serialize;
use shared::export::{to_csv, to_json, ExportFormat};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::services::logging::Logger;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Save `content` as `filename` through a temporary hidden link
pub fn download(content: &str, filename: &str, format: ExportFormat) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window available"))?;
    let document = window.document().ok_or_else(|| anyhow!("No document available"))?;
    let body = document.body().ok_or_else(|| anyhow!("Document has no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("Created element is not an anchor"))?;
    link.set_href(&url);
    link.set_download(filename);
    link.style()
        .set_property("visibility", "hidden")
        .map_err(js_error)?;

    body.append_child(&link).map_err(js_error)?;
    link.click();
    body.remove_child(&link).map_err(js_error)?;
    Url::revoke_object_url(&url).map_err(js_error)?;

    Logger::info_with_component(
        "download",
        &format!("Downloaded {} ({} bytes)", filename, content.len()),
    );
    Ok(())
}

pub fn download_csv<T: Serialize>(rows: &[T], headers: &[&str], filename: &str) -> Result<()> {
    let csv = to_csv(rows, headers)?;
    download(&csv, filename, ExportFormat::Csv)
}

pub fn download_json<T: Serialize>(rows: &[T], filename: &str) -> Result<()> {
    let json = to_json(rows)?;
    download(&json, filename, ExportFormat::Json)
}
