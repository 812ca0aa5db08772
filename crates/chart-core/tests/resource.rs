// File: crates/chart-core/tests/resource.rs
// Purpose: UI resource descriptor and file loading.

use chart_core::resource::{RESOURCE_MIME_TYPE, RESOURCE_URI};
use chart_core::{ResourceError, UiResource};

#[test]
fn resource_reads_the_document_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mcp-app.html");
    let html = "<!doctype html>\n<title>chart</title>\n";
    std::fs::write(&path, html).expect("write");

    let contents = UiResource::at(&path).read().expect("read");
    assert_eq!(contents.uri, RESOURCE_URI);
    assert_eq!(contents.mime_type, RESOURCE_MIME_TYPE);
    assert_eq!(contents.text, html);

    let json = serde_json::to_value(&contents).expect("serialize");
    assert_eq!(json["mimeType"], RESOURCE_MIME_TYPE);
}

#[test]
fn missing_resource_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = UiResource::at(dir.path().join("nope.html")).read().expect_err("missing file");
    let ResourceError::Read { uri, .. } = err;
    assert_eq!(uri, RESOURCE_URI);
}
