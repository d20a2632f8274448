use crate::{NULL_PLACEHOLDER, RequestInfo};

#[test]
fn test_missing_client_and_path_render_placeholders() {
    let info = RequestInfo::new("R1");

    assert_eq!(info.client_addr_or_placeholder(), NULL_PLACEHOLDER);
    assert_eq!(info.path_or_placeholder(), "[null]");
}

#[test]
fn test_known_client_and_path_render_values() {
    let info = RequestInfo::new("R1")
        .with_client_addr("10.0.0.7")
        .with_path("/index.html");

    assert_eq!(info.client_addr_or_placeholder(), "10.0.0.7");
    assert_eq!(info.path_or_placeholder(), "/index.html");
}

#[test]
fn test_properties_dump_is_sorted_one_per_line() {
    let info = RequestInfo::new("R1")
        .with_property("version", "HTTP/1.1")
        .with_property("method", "GET");

    assert_eq!(info.properties_dump(), "method: GET\nversion: HTTP/1.1");
}

#[test]
fn test_properties_dump_empty() {
    assert_eq!(RequestInfo::new("R1").properties_dump(), "");
}
