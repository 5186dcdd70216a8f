use docroot::http::headers::Headers;

#[test]
fn test_headers_insert_and_get() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");

    assert_eq!(headers.get("Host"), Some("example.com"));
    assert_eq!(headers.get("Missing"), None);
    assert!(headers.contains_key("Host"));
}

#[test]
fn test_headers_overwrite_keeps_first_position() {
    let mut headers = Headers::new();
    headers.insert("Location", "a");
    headers.insert("Host", "x");
    headers.insert("Location", "b");

    let entries: Vec<_> = headers.iter().collect();
    assert_eq!(entries, vec![("Location", "b"), ("Host", "x")]);
}

#[test]
fn test_headers_case_sensitive_keys() {
    let mut headers = Headers::new();
    headers.insert("Host", "a");
    headers.insert("HOST", "b");

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("host"), None);
}

#[test]
fn test_headers_from_iterator() {
    let headers: Headers = [("A", "1"), ("B", "2"), ("A", "3")].into_iter().collect();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("A"), Some("3"));
}

#[test]
fn test_headers_default_is_empty() {
    let headers = Headers::default();
    assert!(headers.is_empty());
    assert_eq!(headers.iter().count(), 0);
}
