use crate::http::headers::Headers;

/// A decoded request: the target path plus its headers.
///
/// Built once per connection by [`crate::http::parser::read_request`] and
/// never modified afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request target exactly as sent (e.g. "/index.html?x=1").
    path: String,
    headers: Headers,
}

impl Request {
    pub fn new(path: impl Into<String>, headers: Headers) -> Self {
        Self {
            path: path.into(),
            headers,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieves a header value by its exact (case-sensitive) name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// The value of the `Host` header, if the client sent one.
    pub fn host(&self) -> Option<&str> {
        self.header("Host")
    }
}
