//! Parse a fetched response body into a JSON document.

use serde_json::Value;

use super::FetchError;

/// UTF-8 byte order mark; some static file servers prepend it.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Parse the response body into a JSON value, tolerating a leading BOM.
pub fn parse_document(body: &[u8]) -> Result<Value, FetchError> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    Ok(serde_json::from_slice(body)?)
}
