//! One-shot HTTP GET of the bootstrap document.
//!
//! Uses the curl crate (libcurl) to fetch the resource body and parse it as
//! JSON. Runs in the current thread; call from `spawn_blocking` if used
//! from async code.

mod error;
mod parse;

pub use error::FetchError;
pub use parse::parse_document;

use serde_json::Value;
use std::time::Duration;

/// Transfer limits for a bootstrap fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Abort the transfer once the body exceeds this many bytes.
    pub max_body_bytes: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
            max_body_bytes: None,
        }
    }
}

/// Performs a GET of `url` and parses the response body as JSON.
///
/// Follows redirects. Non-2xx statuses are an error. The body is
/// accumulated in memory, subject to `max_body_bytes`.
pub fn get_json(url: &str, opts: &FetchOptions) -> Result<Value, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut over_cap: Option<u64> = None;
    let cap = opts.max_body_bytes;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if let Some(limit) = cap {
                if (body.len() + data.len()) as u64 > limit {
                    over_cap = Some(limit);
                    return Ok(0); // abort transfer
                }
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };

    if let Some(limit) = over_cap {
        return Err(FetchError::BodyTooLarge {
            limit,
            received: body.len() as u64,
        });
    }
    performed?;

    let status = easy.response_code()?;
    if status < 200 || status >= 300 {
        return Err(FetchError::Http { status });
    }

    parse::parse_document(&body)
}
