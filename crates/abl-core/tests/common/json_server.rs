//! Minimal HTTP/1.1 server serving one JSON body for integration tests.
//!
//! Answers every GET with a fixed status and body, and counts requests so
//! tests can assert how many independent fetches were issued.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct JsonServerOptions {
    /// Status line sent for every response, e.g. "200 OK".
    pub status: &'static str,
    /// Content-Type header value.
    pub content_type: &'static str,
}

impl Default for JsonServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
        }
    }
}

/// Handle to a running test server.
pub struct JsonServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Number of GET requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` for every GET.
/// Returns a handle with the base URL (e.g. "http://127.0.0.1:12345/").
/// The server runs until the process exits.
pub fn start(body: &str) -> JsonServer {
    start_with_options(body, JsonServerOptions::default())
}

/// Like `start` but allows customizing status and content type.
pub fn start_with_options(body: &str, opts: JsonServerOptions) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.as_bytes().to_vec());
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &body, opts, &hits));
        }
    });
    JsonServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, body: &[u8], opts: JsonServerOptions, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        body.len(),
        opts.content_type
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
