//! Mock indexer HTTP server for testing
//!
//! Serves a scripted sequence of replies, one per request, in order, and
//! records each request path. Once the script runs out every request gets
//! a 404.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// One scripted HTTP reply
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub status_text: &'static str,
    pub body: String,
}

impl MockReply {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK",
            body: body.into(),
        }
    }

    pub fn status(status: u16, status_text: &'static str) -> Self {
        Self {
            status,
            status_text,
            body: r#"{"error": "mock failure"}"#.to_string(),
        }
    }
}

/// Mock indexer server for testing
pub struct MockIndexerServer {
    port: u16,
    running: Arc<AtomicBool>,
    requested: Arc<Mutex<Vec<String>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockIndexerServer {
    /// Start a new mock server on a random available port
    pub fn start(replies: Vec<MockReply>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requested = Arc::new(Mutex::new(Vec::new()));

        // Non-blocking accept so stop() can end the loop
        listener.set_nonblocking(true)?;

        let running_clone = Arc::clone(&running);
        let requested_clone = Arc::clone(&requested);
        let mut replies: VecDeque<MockReply> = replies.into();

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        handle_connection(stream, &mut replies, &requested_clone);
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requested,
            thread_handle: Some(thread_handle),
        })
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Request paths (with query string) in arrival order
    pub fn requested_paths(&self) -> Vec<String> {
        self.requested.lock().map(|paths| paths.clone()).unwrap_or_default()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockIndexerServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(
    mut stream: TcpStream,
    replies: &mut VecDeque<MockReply>,
    requested: &Mutex<Vec<String>>,
) {
    // Accepted sockets must block while we read the request
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, "Bad Request", r#"{"error": "Invalid request"}"#);
        return;
    }

    if let Ok(mut paths) = requested.lock() {
        paths.push(parts[1].to_string());
    }

    match replies.pop_front() {
        Some(reply) => send_response(&mut stream, reply.status, reply.status_text, &reply.body),
        None => send_response(&mut stream, 404, "Not Found", r#"{"error": "Endpoint not found"}"#),
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::{ReqwestTransport, DEFAULT_TIMEOUT};
    use crate::config::Config;
    use crate::domain::{Provider, TransactionRecord};
    use crate::services::FetchService;

    #[test]
    fn test_algoscan_against_mock_server() {
        let server = MockIndexerServer::start(vec![
            MockReply::json(r#"[{"sender": "A", "amount": 10}, {"sender": "B", "amount": 20}]"#),
            MockReply::json(r#"[{"sender": "C", "amount": 30}]"#),
            MockReply::json("[]"),
        ])
        .unwrap();

        let config = Config::default()
            .with_base_url(Provider::AlgoScan, &format!("{}/api/transactions/", server.base_url()))
            .unwrap();
        let transport = Arc::new(ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap());
        let service = FetchService::new(transport, config);

        let result = service.fetch(Provider::AlgoScan, "ADDR", None).unwrap();

        assert_eq!(
            result.records,
            vec![
                TransactionRecord::new("A", 10),
                TransactionRecord::new("B", 20),
                TransactionRecord::new("C", 30),
            ]
        );
        assert_eq!(
            server.requested_paths(),
            vec![
                "/api/transactions/ADDR?offset=0",
                "/api/transactions/ADDR?offset=20",
                "/api/transactions/ADDR?offset=40",
            ]
        );
    }

    #[test]
    fn test_algoexplorer_against_mock_server() {
        let server = MockIndexerServer::start(vec![
            MockReply::json(
                r#"{"transactions": [
                    {"sender": "A", "asset-transfer-transaction": {"amount": 500}},
                    {"sender": "B", "payment-transaction": {"amount": 300}}
                ]}"#,
            ),
            MockReply::json(r#"{"current-round": 100}"#),
        ])
        .unwrap();

        let config = Config::default()
            .with_base_url(Provider::AlgoExplorer, &format!("{}/rl/v1/transactions", server.base_url()))
            .unwrap();
        let transport = Arc::new(ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap());
        let service = FetchService::new(transport, config);

        let result = service.fetch(Provider::AlgoExplorer, "ADDR", None).unwrap();

        assert_eq!(
            result.records,
            vec![TransactionRecord::new("A", 500), TransactionRecord::new("B", 300)]
        );
        assert_eq!(
            server.requested_paths()[0],
            "/rl/v1/transactions?page=1&limit=50&address=ADDR"
        );
    }

    #[test]
    fn test_server_error_soft_fails_to_empty() {
        let server = MockIndexerServer::start(vec![
            MockReply::json(r#"[{"sender": "A", "amount": 10}]"#),
            MockReply::status(503, "Service Unavailable"),
        ])
        .unwrap();

        let config = Config::default()
            .with_base_url(Provider::AlgoScan, &format!("{}/", server.base_url()))
            .unwrap();
        let transport = Arc::new(ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap());
        let service = FetchService::new(transport, config);

        let result = service.fetch_or_empty(Provider::AlgoScan, "ADDR", None);
        assert!(result.is_empty());
    }
}
