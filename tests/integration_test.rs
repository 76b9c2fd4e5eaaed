//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta un `Server` en un puerto efímero sobre un directorio
//! temporal y le habla HTTP crudo por `TcpStream`.

use simple_web_server::config::Config;
use simple_web_server::http::StatusCode;
use simple_web_server::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tempfile::TempDir;

/// Respuesta separada en status line, headers y body
struct RawResponse {
    status_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawResponse {
    fn parse(raw: &[u8]) -> Self {
        let pos = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response without blank line");
        let head = String::from_utf8(raw[..pos].to_vec()).expect("non UTF-8 headers");
        let mut lines = head.split("\r\n");
        let status_line = lines.next().unwrap().to_string();
        let headers = lines
            .map(|line| {
                let (name, value) = line.split_once(": ").expect("malformed header");
                (name.to_string(), value.to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: raw[pos + 4..].to_vec(),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// Helper: levanta un servidor que atiende `connections` conexiones
fn start_server(root: &Path, connections: usize) -> (SocketAddr, JoinHandle<Vec<Option<StatusCode>>>) {
    let config = Config {
        port: 0,
        root_dir: root.to_path_buf(),
        ..Config::default()
    };
    let server = Server::bind(config).expect("bind");
    let addr = server.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        (0..connections)
            .map(|_| server.serve_one().expect("serve"))
            .collect()
    });

    (addr, handle)
}

/// Helper: envía bytes crudos y lee la respuesta completa
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(request).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "Hi").unwrap();
    fs::create_dir(dir.path().join("blog")).unwrap();
    fs::write(dir.path().join("blog").join("post.html"), "<h2>Post</h2>").unwrap();
    dir
}

#[test]
fn test_get_root_returns_index() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"GET / HTTP/1.1\r\n\r\n"));

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Length"), Some("2"));
    assert_eq!(response.header("Content-Type"), Some("text/html; charset=utf-8"));
    assert_eq!(response.body, b"Hi");
    assert_eq!(handle.join().unwrap(), vec![Some(StatusCode::Ok)]);
}

#[test]
fn test_header_fields_in_order() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"GET /index.html HTTP/1.1\r\n\r\n"));

    assert_eq!(
        response.header_names(),
        vec!["Date", "Content-Type", "Content-Length", "Server", "Connection"]
    );
    assert_eq!(response.header("Server"), Some("SimpleWebServer"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert!(response.header("Date").unwrap().ends_with(" GMT"));
    handle.join().unwrap();
}

#[test]
fn test_nested_file() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(
        addr,
        b"GET /blog/post.html HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\n",
    ));

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.body, b"<h2>Post</h2>");
    handle.join().unwrap();
}

#[test]
fn test_missing_file_returns_404() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"GET /missing.html HTTP/1.1\r\n\r\n"));

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert_eq!(response.header("Content-Length"), Some("22"));
    assert_eq!(response.body, b"<h1>404 Not Found</h1>");
    assert_eq!(response.body.len(), 22);
    assert_eq!(handle.join().unwrap(), vec![Some(StatusCode::NotFound)]);
}

#[test]
fn test_directory_returns_404() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"GET /blog HTTP/1.1\r\n\r\n"));

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    handle.join().unwrap();
}

#[test]
fn test_post_returns_400_with_empty_body() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"POST / HTTP/1.1\r\n\r\n"));

    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
    assert_eq!(response.header("Content-Length"), Some("0"));
    assert!(response.body.is_empty());
    assert_eq!(handle.join().unwrap(), vec![Some(StatusCode::BadRequest)]);
}

#[test]
fn test_malformed_request_line_returns_400() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 2);

    let response = RawResponse::parse(&send_raw(addr, b"GET /\r\n\r\n"));
    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");

    let response = RawResponse::parse(&send_raw(addr, b"GET / HTTP/1.1 extra\r\n\r\n"));
    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");

    handle.join().unwrap();
}

#[test]
fn test_connection_closed_without_data() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 2);

    drop(TcpStream::connect(addr).unwrap());
    // El servidor sigue atendiendo la siguiente conexión
    let response = RawResponse::parse(&send_raw(addr, b"GET / HTTP/1.1\r\n\r\n"));
    assert_eq!(response.body, b"Hi");

    assert_eq!(handle.join().unwrap(), vec![None, Some(StatusCode::Ok)]);
}

#[test]
fn test_multiple_requests_sequentially() {
    let dir = site();
    let (addr, handle) = start_server(dir.path(), 5);

    for _ in 0..5 {
        let response = RawResponse::parse(&send_raw(addr, b"GET / HTTP/1.1\r\n\r\n"));
        assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    }

    assert_eq!(handle.join().unwrap().len(), 5);
}

#[test]
fn test_content_length_matches_binary_body() {
    let dir = site();
    let content: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(dir.path().join("data.bin"), &content).unwrap();
    let (addr, handle) = start_server(dir.path(), 1);

    let response = RawResponse::parse(&send_raw(addr, b"GET /data.bin HTTP/1.1\r\n\r\n"));

    let length: usize = response.header("Content-Length").unwrap().parse().unwrap();
    assert_eq!(length, response.body.len());
    assert_eq!(response.body, content);
    handle.join().unwrap();
}

#[test]
fn test_confined_root_blocks_traversal() {
    let outer = TempDir::new().unwrap();
    fs::write(outer.path().join("secret.txt"), "secret").unwrap();
    let root = outer.path().join("www");
    fs::create_dir(&root).unwrap();

    let config = Config {
        port: 0,
        root_dir: root.clone(),
        confine_root: true,
        ..Config::default()
    };
    let server = Server::bind(config).unwrap();
    let addr = server.local_addr().unwrap();
    let handle = thread::spawn(move || server.serve_one().unwrap());

    let response = RawResponse::parse(&send_raw(addr, b"GET /../secret.txt HTTP/1.1\r\n\r\n"));

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
    assert_eq!(handle.join().unwrap(), Some(StatusCode::NotFound));
}
