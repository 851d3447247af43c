use okved_source::{CachedRepository, HttpSource, ReferenceSource, SourceError};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

fn serve_once(response: String) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });
    (format!("http://{addr}/okved.json"), handle)
}

fn source(url: String, max_bytes: u64) -> HttpSource {
    HttpSource::new(url, Duration::from_secs(5), max_bytes)
}

#[test]
fn http_source_downloads_reference_list() {
    let body = r#"[{"code":"4567","name":"X"}]"#;
    let (url, handle) = serve_once(format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    let mut repo = CachedRepository::new(source(url, 1024));
    assert_eq!(repo.preload().expect("preload"), 1);
    handle.join().expect("server");
}

#[test]
fn http_source_rejects_advertised_oversized_payload() {
    let (url, handle) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Length: 20000000\r\nConnection: close\r\n\r\n".to_string(),
    );
    let err = source(url, 1024).fetch_json().unwrap_err();
    assert!(matches!(err, SourceError::TooLarge { limit: 1024 }));
    handle.join().expect("server");
}

#[test]
fn http_source_rejects_oversized_streamed_payload() {
    let body = "[".repeat(64);
    let (url, handle) = serve_once(format!(
        "HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n{body}"
    ));
    let err = source(url, 16).fetch_json().unwrap_err();
    assert!(matches!(err, SourceError::TooLarge { limit: 16 }));
    handle.join().expect("server");
}

#[test]
fn http_source_reports_error_status() {
    let (url, handle) = serve_once(
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    );
    let err = source(url, 1024).fetch_json().unwrap_err();
    assert!(matches!(err, SourceError::Http(_)));
    handle.join().expect("server");
}

#[test]
fn http_source_rejects_other_schemes() {
    let err = source("ftp://127.0.0.1/okved.json".to_string(), 1024)
        .fetch_json()
        .unwrap_err();
    assert!(matches!(err, SourceError::UnsupportedScheme(_)));
}

#[test]
fn http_source_times_out_on_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = thread::spawn(move || {
        let (_stream, _) = listener.accept().expect("accept");
        thread::sleep(Duration::from_secs(4));
    });

    let started = Instant::now();
    let err = HttpSource::new(
        format!("http://{addr}/okved.json"),
        Duration::from_secs(1),
        1024,
    )
    .fetch_json()
    .unwrap_err();
    let elapsed = started.elapsed();

    match err {
        SourceError::Http(err) => assert!(err.is_timeout(), "not a timeout: {err}"),
        other => panic!("expected http timeout, got {other:?}"),
    }
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
    handle.join().expect("server");
}
