mod common;

use shortlink_api::server::serve;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn http_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_both_listeners_and_shuts_down() {
    let api_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let probe_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let api_addr = api_listener.local_addr().unwrap();
    let probe_addr = probe_listener.local_addr().unwrap();

    let state = common::create_test_state(vec![common::test_link("home", "https://example.com")]);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        serve(
            api_listener,
            probe_listener,
            state,
            Path::new("html/assets"),
            Duration::from_secs(5),
            async {
                let _ = stop_rx.await;
            },
        )
        .await
    });

    let probe = http_get(probe_addr, "/healthz").await;
    assert!(probe.starts_with("HTTP/1.1 200"), "{probe}");
    assert!(probe.ends_with("ok"));

    let redirect = http_get(api_addr, "/home").await;
    assert!(redirect.starts_with("HTTP/1.1 307"), "{redirect}");
    assert!(redirect.to_lowercase().contains("location: https://example.com"));

    stop_tx.send(()).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), server)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());

    assert!(TcpStream::connect(api_addr).await.is_err());
}

#[tokio::test]
async fn test_shutdown_fails_when_drain_overruns_timeout() {
    let api_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let probe_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let api_addr = api_listener.local_addr().unwrap();

    let state = common::create_test_state(vec![common::test_link("home", "https://example.com")]);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        serve(
            api_listener,
            probe_listener,
            state,
            Path::new("html/assets"),
            Duration::from_millis(300),
            async {
                let _ = stop_rx.await;
            },
        )
        .await
    });

    // Headers never finish, so the request stays in flight.
    let mut stalled = TcpStream::connect(api_addr).await.unwrap();
    stalled
        .write_all(b"GET /home HTTP/1.1\r\nHost: localhost\r\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    stop_tx.send(()).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), server)
        .await
        .unwrap()
        .unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "HTTP server did not drain within 300ms");

    drop(stalled);
}
