//! Session send/receive tests over in-memory duplex streams.

use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};

use super::session::{receive_response, send_request};
use crate::error_handling::FetchError;
use crate::http::build_request;

#[tokio::test]
async fn test_receive_complete_response_across_writes() {
    let (mut server, mut client) = duplex(4096);

    let writer = tokio::spawn(async move {
        server
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Le")
            .await
            .unwrap();
        server.write_all(b"ngth: 5\r\n\r\nhel").await.unwrap();
        server.write_all(b"lo").await.unwrap();
        // Keep the stream open: completion must come from Content-Length,
        // not from close.
        server
    });

    let body = receive_response(0, &mut client).await.unwrap();
    assert_eq!(body, b"hello");
    drop(writer.await.unwrap());
}

#[tokio::test]
async fn test_receive_missing_content_length_is_empty_body() {
    let (mut server, mut client) = duplex(4096);
    server.write_all(b"HTTP/1.1 204 No Content\r\n\r\n").await.unwrap();

    let body = receive_response(0, &mut client).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_close_during_headers_is_receive_error() {
    let (mut server, mut client) = duplex(4096);
    server.write_all(b"HTTP/1.1 200 OK\r\nContent-Le").await.unwrap();
    drop(server);

    let result = receive_response(0, &mut client).await;
    match result {
        Err(FetchError::Receive(message)) => {
            assert!(message.contains("header terminator"), "{message}");
        }
        other => panic!("expected receive error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_truncated_body_is_receive_error_not_success() {
    let (mut server, mut client) = duplex(4096);
    server
        .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nhello")
        .await
        .unwrap();
    drop(server);

    let result = receive_response(0, &mut client).await;
    match result {
        Err(FetchError::Receive(message)) => {
            assert!(message.contains("content length"), "{message}");
        }
        other => panic!("expected receive error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_content_length_aborts_receive() {
    let (mut server, mut client) = duplex(4096);
    server
        .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: five\r\n\r\n")
        .await
        .unwrap();

    let result = receive_response(0, &mut client).await;
    assert!(matches!(result, Err(FetchError::ContentLengthParse(_))));
}

#[tokio::test]
async fn test_send_request_writes_full_request() {
    let (mut server, mut client) = duplex(4096);
    let request = build_request("example.com", "/");

    send_request(0, &mut client, &request).await.unwrap();
    drop(client);

    let mut received = Vec::new();
    server.read_to_end(&mut received).await.unwrap();
    assert_eq!(received, request);
}
