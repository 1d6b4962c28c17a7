//! One end-to-end page retrieval over one TCP connection.
//!
//! A session resolves its target, connects, sends the request, then drives
//! the response assembler with repeated reads until the response is
//! complete. Connect, send, and receive are strictly sequential within a
//! session; nothing is shared with other sessions.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::{info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use url::Url;

use crate::config::{HTTP_PORT, RECEIVE_BUFFER_SIZE};
use crate::dns::resolve_host_addr;
use crate::error_handling::{update_error_stats, FetchError};
use crate::fetch::FetchContext;
use crate::http::{build_request, AssemblerState, ResponseAssembler};
use crate::models::{FetchResult, FetchTarget};

/// Runs one fetch session to completion under the per-session deadline and
/// converts the outcome into a [`FetchResult`].
///
/// Every failure is local to this session: it becomes this session's result
/// and is counted in the shared error statistics, never raised further. The
/// connection is closed on every exit path, including deadline expiry,
/// because the stream is owned by the aborted future.
pub async fn run_session(target: &FetchTarget, ctx: &FetchContext) -> FetchResult {
    let outcome = tokio::time::timeout(ctx.session_timeout, fetch_one(target, ctx)).await;

    let error = match outcome {
        Ok(Ok(body)) => return FetchResult::completed(target, body),
        Ok(Err(error)) => error,
        Err(_) => FetchError::Timeout(ctx.session_timeout),
    };

    update_error_stats(&ctx.error_stats, &error);
    warn!(
        "{}: fetch failed for {}: {}",
        target.sequence_id, target.url, error
    );
    FetchResult::failed(target, error)
}

/// The session body: resolve, connect, send, receive, shut down.
async fn fetch_one(target: &FetchTarget, ctx: &FetchContext) -> Result<Vec<u8>, FetchError> {
    let (host, port, path) = split_target(&target.url)?;

    let ip = resolve_host_addr(&host, &ctx.resolver).await?;
    let addr = SocketAddr::new(ip, port);

    let mut stream = connect(target.sequence_id, &host, addr, ctx.connect_timeout).await?;

    let request = build_request(&host, &path);
    send_request(target.sequence_id, &mut stream, &request).await?;

    let body = receive_response(target.sequence_id, &mut stream).await?;

    // Polite half-close on success; the drop below closes the socket on
    // every path regardless.
    let _ = stream.shutdown().await;
    Ok(body)
}

/// Splits a validated URL into the pieces a session needs: the display host
/// for the `Host` header and resolution, the port to connect to, and the
/// request-line target (path plus query).
fn split_target(url: &Url) -> Result<(String, u16, String), FetchError> {
    let host = url
        .host_str()
        .ok_or_else(|| FetchError::Resolution {
            host: url.to_string(),
            message: "URL has no host".to_string(),
        })?
        .to_string();
    let port = url.port().unwrap_or(HTTP_PORT);
    let path = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };
    Ok((host, port, path))
}

/// Opens the TCP connection for one session.
async fn connect(
    id: usize,
    host: &str,
    addr: SocketAddr,
    timeout: Duration,
) -> Result<TcpStream, FetchError> {
    let stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| FetchError::Connect {
            addr,
            source: io::Error::new(io::ErrorKind::TimedOut, "connect timed out"),
        })?
        .map_err(|source| FetchError::Connect { addr, source })?;
    info!("{id}: connected to {host} ({addr})");
    Ok(stream)
}

/// Writes the full request to the stream.
///
/// `write_all` retries partial writes until every byte is out, so a short
/// write never truncates the request silently.
pub(crate) async fn send_request<S>(
    id: usize,
    stream: &mut S,
    request: &[u8],
) -> Result<(), FetchError>
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(request).await.map_err(FetchError::Send)?;
    info!("{id}: sent {} bytes", request.len());
    Ok(())
}

/// Drives the response assembler with repeated reads until completion.
///
/// Reads land in a fixed scratch buffer that is reused across reads; each
/// chunk is copied into the assembler's accumulator before the next read
/// overwrites it. A zero-length read before completion means the peer
/// closed early and is always an error, never a success.
pub(crate) async fn receive_response<S>(id: usize, stream: &mut S) -> Result<Vec<u8>, FetchError>
where
    S: AsyncRead + Unpin,
{
    let mut scratch = [0u8; RECEIVE_BUFFER_SIZE];
    let mut assembler = ResponseAssembler::new();

    while !assembler.is_complete() {
        let n = stream
            .read(&mut scratch)
            .await
            .map_err(|e| FetchError::Receive(e.to_string()))?;
        if n == 0 {
            return Err(FetchError::Receive(unexpected_close_message(
                assembler.state(),
            )));
        }
        assembler.push_chunk(&scratch[..n])?;
    }

    info!("{id}: received {} bytes", assembler.total_len());
    assembler
        .into_body()
        .ok_or_else(|| FetchError::Receive("body unavailable after completion".to_string()))
}

fn unexpected_close_message(state: AssemblerState) -> String {
    match state {
        AssemblerState::AwaitingHeaders => {
            "connection closed before the header terminator arrived".to_string()
        }
        AssemblerState::AwaitingBody => {
            "connection closed before the declared content length arrived".to_string()
        }
        AssemblerState::Complete => "connection closed".to_string(),
    }
}
