//! Incremental HTTP response assembly.
//!
//! A response arrives over a plain byte stream with no framing beyond what
//! its `Content-Length` header declares, so completion has to be re-decided
//! after every received chunk: first locate the blank line that terminates
//! the header block, then count accumulated body bytes against the declared
//! length. Chunk boundaries carry no meaning; the terminator and the body
//! may arrive split across any number of reads, including one byte at a
//! time.

use crate::error_handling::FetchError;

/// Header-block terminator: the blank line after the last header.
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Name of the completion-signal header. Matching is case-sensitive.
const CONTENT_LENGTH: &[u8] = b"Content-Length";

/// Where the assembler is in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// The header terminator has not been seen yet.
    AwaitingHeaders,
    /// Headers are parsed; body bytes are still short of `Content-Length`.
    AwaitingBody,
    /// The full response has arrived. Terminal.
    Complete,
}

/// Reassembles one HTTP response from successive received chunks.
///
/// Chunks are appended in arrival order and never reordered. Once the header
/// terminator is located, the header/body split point and the parsed
/// `Content-Length` are cached; header bytes cannot change after that point.
///
/// There is no error state: an I/O failure aborts the owning session, and
/// the only error this machine itself can produce is an unparseable
/// `Content-Length` value.
#[derive(Debug)]
pub struct ResponseAssembler {
    accumulator: Vec<u8>,
    state: AssemblerState,
    /// Index of the first body byte, once the terminator has been located.
    body_start: Option<usize>,
    /// Declared body length; zero when the header is absent.
    content_length: usize,
}

impl ResponseAssembler {
    /// Creates an assembler in `AwaitingHeaders` with an empty accumulator.
    pub fn new() -> Self {
        Self {
            accumulator: Vec::new(),
            state: AssemblerState::AwaitingHeaders,
            body_start: None,
            content_length: 0,
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Whether the full response has arrived.
    pub fn is_complete(&self) -> bool {
        self.state == AssemblerState::Complete
    }

    /// Total bytes accumulated so far (headers + body).
    pub fn total_len(&self) -> usize {
        self.accumulator.len()
    }

    /// Appends one received chunk and re-evaluates completion.
    ///
    /// The same chunk may carry the header terminator and the whole body, so
    /// after the headers are parsed the body check runs immediately against
    /// everything accumulated. Callers must not push empty chunks: a
    /// zero-length read means the stream closed, which is the owning
    /// session's problem, not the assembler's.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ContentLengthParse`] if the header block is
    /// terminated but its `Content-Length` value is not a valid non-negative
    /// base-10 integer. This is fatal for the session.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<AssemblerState, FetchError> {
        debug_assert!(!chunk.is_empty(), "empty chunks must not be pushed");
        if self.state == AssemblerState::Complete {
            return Ok(self.state);
        }

        self.accumulator.extend_from_slice(chunk);

        if self.state == AssemblerState::AwaitingHeaders {
            if let Some(terminator) = find_header_terminator(&self.accumulator) {
                self.content_length = parse_content_length(&self.accumulator[..terminator])?;
                self.body_start = Some(terminator + HEADER_TERMINATOR.len());
                self.state = AssemblerState::AwaitingBody;
            }
        }

        if self.state == AssemblerState::AwaitingBody {
            if let Some(start) = self.body_start {
                if self.accumulator.len() - start >= self.content_length {
                    self.state = AssemblerState::Complete;
                }
            }
        }

        Ok(self.state)
    }

    /// The header block (without the terminator), once it has been located.
    pub fn header_block(&self) -> Option<&[u8]> {
        self.body_start
            .map(|start| &self.accumulator[..start - HEADER_TERMINATOR.len()])
    }

    /// The declared body length, meaningful once headers are parsed.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// The body bytes, available only once the response is complete.
    ///
    /// Exactly `Content-Length` bytes; anything the peer sent beyond the
    /// declared length is not part of the body.
    pub fn body(&self) -> Option<&[u8]> {
        if !self.is_complete() {
            return None;
        }
        self.body_start
            .map(|start| &self.accumulator[start..start + self.content_length])
    }

    /// Consumes the assembler and returns the owned body, only on complete.
    pub fn into_body(self) -> Option<Vec<u8>> {
        if !self.is_complete() {
            return None;
        }
        let start = self.body_start?;
        let mut bytes = self.accumulator;
        bytes.truncate(start + self.content_length);
        bytes.drain(..start);
        Some(bytes)
    }
}

impl Default for ResponseAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the byte offset of the header terminator, if it has arrived.
fn find_header_terminator(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(HEADER_TERMINATOR.len())
        .position(|window| window == HEADER_TERMINATOR)
}

/// Parses the `Content-Length` value out of a terminated header block.
///
/// The header name is matched exactly (case-sensitive) and the last
/// occurrence wins when the header is duplicated. A missing header means a
/// zero-length body: completion then happens immediately after the
/// terminator. That cannot express bodies that simply stream until close,
/// which is out of scope along with chunked encoding.
fn parse_content_length(header_block: &[u8]) -> Result<usize, FetchError> {
    let mut length = 0usize;
    for line in header_block.split(|&byte| byte == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let Some(colon) = line.iter().position(|&byte| byte == b':') else {
            continue;
        };
        if &line[..colon] != CONTENT_LENGTH {
            continue;
        }
        let value = String::from_utf8_lossy(&line[colon + 1..]);
        let value = value.trim();
        length = value
            .parse::<usize>()
            .map_err(|_| FetchError::ContentLengthParse(value.to_string()))?;
    }
    Ok(length)
}
