//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::trace;

use super::error::TransportError;

/// Reads JSON-RPC messages from a reader, writes responses to a writer.
///
/// Generic over reader/writer so tests can drive it from memory.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line from the input stream.
    ///
    /// Returns `None` on EOF. Blank lines come back as empty strings.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(TransportError::Read)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        trace!(len = trimmed.len(), "read message");
        Ok(Some(trimmed.to_string()))
    }

    /// Writes one message followed by `\n`, then flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.flush().await
    }

    /// Flushes any buffered output.
    pub async fn flush(&mut self) -> Result<(), TransportError> {
        self.writer.flush().await.map_err(TransportError::Write)
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
