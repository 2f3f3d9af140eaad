//! Line-delimited JSON-RPC transport for MCP
//!
//! One message per line in each direction. Blank input lines are
//! skipped; responses to notifications are never written.

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter, Lines, Stdin,
    Stdout,
};
use tracing::debug;

pub struct Transport<R, W> {
    lines: Lines<BufReader<R>>,
    writer: BufWriter<W>,
}

/// Transport bound to the process stdin/stdout
pub type StdioTransport = Transport<Stdin, Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        Transport::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> Transport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer: BufWriter::new(writer),
        }
    }

    /// Next non-blank line, or None at end of input
    pub async fn read_message(&mut self) -> Result<Option<String>, McpError> {
        while let Some(line) = self.lines.next_line().await? {
            if !line.trim().is_empty() {
                debug!("Received: {}", line);
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Write one response line and flush
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        if is_notification_ack(&response) {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }
}

/// Empty response produced for a notification
fn is_notification_ack(response: &JsonRpcResponse) -> bool {
    response.id.is_none() && response.result.is_none() && response.error.is_none()
}
