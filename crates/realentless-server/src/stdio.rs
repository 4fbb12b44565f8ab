//! Newline-delimited JSON-RPC over stdin/stdout, the transport MCP clients
//! use when they spawn the server as a subprocess.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;

use realentless_mcp::JsonRpcResponse;

use crate::app_state::AppState;
use crate::rpc;

/// Serve MCP on the process's stdin and stdout until stdin closes.
///
/// Nothing but JSON-RPC messages may be written to stdout; logging must be
/// routed to stderr.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run_stdio(state: AppState) -> std::io::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = BufWriter::new(tokio::io::stdout());
    serve(&state, reader, writer).await
}

/// Read messages line by line from `reader` and write one response line per
/// request to `writer`.
///
/// Each request runs on its own task, so responses are written in completion
/// order rather than arrival order. Once `reader` is exhausted, in-flight
/// requests are still answered before returning.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub async fn serve<R, W>(state: &AppState, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    // Dropped at EOF so `rx` closes once the last request task finishes.
    let mut tx = Some(tx);
    let mut line = Vec::new();

    loop {
        tokio::select! {
            read = reader.read_until(b'\n', &mut line), if tx.is_some() => {
                if read? == 0 {
                    tx = None;
                    continue;
                }

                let message = std::mem::take(&mut line);
                if message.trim_ascii().is_empty() {
                    continue;
                }

                let Some(sender) = tx.clone() else {
                    continue;
                };
                let state = state.clone();
                tokio::spawn(async move {
                    if let Some(response) = rpc::handle_message(&state, &message).await {
                        // Receiver only goes away if the writer already failed.
                        let _ = sender.send(response);
                    }
                });
            }
            Some(response) = rx.recv() => {
                let mut encoded = serde_json::to_vec(&response)?;
                encoded.push(b'\n');
                writer.write_all(&encoded).await?;
                writer.flush().await?;
            }
            else => break,
        }
    }

    Ok(())
}
