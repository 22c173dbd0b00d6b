// src/exec/pump.rs

//! Line pump that drains one child output stream.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::debug;

/// Read `stream` until end-of-stream, calling `emit` once per line.
///
/// - Lines are split on `\n`; a trailing `\r` is dropped.
/// - A final line without a terminator is still emitted.
/// - Invalid UTF-8 is replaced rather than ending the stream.
/// - Read errors end the pump just like end-of-stream; they are only logged.
///
/// Line length is not bounded: the buffer grows as needed.
pub async fn pump<R, F>(stream: R, mut emit: F)
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = trim_line_ending(&buf);
                emit(&String::from_utf8_lossy(line)[..]);
            }
            Err(e) => {
                debug!(error = %e, "output stream read failed; treating as end of stream");
                break;
            }
        }
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
