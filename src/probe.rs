//! The ping primitive: one write-then-read-back round-trip

use crate::{
    defaults::PING_MARKER,
    error::{AppError, Result},
};
use std::io::ErrorKind;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Send the marker on `outgoing` and wait for as many bytes on `incoming`
///
/// Returns the wall-clock time from just before the write until the last
/// echoed byte has been read. The echoed bytes are only counted, not compared
/// against the marker.
pub async fn ping<W, R>(outgoing: &mut W, incoming: &mut R) -> Result<Duration>
where
    W: AsyncWrite + Unpin + ?Sized,
    R: AsyncRead + Unpin + ?Sized,
{
    let start = Instant::now();

    outgoing
        .write_all(PING_MARKER)
        .await
        .map_err(|e| AppError::io(format!("failed to send ping: {}", e)))?;
    outgoing
        .flush()
        .await
        .map_err(|e| AppError::io(format!("failed to send ping: {}", e)))?;

    let mut echoed = [0u8; PING_MARKER.len()];
    incoming.read_exact(&mut echoed).await.map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => AppError::io("session closed before the echo arrived"),
        _ => AppError::io(format!("failed to read echo: {}", e)),
    })?;

    Ok(start.elapsed())
}
