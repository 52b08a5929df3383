// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Draining child streams.
//!
//! ```text
//! collect()
//!   one reader task per piped stream --> unbounded channel of byte chunks
//!   read until EOF, whatever the encoding
//!   wait for exit, then join readers
//!   --> CommandOutput { exit_code, stdout, stderr }   (lossy UTF-8, verbatim)
//! ```

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{CommandOutput, ShellCommand, StreamFlags};
use crate::error::Result;

/// Receiving half of a stream reader.
struct Capture {
    flags: StreamFlags,
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
    handle: Option<JoinHandle<()>>,
}

impl Capture {
    fn start<R>(stream: Option<R>, flags: StreamFlags, label: &str, stream_name: &'static str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let wanted = flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING);
        let handle = stream.filter(|_| wanted).map(|stream| {
            let label = label.to_string();
            tokio::spawn(async move {
                forward_chunks(stream, flags, &label, stream_name, tx).await;
            })
        });
        Self { flags, rx, handle }
    }

    async fn finish(mut self) -> String {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        if !self.flags.contains(StreamFlags::KEEP_IN_STRING) {
            return String::new();
        }
        let mut bytes = Vec::new();
        while let Ok(chunk) = self.rx.try_recv() {
            bytes.extend_from_slice(&chunk);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl ShellCommand {
    pub(super) async fn collect(&self, child: &mut Child) -> Result<CommandOutput> {
        let label = self.label_str();
        let stdout = Capture::start(child.stdout.take(), self.stdout_flags(), label, "stdout");
        let stderr = Capture::start(child.stderr.take(), self.stderr_flags(), label, "stderr");

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for '{}'", self.line()))?;

        Ok(CommandOutput::new(
            status.code().unwrap_or(-1),
            stdout.finish().await,
            stderr.finish().await,
        ))
    }
}

/// Reads newline-terminated chunks until EOF or a read error.
async fn forward_chunks<R>(
    reader: R,
    flags: StreamFlags,
    label: &str,
    stream_name: &str,
    tx: mpsc::UnboundedSender<Vec<u8>>,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    loop {
        let mut chunk = Vec::new();
        match reader.read_until(b'\n', &mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            let line = String::from_utf8_lossy(&chunk);
            trace!(label = %label, stream = %stream_name, line = %line.trim_end(), "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            let _ = tx.send(chunk);
        }
    }
}
