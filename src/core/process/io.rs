// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!   mpsc channels buffer lines
//!   wait
//!   --> ProcessOutput { stdout, stderr, exit_code }
//! ```

use crate::error::Result;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Spawns a reader task for a child stream if its flags need one.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
    tx: mpsc::UnboundedSender<String>,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move {
            read_stream(stream, flags, &name, stream_name, tx).await;
        })
    })
}

/// Collects output from a channel into a string.
fn collect_output(rx: &mut mpsc::UnboundedReceiver<String>, flags: StreamFlags) -> String {
    if !flags.contains(StreamFlags::KEEP_IN_STRING) {
        return String::new();
    }
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&line);
    }
    output
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::unbounded_channel::<String>();
        let (stderr_tx, mut stderr_rx) = mpsc::unbounded_channel::<String>();

        let stdout_handle = spawn_reader(
            child.stdout.take(),
            self.stdout_flags(),
            name,
            "stdout",
            stdout_tx,
        );
        let stderr_handle = spawn_reader(
            child.stderr.take(),
            self.stderr_flags(),
            name,
            "stderr",
            stderr_tx,
        );

        let exit_status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name} to exit"))?;

        if let Some(handle) = stdout_handle {
            let _ = handle.await;
        }
        if let Some(handle) = stderr_handle {
            let _ = handle.await;
        }

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_flags()),
            collect_output(&mut stderr_rx, self.stderr_flags()),
        ))
    }
}

/// Reads from a stream line by line, logging and/or buffering each line.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
    tx: mpsc::UnboundedSender<String>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            let _ = tx.send(line);
        }
    }
}
