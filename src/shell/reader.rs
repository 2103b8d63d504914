//! Line Reader
//!
//! Feeds lines from a blocking reader to async code over a channel.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

/// Lines buffered between the reader thread and the consumer
const LINE_BUFFER: usize = 64;

/// Reads `reader` line by line on a dedicated OS thread and forwards each
/// line (or the read error that stopped it) to the returned receiver.
///
/// The channel closes on EOF, after the first read error, or once the
/// receiver is dropped. The thread is detached: a blocked read never keeps
/// the process alive after `main` returns.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<std::io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
        debug!("line reader finished");
    });

    rx
}
