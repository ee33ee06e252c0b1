use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Buffers one formatted event and forwards its lines to the diagnostics
/// panel when the writer is dropped.
struct UiLogWriter {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl Write for UiLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for UiLogWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines() {
            let _ = self.tx.send(line.to_string());
        }
    }
}

#[derive(Clone)]
struct UiMakeWriter {
    tx: Sender<String>,
}

impl<'a> MakeWriter<'a> for UiMakeWriter {
    type Writer = UiLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        UiLogWriter {
            buf: Vec::with_capacity(256),
            tx: self.tx.clone(),
        }
    }
}

/// Installs the global subscriber: stderr plus a copy of every line for the
/// in-app diagnostics view. Returns `None` if a subscriber is already set.
pub fn init(default_filter: &str) -> Option<Receiver<String>> {
    let (log_tx, log_rx) = mpsc::channel::<String>();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(UiMakeWriter { tx: log_tx })
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    Some(log_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_writer_forwards_each_line_on_drop() {
        let (tx, rx) = mpsc::channel();
        let make = UiMakeWriter { tx };
        {
            let mut writer = make.make_writer();
            writer
                .write_all(b"first line\nsecond line\n")
                .expect("buffered write should succeed");
        }

        let lines: Vec<String> = rx.try_iter().collect();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn empty_writer_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        drop(UiMakeWriter { tx }.make_writer());
        assert!(rx.try_recv().is_err());
    }
}
