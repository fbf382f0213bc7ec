use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `tracing` subscriber. Safe to call more than once.
pub(crate) fn init(level: &str) {
    let env_filter =
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(make_writer);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn make_writer() -> ConsoleWriter {
    ConsoleWriter::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn make_writer() -> std::io::Stderr {
    std::io::stderr()
}

/// Buffers one formatted event and hands it to `console.log` when dropped.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
            self.buf.clear();
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}
