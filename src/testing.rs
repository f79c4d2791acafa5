// Test support.
// Captures formatted log output on the current thread.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;

/// In-memory sink for the fmt subscriber.
#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Log records collected while this value is alive.
pub(crate) struct CapturedLogs {
    buffer: Buffer,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.0.lock().unwrap()).to_string()
    }
}

/// Route this thread's events into a buffer. `#[tokio::test]` runs on the
/// test thread, so async code under test is captured too.
pub(crate) fn capture_logs() -> CapturedLogs {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    CapturedLogs {
        buffer,
        _guard: tracing::subscriber::set_default(subscriber),
    }
}
