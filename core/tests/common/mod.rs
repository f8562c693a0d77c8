#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber filtered by the `TEST_LOG` environment variable. Logs nothing when
/// `TEST_LOG` is not set. Safe to call from every test.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("TEST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_test_writer()
    .try_init();
}

/// Runs `f` with a thread-local subscriber that records all `optkit_core` events, returning the result of `f`
/// and the formatted log output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
  let logs = CapturedLogs::default();
  let writer = logs.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::new("optkit_core=trace"))
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .without_time()
    .finish();
  let result = tracing::subscriber::with_default(subscriber, f);
  (result, logs.contents())
}

#[derive(Default, Clone)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
  fn contents(&self) -> String {
    let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
    String::from_utf8_lossy(&bytes).into_owned()
  }
}

impl io::Write for CapturedLogs {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
