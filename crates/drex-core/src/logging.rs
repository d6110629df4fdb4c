//! Logging setup: append to a file under the XDG state directory, with a
//! stderr-only fallback for environments where that directory is unusable.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,drex=debug,drex_core=debug";

/// Writer handed out per event. Each event clones the log file handle; if
/// the clone fails the event goes to stderr instead of being dropped.
enum EventWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventWriter::File(f) => f.write(buf),
            EventWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventWriter::File(f) => f.flush(),
            EventWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to `~/.local/state/drex/drex.log`.
/// Returns Err when the state directory cannot be used; the caller should
/// then fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("drex")?;
    let log_path = xdg_dirs.place_state_file("drex.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    struct SharedFile(fs::File);

    impl<'a> MakeWriter<'a> for SharedFile {
        type Writer = EventWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(EventWriter::File)
                .unwrap_or(EventWriter::Stderr)
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(SharedFile(file)))
        .with_ansi(false)
        .init();

    tracing::info!("drex logging initialized at {}", log_path.display());

    Ok(())
}

/// Log to stderr only. Used when the state file cannot be opened so the
/// CLI still reports what it is doing.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
