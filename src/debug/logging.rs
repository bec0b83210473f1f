//! Console output for layout tracing.

use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const TRACING_PREFIX: &str = "[boxwright]";
const DEFAULT_DIRECTIVE: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Builds the filter used by [`install`]: `RUST_LOG` when it parses, `info`
/// otherwise.
#[must_use]
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a stderr subscriber filtered by `RUST_LOG` (idempotent).
///
/// Does nothing if the process already has a global subscriber.
pub fn install() {
    install_with(default_filter());
}

/// Install a stderr subscriber with an explicit filter (idempotent).
///
/// Only the first call across [`install`] and `install_with` takes effect.
pub fn install_with(filter: EnvFilter) {
    TRACING_INSTALLED.call_once(|| {
        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_target(true)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("{TRACING_PREFIX} a global subscriber is already installed");
        }
    });
}

#[derive(Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.inner.write_all(b" ")?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
