//! Log output for the `activity-report` binary.
//!
//! Events pass one reloadable level filter and then fan out to stdout and to
//! an optional log file. `--quiet` mutes stdout only.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, IsTerminal, LineWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, reload};

const DEFAULT_DIRECTIVE: &str = "info";

static STDOUT_ENABLED: AtomicBool = AtomicBool::new(true);
static CONTROL: OnceLock<LogControl> = OnceLock::new();

/// Handles kept after the subscriber is installed.
struct LogControl {
    level: reload::Handle<EnvFilter, Registry>,
    file: LogFile,
}

fn control() -> Result<&'static LogControl> {
    CONTROL
        .get()
        .ok_or_else(|| anyhow!("logging is not initialized"))
}

// ─── line format ─────────────────────────────────────────────────────────────

/// `2025-01-31 09:15:02.481  INFO report_export::sink: message fields`
struct ReportLine;

fn paint(
    writer: &mut Writer<'_>,
    style: &str,
    text: impl Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{style}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

fn level_style(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

impl<S, N> FormatEvent<S, N> for ReportLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        paint(&mut writer, "2", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
        write!(writer, " ")?;
        paint(
            &mut writer,
            level_style(meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;
        write!(writer, " ")?;
        paint(&mut writer, "36", meta.target())?;
        write!(writer, ": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── log file ────────────────────────────────────────────────────────────────

/// Shared, initially empty log file. Lines written while empty are dropped.
#[derive(Clone, Default)]
struct LogFile(Arc<Mutex<Option<LineWriter<File>>>>);

impl LogFile {
    fn lock(&self) -> MutexGuard<'_, Option<LineWriter<File>>> {
        // a panic mid-write leaves the file usable
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(
        &self,
        file: File,
    ) {
        *self.lock() = Some(LineWriter::new(file));
    }
}

struct LogFileGuard<'a>(MutexGuard<'a, Option<LineWriter<File>>>);

impl Write for LogFileGuard<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileGuard(self.lock())
    }
}

// ─── public API ──────────────────────────────────────────────────────────────

/// Whether `RUST_LOG` is set, in which case it wins over configured levels.
pub fn env_filter_overridden() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

/// Replaces the level filter with `directive`, either a bare level such as
/// `debug` or any `EnvFilter` directive such as `report_export=trace`.
///
/// # Errors
/// Fails on an unparsable directive or before [`init_default_logging`].
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{directive}'"))?;
    control()?
        .level
        .reload(filter)
        .context("cannot apply log level")
}

/// Mutes or unmutes stdout. The log file is unaffected.
pub fn set_stdout_enabled(enabled: bool) {
    STDOUT_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Appends log lines to `path` from now on, closing any previous log file.
///
/// # Errors
/// Fails when the file cannot be opened or before [`init_default_logging`].
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    control()?.file.replace(file);
    Ok(())
}

/// Installs the global subscriber at `info`, or at `RUST_LOG` when set.
///
/// Stdout is colored only on a terminal. Calling this twice is harmless;
/// the second call changes nothing.
pub fn init_default_logging() {
    let initial = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let (level_layer, level) = reload::Layer::new(initial);
    let file = LogFile::default();

    let stdout = tracing_subscriber::fmt::layer()
        .event_format(ReportLine)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(filter_fn(|_| STDOUT_ENABLED.load(Ordering::Relaxed)));

    let to_file = tracing_subscriber::fmt::layer()
        .event_format(ReportLine)
        .with_ansi(false)
        .with_writer(file.clone());

    let installed = tracing_subscriber::registry()
        .with(level_layer)
        .with(stdout)
        .with(to_file)
        .try_init();

    if installed.is_ok() {
        let _ = CONTROL.set(LogControl { level, file });
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::process;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_log_file_swallows_lines() {
        let file = LogFile::default();

        let written = file.make_writer().write(b"dropped\n").unwrap();

        assert_eq!(written, 8);
    }

    #[test]
    fn log_file_receives_lines_once_set() {
        let path = std::env::temp_dir().join(format!("report-cli-log-{}.log", process::id()));
        let _ = fs::remove_file(&path);
        let file = LogFile::default();
        file.replace(File::create(&path).unwrap());

        file.make_writer().write_all(b"first line\n").unwrap();
        file.make_writer().write_all(b"second line\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first line\nsecond line\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn level_styles_differ_per_level() {
        assert_eq!(level_style(&Level::ERROR), "1;31");
        assert_eq!(level_style(&Level::INFO), "1;32");
    }
}
