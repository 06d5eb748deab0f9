use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::{self, File},
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the stdout layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

const DEFAULT_DIRECTIVE: &str = "info,pickup_ui=debug,pickup_core=debug";

// --- Formatter ---

/// `<local time> <LEVEL> <target>: <fields>`, colored when the writer allows.
struct BookingLogFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        _ => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for BookingLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {}{:>5}\x1b[0m \x1b[36m{}\x1b[0m: ",
                level_color(*meta.level()),
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(
                writer,
                "{timestamp} {:>5} {}: ",
                meta.level(),
                meta.target()
            )?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

/// Writer target that discards output until a file is attached.
#[derive(Clone)]
struct FileSlot(Arc<Mutex<Option<File>>>);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Runtime control ---

type SetLevelFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;
type SetStdoutFn = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

/// Adjusts the installed subscriber after startup.
pub struct LogControl {
    set_level: SetLevelFn,
    set_stdout: SetStdoutFn,
    file: Arc<Mutex<Option<File>>>,
}

impl LogControl {
    /// Replaces the global filter. Accepts a bare level ("warn") or any
    /// `EnvFilter` directive.
    pub fn set_level(
        &self,
        directive: &str,
    ) -> Result<()> {
        (self.set_level)(directive)
    }

    /// Shows or hides stdout output; file output is unaffected.
    pub fn set_stdout_enabled(
        &self,
        enabled: bool,
    ) -> Result<()> {
        (self.set_stdout)(enabled)
    }

    /// Appends log output to `path`, replacing any file already attached.
    pub fn enable_file_logging(
        &self,
        path: &Path,
    ) -> Result<()> {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file '{}'", path.display()))?;

        *self.file.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
        Ok(())
    }

    /// Applies the `[log]` section of the configuration. Each setting is
    /// applied on its own; one that fails does not stop the others, and all
    /// failures are reported together.
    pub fn apply_config(
        &self,
        config: &LogConfig,
    ) -> Result<()> {
        let mut failures = Vec::new();

        if let Some(level) = &config.level {
            failures.extend(self.set_level(level).err());
        }
        failures.extend(self.set_stdout_enabled(config.stdout).err());
        if let Some(directory) = &config.directory {
            failures.extend(self.enable_log_directory(directory).err());
        }

        if failures.is_empty() {
            return Ok(());
        }
        let message = failures
            .iter()
            .map(|e| format!("{e:#}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(anyhow::anyhow!(message))
    }

    fn enable_log_directory(
        &self,
        directory: &Path,
    ) -> Result<()> {
        fs::create_dir_all(directory).with_context(|| {
            format!("cannot create log directory '{}'", directory.display())
        })?;
        let path = log_file_path(directory);
        self.enable_file_logging(&path)?;
        info!(path = %path.display(), "file logging enabled");
        Ok(())
    }
}

fn level_setter<S>(handle: reload::Handle<EnvFilter, S>) -> SetLevelFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |directive: &str| {
        let filter = EnvFilter::try_new(directive)
            .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    })
}

fn stdout_setter<S>(handle: reload::Handle<EnvFilter, S>) -> SetStdoutFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |enabled: bool| {
        // The global filter still caps what "trace" lets through.
        let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("stdout reload failed: {e}"))
    })
}

// --- Public API ---

static APP_NAME: OnceLock<String> = OnceLock::new();

/// Executable stem, or "pickup-booking" when it cannot be determined.
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "pickup-booking".to_string())
    })
}

/// Log file used inside a configured log directory.
pub fn log_file_path(directory: &Path) -> PathBuf {
    directory.join(format!("{}.log", app_name()))
}

/// Installs the global subscriber. Call once at startup.
///
/// - Level: `RUST_LOG` when set, otherwise info with debug for this app.
/// - Stdout: colored on a terminal, plain when piped.
/// - File: discarded until [`LogControl::enable_file_logging`].
///
/// Returns `None` if another subscriber was already installed.
pub fn init_logging() -> Option<LogControl> {
    let _ = app_name();

    let file: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let (level_filter, level_handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    );

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(BookingLogFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(BookingLogFormat)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(LogControl {
        set_level: level_setter(level_handle),
        set_stdout: stdout_setter(stdout_handle),
        file,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn errors_are_red_and_trace_is_magenta() {
        assert_eq!(level_color(Level::ERROR), "\x1b[1;31m");
        assert_eq!(level_color(Level::TRACE), "\x1b[1;35m");
    }

    #[test]
    fn log_file_lives_in_the_directory() {
        let path = log_file_path(Path::new("logs"));

        assert_eq!(path.parent(), Some(Path::new("logs")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
    }

    #[test]
    fn empty_slot_swallows_writes() {
        let slot = FileSlot(Arc::new(Mutex::new(None)));
        let mut writer = slot.make_writer();

        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        assert!(writer.flush().is_ok());
    }

    #[test]
    fn default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }

    /// A `LogControl` that validates directives and records stdout toggles
    /// without touching the global subscriber.
    fn recording_control() -> (LogControl, Arc<Mutex<Vec<bool>>>) {
        let stdout_calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = stdout_calls.clone();
        let control = LogControl {
            set_level: Box::new(|directive: &str| {
                EnvFilter::try_new(directive)
                    .map(|_| ())
                    .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
            }),
            set_stdout: Box::new(move |enabled: bool| {
                recorded.lock().unwrap().push(enabled);
                Ok(())
            }),
            file: Arc::new(Mutex::new(None)),
        };
        (control, stdout_calls)
    }

    #[test]
    fn invalid_level_still_applies_stdout_setting() {
        let (control, stdout_calls) = recording_control();
        let config = LogConfig {
            level: Some("info,=[".to_string()),
            directory: None,
            stdout: false,
        };

        let error = control.apply_config(&config).unwrap_err();

        assert!(error.to_string().contains("invalid log level"));
        assert_eq!(*stdout_calls.lock().unwrap(), vec![false]);
    }

    #[test]
    fn valid_config_applies_cleanly() {
        let (control, stdout_calls) = recording_control();
        let config = LogConfig {
            level: Some("warn".to_string()),
            ..LogConfig::default()
        };

        assert!(control.apply_config(&config).is_ok());
        assert_eq!(*stdout_calls.lock().unwrap(), vec![true]);
        assert!(control.file.lock().unwrap().is_none());
    }
}
