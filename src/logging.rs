use once_cell::sync::Lazy;
use std::sync::RwLock;
use tracing_subscriber::EnvFilter;

/// Name prefixed to every line sent to the host debug sink.
pub const PLUGIN_NAME: &str = "flight_notify";

/// Initialise logging. The level can be overridden via the `RUST_LOG`
/// environment variable only when `debug` is set; otherwise `info` is forced
/// so a stray environment variable cannot flood the host log.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Error => "[ERROR]",
            LogLevel::Fatal => "[FATAL]",
        }
    }
}

/// Destination for formatted log lines, typically the host's debug-string
/// facility.
pub trait DebugSink: Send + Sync {
    fn write_line(&self, line: &str);
}

static DEBUG_SINK: Lazy<RwLock<Option<Box<dyn DebugSink>>>> = Lazy::new(|| RwLock::new(None));

pub fn install_sink(sink: Box<dyn DebugSink>) {
    if let Ok(mut slot) = DEBUG_SINK.write() {
        *slot = Some(sink);
    }
}

pub fn clear_sink() {
    if let Ok(mut slot) = DEBUG_SINK.write() {
        *slot = None;
    }
}

/// Render one log line as `H:MM:SS.mmm PLUGIN [LEVEL] message` from elapsed
/// simulator time, with a guaranteed trailing newline.
pub fn format_log_line(level: LogLevel, network_secs: f32, message: &str) -> String {
    let hours = (network_secs / 3600.0) as u32;
    let mut secs = network_secs - hours as f32 * 3600.0;
    let mins = (secs / 60.0) as u32;
    secs -= mins as f32 * 60.0;

    let mut line = format!(
        "{hours}:{mins:02}:{secs:06.3} {PLUGIN_NAME} {} {message}",
        level.tag()
    );
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Format `message` and forward it to the installed host sink, mirroring it
/// to the tracing subscriber.
pub fn log_to_host(level: LogLevel, network_secs: f32, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!("{message}"),
        LogLevel::Info => tracing::info!("{message}"),
        LogLevel::Warn => tracing::warn!("{message}"),
        LogLevel::Error | LogLevel::Fatal => tracing::error!("{message}"),
    }
    let Ok(slot) = DEBUG_SINK.read() else {
        return;
    };
    if let Some(sink) = slot.as_ref() {
        sink.write_line(&format_log_line(level, network_secs, message));
    }
}
