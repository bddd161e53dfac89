//! Pipeline progress logging.
//!
//! Every stage reports through the small `log_*` helpers below. Entries are
//! forwarded to `tracing`, so whatever subscriber the binary (or a test)
//! installs decides where they end up.

/// Log level of a pipeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Nesting depth for sub-steps
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Message with its indentation and level marker applied.
    pub fn render(&self) -> String {
        let marker = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠ ",
            LogLevel::Error => "✗ ",
        };
        format!("{}{}{}", "  ".repeat(self.indent as usize), marker, self.message)
    }

    /// Forward this entry to the active `tracing` subscriber.
    pub fn emit(&self) {
        let line = self.render();
        match self.level {
            LogLevel::Info => tracing::info!("{}", line),
            LogLevel::Success => tracing::info!(status = "success", "{}", line),
            LogLevel::Warning => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::info(msg).with_indent(indent).emit();
}

/// Install a compact stderr subscriber at INFO.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .try_init();
}


#[cfg(test)]
mod tests {
    use super::capture::logs_of;
    use super::*;

    #[test]
    fn test_render_markers() {
        assert_eq!(LogEntry::info("Reading").render(), "Reading");
        assert_eq!(LogEntry::success("Done").render(), "✓ Done");
        assert_eq!(LogEntry::warning("Row 2 skipped").render(), "⚠ Row 2 skipped");
        assert_eq!(LogEntry::error("Row 2").with_indent(1).render(), "  ✗ Row 2");
    }

    #[test]
    fn test_levels_reach_subscriber() {
        let ((), output) = logs_of(|| {
            log_info("reading input");
            log_warning("row 4 skipped");
            log_error("row 5 rejected");
        });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("INFO") && lines[0].contains("reading input"));
        assert!(lines[1].contains("WARN") && lines[1].contains("row 4 skipped"));
        assert!(lines[2].contains("ERROR") && lines[2].contains("row 5 rejected"));
    }
}
