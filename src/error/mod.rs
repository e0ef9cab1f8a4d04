//! Error handling for ssh-ping

use thiserror::Error;

/// Custom error types for ssh-ping
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (missing or invalid flags)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote-session process could not be started
    #[error("Session launch error: {0}")]
    Launch(String),

    /// Write or read failures on the session streams
    #[error("I/O error: {0}")]
    Io(String),

    /// Statistics calculation errors
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new session launch error
    pub fn launch<S: Into<String>>(message: S) -> Self {
        Self::Launch(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new statistics error
    pub fn statistics<S: Into<String>>(message: S) -> Self {
        Self::Statistics(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Launch(_) => "LAUNCH",
            Self::Io(_) => "IO",
            Self::Statistics(_) => "STATS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Message without the category prefix added by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::Launch(msg)
            | Self::Io(msg)
            | Self::Statistics(msg)
            | Self::Internal(msg) => msg.as_str(),
        }
    }

    /// Same error kind with a new message
    fn with_message(&self, message: String) -> Self {
        match self {
            Self::Config(_) => Self::Config(message),
            Self::Launch(_) => Self::Launch(message),
            Self::Io(_) => Self::Io(message),
            Self::Statistics(_) => Self::Statistics(message),
            Self::Internal(_) => Self::Internal(message),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Pass the target with --host <host>.", msg)
            }
            Self::Launch(msg) => {
                format!("Could not start the session: {}\n\nSuggestion: Check that ssh is installed and on your PATH.", msg)
            }
            Self::Io(msg) => {
                format!("Session stream failed: {}\n\nSuggestion: Verify you can run `ssh <host> -- cat` by hand and that authentication succeeds.", msg)
            }
            Self::Statistics(msg) => {
                format!("Statistics calculation failed: {}\n\nSuggestion: This may indicate insufficient or invalid samples.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 1,  // Invalid usage
            Self::Launch(_) => 2,
            Self::Io(_) => 5,
            Self::Statistics(_) => 6,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Launch(_) | Self::Io(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Statistics(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<std::time::TryFromFloatSecsError> for AppError {
    fn from(error: std::time::TryFromFloatSecsError) -> Self {
        Self::statistics(format!("Value is not a valid duration: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its kind
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error = e.into();
            let message = format!("{}: {}", f(), original_error.message());
            original_error.with_message(message)
        })
    }
}

/// Error reporter for user feedback on stderr
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }

    /// Render the text `report_error` writes
    pub fn format_error(&self, error: &AppError) -> String {
        let mut text = error.format_for_console(self.use_color);
        if self.verbose {
            text.push_str("\n\n");
            text.push_str(&error.user_friendly_message());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::config("Must set --host.");
        let display = error.to_string();
        assert!(display.contains("Configuration error"));
        assert!(display.contains("Must set --host."));
    }

    #[test]
    fn test_error_categories() {
        let errors = [
            AppError::config("config"),
            AppError::launch("launch"),
            AppError::io("io"),
            AppError::statistics("stats"),
            AppError::internal("internal"),
        ];

        let expected_categories = ["CONFIG", "LAUNCH", "IO", "STATS", "INTERNAL"];

        for (error, expected) in errors.iter().zip(expected_categories.iter()) {
            assert_eq!(error.category(), *expected);
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::config("test").exit_code(), 1);
        assert_eq!(AppError::launch("test").exit_code(), 2);
        assert_eq!(AppError::io("test").exit_code(), 5);
        assert_eq!(AppError::statistics("test").exit_code(), 6);
        assert_eq!(AppError::internal("test").exit_code(), 99);
    }

    #[test]
    fn test_fatal_errors_never_exit_zero() {
        for error in [
            AppError::launch("x"),
            AppError::io("x"),
            AppError::statistics("x"),
            AppError::internal("x"),
        ] {
            assert_ne!(error.exit_code(), 0);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "early eof");
        let app_error: AppError = io_error.into();
        assert_eq!(app_error.category(), "IO");
        assert!(app_error.message().contains("early eof"));
    }

    #[test]
    fn test_duration_error_conversion() {
        let err = std::time::Duration::try_from_secs_f64(-1.0).unwrap_err();
        let app_error: AppError = err.into();
        assert_eq!(app_error.category(), "STATS");
    }

    #[test]
    fn test_context_keeps_error_kind() {
        let result: Result<()> = Err(AppError::io("broken pipe"));
        let error = result.with_context(|| "While sending ping".to_string()).unwrap_err();

        assert_eq!(error.category(), "IO");
        assert_eq!(error.message(), "While sending ping: broken pipe");
    }

    #[test]
    fn test_context_on_std_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));

        let error = result
            .with_context(|| "Failed to start `ssh`".to_string())
            .unwrap_err();
        assert_eq!(error.category(), "IO");
        assert!(error.to_string().contains("Failed to start `ssh`"));
    }

    #[test]
    fn test_user_friendly_messages() {
        let message = AppError::launch("No such file").user_friendly_message();
        assert!(message.contains("Could not start the session"));
        assert!(message.contains("Suggestion:"));
    }

    #[test]
    fn test_console_formatting() {
        let error = AppError::statistics("no samples collected");
        let formatted_no_color = error.format_for_console(false);
        let formatted_color = error.format_for_console(true);

        assert_eq!(formatted_no_color, "[STATS] Statistics error: no samples collected");
        assert!(formatted_color.contains("STATS"));
        assert!(formatted_color.contains("no samples collected"));
    }

    #[test]
    fn test_error_reporter_verbose_adds_suggestion() {
        let error = AppError::io("early eof");

        let terse = ErrorReporter::new(false, false).format_error(&error);
        assert_eq!(terse, "[IO] I/O error: early eof");

        let verbose = ErrorReporter::new(false, true).format_error(&error);
        assert!(verbose.starts_with("[IO] I/O error: early eof"));
        assert!(verbose.contains("Suggestion:"));
    }
}
