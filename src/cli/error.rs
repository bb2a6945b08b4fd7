// Error handling utilities for consistent error messages and exit codes

use crate::config::ConfigError;
use crate::source::SourceError;
use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, bad configuration, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for failures to load or write data.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// How a failed run should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    User,
    Internal,
}

impl ErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::User => 1,
            ErrorKind::Internal => 2,
        }
    }
}

/// Classify an error by the first typed error found in its chain.
/// Data source and I/O failures are internal; everything else is the user's.
pub fn classify(err: &anyhow::Error) -> ErrorKind {
    for cause in err.chain() {
        if cause.downcast_ref::<SourceError>().is_some() {
            return ErrorKind::Internal;
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return ErrorKind::User;
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorKind::Internal;
        }
    }
    ErrorKind::User
}

/// Report an error on stderr (with its cause chain for internal errors) and exit
pub fn exit_with(err: &anyhow::Error) -> ! {
    match classify(err) {
        ErrorKind::User => {
            let mut message = err.to_string();
            if let Some(cause) = err.source() {
                message.push_str(&format!(": {}", cause));
            }
            user_error(&message)
        }
        ErrorKind::Internal => internal_error(&format_with_causes(err)),
    }
}

/// Error message followed by an indented "Caused by:" chain, if any
pub fn format_with_causes(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    if source.is_some() {
        message.push_str("\n\nCaused by:");
        let mut indent = 1;
        while let Some(cause) = source {
            message.push_str(&format!("\n{:indent$}  {}", "", cause, indent = indent));
            source = cause.source();
            indent += 1;
        }
    }
    message
}
