//! Logging setup for PanelKit
//!
//! All crates log through `tracing` with a category target such as
//! `panelkit::layout`. [`init`] installs a `tracing-subscriber` registry whose
//! filter comes from `RUST_LOG` when set, otherwise from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log levels supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log categories, used as tracing targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Core,
    Widgets,
    Layout,
}

impl LogCategory {
    pub const ALL: [LogCategory; 3] = [LogCategory::Core, LogCategory::Widgets, LogCategory::Layout];

    /// Tracing target for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Core => "panelkit::core",
            LogCategory::Widgets => "panelkit::widgets",
            LogCategory::Layout => "panelkit::layout",
        }
    }

    /// Key used in [`LoggingConfig::category_levels`]
    pub fn config_key(&self) -> &'static str {
        match self {
            LogCategory::Core => "core",
            LogCategory::Widgets => "widgets",
            LogCategory::Layout => "layout",
        }
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the filter directive string for a logging configuration.
///
/// Unknown level names fall back to the default level.
pub fn filter_directives(config: &LoggingConfig) -> String {
    let default = LogLevel::parse(&config.default_level).unwrap_or(LogLevel::Info);
    let mut directives = vec![default.as_str().to_string()];

    for category in LogCategory::ALL {
        if let Some(level) = config
            .category_levels
            .get(category.config_key())
            .and_then(|l| LogLevel::parse(l))
        {
            directives.push(format!("{}={}", category.as_str(), level));
        }
    }

    directives.join(",")
}

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the logging system. Calling it again is a no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(config)))
        .map_err(|e| PanelError::initialization(format!("invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| PanelError::initialization(format!("failed to set subscriber: {}", e)))?;

    let _ = INITIALIZED.set(());
    tracing::debug!(target: "panelkit::core", "logging initialized");
    Ok(())
}

/// Whether [`init`] has completed
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
