//! Core functionality for PanelKit
//!
//! This crate provides the ambient building blocks shared by the widget
//! crate: value types, typography, observable state, configuration and
//! logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod theme;
pub mod types;

pub use config::{ConfigManager, GridDefaults, LoggingConfig, PanelConfig, RichTextDefaults};
pub use error::{PanelError, Result};
pub use logging::{LogCategory, LogLevel};
pub use state::Signal;
pub use theme::{FontRole, FontSpec, FontWeight, Typography};
pub use types::{Alignment, Color, EdgeInsets, Size};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::PanelConfig,
        error::{PanelError, Result},
        state::Signal,
        theme::{FontRole, Typography},
        types::{Alignment, Color, EdgeInsets, Size},
    };
}

/// Framework version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core: logging from the given configuration
pub fn init(config: &PanelConfig) -> Result<()> {
    logging::init(&config.logging)?;
    tracing::info!(target: "panelkit::core", "PanelKit Core v{} initialized", VERSION);
    Ok(())
}
