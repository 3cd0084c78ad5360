//! PanelKit - fluent widget builders and layout strategies for plugin sidebars
//!
//! Plugins describe each widget with a chained builder, hand the finished
//! widgets to a layout strategy and mount the resulting panel into the host.
//!
//! ```rust
//! use panelkit::prelude::*;
//!
//! let mut grid = GridLayoutStrategy::new(0, 2);
//! grid.add(label().text("Kills").bold().finalize());
//! grid.add(label().text("0").finalize());
//! let panel = grid.build();
//! assert_eq!(panel.read().effective_rows(), 1);
//! ```

pub use panelkit_core;
pub use panelkit_widgets;

use panelkit_core::{PanelConfig, Result};

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use panelkit_core::prelude::*;
    pub use panelkit_widgets::prelude::*;
}

/// Initialize logging with the default configuration
pub fn init() -> Result<()> {
    init_with_config(&PanelConfig::default())
}

/// Initialize logging from a host-supplied configuration
pub fn init_with_config(config: &PanelConfig) -> Result<()> {
    panelkit_core::init(config)?;
    panelkit_widgets::init()?;
    tracing::debug!(target: "panelkit::core", "PanelKit ready");
    Ok(())
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init() {
        // A subscriber installed elsewhere in this binary makes init fail
        if init().is_ok() {
            assert!(panelkit_core::logging::is_initialized());
        }
    }
}
