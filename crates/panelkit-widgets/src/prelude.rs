//! Prelude module for PanelKit widgets
//!
//! Re-exports the types needed to assemble a panel with a single
//! `use panelkit_widgets::prelude::*;`

pub use panelkit_core::prelude::*;

pub use crate::builder::{button, label, panel, rich_text, text_field, WidgetBuilder};
pub use crate::grid::GridLayoutStrategy;
pub use crate::layout::{Border, LayoutStrategy, MountPoint, PanelRef, PlacementHint};
pub use crate::stack::VerticalStackStrategy;
pub use crate::widget::Widget;
