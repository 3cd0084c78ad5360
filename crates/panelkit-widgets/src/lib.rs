//! PanelKit Widgets - fluent widget builders and layout strategies
//!
//! Builders accumulate a [`WidgetSpec`] and finalize it into a [`Widget`].
//! Widgets are then handed to a [`LayoutStrategy`], which assembles them into
//! a shared [`Panel`] ready to be mounted into the host UI.

pub mod builder;
pub mod grid;
pub mod layout;
pub mod spec;
pub mod stack;
pub mod widget;

pub mod prelude;

pub use builder::{button, label, panel, rich_text, text_field, WidgetBuilder};
pub use grid::{GridLayoutBuilder, GridLayoutStrategy};
pub use layout::{
    Border, Cell, GapFidelity, LayoutKind, LayoutStrategy, MountPoint, Panel, PanelRef,
    PlacementHint, Slot,
};
pub use spec::{
    Action, ButtonKind, KindSpec, LabelKind, PanelKind, RichTextKind, TextFieldKind, WidgetKind,
    WidgetKindTag, WidgetSpec,
};
pub use stack::VerticalStackStrategy;
pub use widget::{Widget, WidgetId};

/// Initialize the widgets module
pub fn init() -> panelkit_core::Result<()> {
    tracing::info!(target: "panelkit::widgets", "PanelKit Widgets initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_creation() {
        let widget = label().text("Test").finalize();
        assert_eq!(widget.text(), "Test");
        assert_eq!(widget.kind(), WidgetKindTag::Label);
    }
}
