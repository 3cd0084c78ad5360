//! Fluent widget builder
//!
//! One generic [`WidgetBuilder`] serves every widget kind. Setters shared by
//! all kinds live on `WidgetBuilder<K>`; kind-specific setters such as
//! [`WidgetBuilder::on_click`] only exist for their kind, so
//! `label().on_click(..)` does not compile.
//!
//! ```
//! use panelkit_widgets::builder::{button, label};
//!
//! let title = label().text("Session").bold().finalize();
//! let clear = button().text("Clear").on_click(|| {}).finalize();
//! assert_eq!(title.text(), "Session");
//! assert!(clear.activate());
//! ```
//!
//! ```compile_fail
//! use panelkit_widgets::builder::label;
//!
//! let _ = label().on_click(|| {}).finalize();
//! ```
//!
//! ```compile_fail
//! use panelkit_widgets::builder::button;
//!
//! let _ = button().html("<b>Clear</b>").finalize();
//! ```
//!
//! ```compile_fail
//! use panelkit_core::types::Color;
//! use panelkit_widgets::builder::text_field;
//!
//! let _ = text_field().background(Color::BLACK).finalize();
//! ```

use crate::spec::{
    Action, ButtonKind, CommonSpec, LabelKind, PanelKind, RichTextKind, TextFieldKind, WidgetKind,
    WidgetSpec,
};
use crate::widget::Widget;
use panelkit_core::{
    config::PanelConfig,
    theme::FontRole,
    types::{Alignment, Color, EdgeInsets, Size},
};
use std::sync::Arc;

/// Widget builder for fluent API
#[derive(Debug, Clone, Default)]
pub struct WidgetBuilder<K: WidgetKind> {
    common: CommonSpec,
    kind: K,
}

impl<K: WidgetKind> WidgetBuilder<K> {
    /// Create a builder with every field at its default
    pub fn new() -> Self {
        Self {
            common: CommonSpec::default(),
            kind: K::default(),
        }
    }

    /// Set display text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.common.text = text.into();
        self
    }

    /// Select a font role, replacing any earlier selection
    pub fn font(mut self, role: FontRole) -> Self {
        self.common.font = role;
        self
    }

    pub fn normal(self) -> Self {
        self.font(FontRole::Normal)
    }

    pub fn bold(self) -> Self {
        self.font(FontRole::Bold)
    }

    pub fn small(self) -> Self {
        self.font(FontRole::Small)
    }

    /// Set foreground color
    pub fn color(mut self, color: Color) -> Self {
        self.common.color = color;
        self
    }

    /// Set content alignment
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.common.alignment = alignment;
        self
    }

    /// Fix the preferred and maximum size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.common.size = Some(Size::new(width, height));
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.common.enabled = enabled;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.common.tooltip = Some(tooltip.into());
        self
    }

    /// Freeze the accumulated configuration
    pub fn into_spec(self) -> WidgetSpec {
        WidgetSpec::new(self.common, self.kind.into_kind_spec())
    }

    /// Build the widget
    pub fn finalize(self) -> Widget {
        tracing::trace!(target: "panelkit::widgets", kind = K::TAG.as_str(), "finalizing builder");
        self.into_spec().instantiate()
    }
}

impl WidgetBuilder<LabelKind> {
    pub fn label() -> Self {
        Self::new()
    }
}

impl WidgetBuilder<ButtonKind> {
    pub fn button() -> Self {
        Self::new()
    }

    /// Set click handler, replacing any earlier one
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let action: Action = Arc::new(handler);
        self.kind.on_click = Some(action);
        self
    }
}

impl WidgetBuilder<TextFieldKind> {
    pub fn text_field() -> Self {
        Self::new()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.kind.placeholder = placeholder.into();
        self
    }

    /// Preferred width in character columns
    pub fn columns(mut self, columns: usize) -> Self {
        self.kind.columns = columns;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.kind.editable = editable;
        self
    }
}

impl WidgetBuilder<PanelKind> {
    pub fn panel() -> Self {
        Self::new()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.kind.background = Some(color);
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.kind.padding = padding;
        self
    }
}

impl WidgetBuilder<RichTextKind> {
    pub fn rich_text() -> Self {
        Self::new()
    }

    /// Rich text builder sized from the host configuration
    pub fn rich_text_with_config(config: &PanelConfig) -> Self {
        Self::new().visible_lines(config.rich_text.visible_lines)
    }

    /// Set the HTML body of the block
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.kind.html = html.into();
        self
    }

    /// Number of lines shown before scrolling
    pub fn visible_lines(mut self, lines: usize) -> Self {
        self.kind.visible_lines = Some(lines);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.kind.wrap = wrap;
        self
    }
}

/// Create a label builder
pub fn label() -> WidgetBuilder<LabelKind> {
    WidgetBuilder::label()
}

/// Create a button builder
pub fn button() -> WidgetBuilder<ButtonKind> {
    WidgetBuilder::button()
}

/// Create a text field builder
pub fn text_field() -> WidgetBuilder<TextFieldKind> {
    WidgetBuilder::text_field()
}

/// Create a panel builder
pub fn panel() -> WidgetBuilder<PanelKind> {
    WidgetBuilder::panel()
}

/// Create a rich text builder
pub fn rich_text() -> WidgetBuilder<RichTextKind> {
    WidgetBuilder::rich_text()
}
