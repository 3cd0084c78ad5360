//! Immutable widget configuration
//!
//! A [`WidgetSpec`] holds the fields every widget shares plus a [`KindSpec`]
//! carrying the fields that only make sense for one kind of widget. Builders
//! accumulate a spec; once frozen it can be instantiated any number of times.

use crate::widget::Widget;
use panelkit_core::{
    theme::FontRole,
    types::{Alignment, Color, EdgeInsets, Size},
};
use std::sync::Arc;

/// Zero-argument callback run when a button is activated
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Which kind of widget a spec describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKindTag {
    Label,
    Button,
    TextField,
    Panel,
    RichText,
}

impl WidgetKindTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKindTag::Label => "label",
            WidgetKindTag::Button => "button",
            WidgetKindTag::TextField => "text_field",
            WidgetKindTag::Panel => "panel",
            WidgetKindTag::RichText => "rich_text",
        }
    }
}

/// Label-only fields (none)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelKind;

/// Button-only fields
#[derive(Clone, Default)]
pub struct ButtonKind {
    pub(crate) on_click: Option<Action>,
}

impl ButtonKind {
    pub fn has_action(&self) -> bool {
        self.on_click.is_some()
    }
}

impl std::fmt::Debug for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonKind")
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn() + Send + Sync"))
            .finish()
    }
}

/// Text-field-only fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldKind {
    pub placeholder: String,
    /// Preferred width in character columns, 0 sizes to content
    pub columns: usize,
    pub editable: bool,
}

impl Default for TextFieldKind {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            columns: 0,
            editable: true,
        }
    }
}

/// Panel-only fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelKind {
    pub background: Option<Color>,
    pub padding: EdgeInsets,
}

/// Rich-text-only fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichTextKind {
    /// Markup shown by the block, empty falls back to the widget text
    pub html: String,
    /// Number of lines shown before scrolling, `None` sizes to content
    pub visible_lines: Option<usize>,
    pub wrap: bool,
}

impl Default for RichTextKind {
    fn default() -> Self {
        Self {
            html: String::new(),
            visible_lines: None,
            wrap: true,
        }
    }
}

/// Kind-specific part of a widget spec
#[derive(Debug, Clone)]
pub enum KindSpec {
    Label(LabelKind),
    Button(ButtonKind),
    TextField(TextFieldKind),
    Panel(PanelKind),
    RichText(RichTextKind),
}

impl KindSpec {
    pub fn tag(&self) -> WidgetKindTag {
        match self {
            KindSpec::Label(_) => WidgetKindTag::Label,
            KindSpec::Button(_) => WidgetKindTag::Button,
            KindSpec::TextField(_) => WidgetKindTag::TextField,
            KindSpec::Panel(_) => WidgetKindTag::Panel,
            KindSpec::RichText(_) => WidgetKindTag::RichText,
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::LabelKind {}
    impl Sealed for super::ButtonKind {}
    impl Sealed for super::TextFieldKind {}
    impl Sealed for super::PanelKind {}
    impl Sealed for super::RichTextKind {}
}

/// Marker for the kind records a [`WidgetBuilder`](crate::builder::WidgetBuilder)
/// can be parameterized over
pub trait WidgetKind: private::Sealed + Clone + Default {
    const TAG: WidgetKindTag;

    fn into_kind_spec(self) -> KindSpec;
}

impl WidgetKind for LabelKind {
    const TAG: WidgetKindTag = WidgetKindTag::Label;

    fn into_kind_spec(self) -> KindSpec {
        KindSpec::Label(self)
    }
}

impl WidgetKind for ButtonKind {
    const TAG: WidgetKindTag = WidgetKindTag::Button;

    fn into_kind_spec(self) -> KindSpec {
        KindSpec::Button(self)
    }
}

impl WidgetKind for TextFieldKind {
    const TAG: WidgetKindTag = WidgetKindTag::TextField;

    fn into_kind_spec(self) -> KindSpec {
        KindSpec::TextField(self)
    }
}

impl WidgetKind for PanelKind {
    const TAG: WidgetKindTag = WidgetKindTag::Panel;

    fn into_kind_spec(self) -> KindSpec {
        KindSpec::Panel(self)
    }
}

impl WidgetKind for RichTextKind {
    const TAG: WidgetKindTag = WidgetKindTag::RichText;

    fn into_kind_spec(self) -> KindSpec {
        KindSpec::RichText(self)
    }
}

/// Fields shared by every widget kind
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommonSpec {
    pub(crate) text: String,
    pub(crate) font: FontRole,
    pub(crate) color: Color,
    pub(crate) alignment: Alignment,
    pub(crate) size: Option<Size>,
    pub(crate) enabled: bool,
    pub(crate) tooltip: Option<String>,
}

impl Default for CommonSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontRole::Normal,
            color: Color::WHITE,
            alignment: Alignment::Leading,
            size: None,
            enabled: true,
            tooltip: None,
        }
    }
}

/// Frozen widget configuration
#[derive(Debug, Clone)]
pub struct WidgetSpec {
    pub(crate) common: CommonSpec,
    pub(crate) kind: KindSpec,
}

impl WidgetSpec {
    pub(crate) fn new(common: CommonSpec, kind: KindSpec) -> Self {
        Self { common, kind }
    }

    /// Create a widget from this spec.
    ///
    /// Every call yields a new widget with its own identity and runtime
    /// state; `self` is never modified.
    pub fn instantiate(&self) -> Widget {
        Widget::from_spec(Arc::new(self.clone()))
    }

    pub fn tag(&self) -> WidgetKindTag {
        self.kind.tag()
    }

    pub fn kind(&self) -> &KindSpec {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.common.text
    }

    pub fn font(&self) -> FontRole {
        self.common.font
    }

    pub fn color(&self) -> Color {
        self.common.color
    }

    pub fn alignment(&self) -> Alignment {
        self.common.alignment
    }

    /// Fixed preferred/maximum size, `None` sizes to content
    pub fn size(&self) -> Option<Size> {
        self.common.size
    }

    pub fn enabled(&self) -> bool {
        self.common.enabled
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.common.tooltip.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(LabelKind.into_kind_spec().tag(), LabelKind::TAG);
        assert_eq!(ButtonKind::default().into_kind_spec().tag(), WidgetKindTag::Button);
        assert_eq!(WidgetKindTag::RichText.as_str(), "rich_text");
    }

    #[test]
    fn test_kind_defaults() {
        let field = TextFieldKind::default();
        assert!(field.editable);
        assert_eq!(field.columns, 0);

        assert!(RichTextKind::default().wrap);
        assert!(RichTextKind::default().html.is_empty());
        assert!(!ButtonKind::default().has_action());
        assert_eq!(PanelKind::default().background, None);
    }

    #[test]
    fn test_common_defaults() {
        let common = CommonSpec::default();
        assert_eq!(common.text, "");
        assert_eq!(common.font, FontRole::Normal);
        assert_eq!(common.color, Color::WHITE);
        assert_eq!(common.size, None);
        assert!(common.enabled);
    }
}
