//! Concrete widget instances

use crate::spec::{KindSpec, WidgetKindTag, WidgetSpec};
use panelkit_core::{
    state::Signal,
    theme::{FontRole, FontSpec, Typography},
    types::{Alignment, Color, Size},
};
use std::sync::Arc;

/// Unique identifier for widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// A widget created from a [`WidgetSpec`].
///
/// The [`WidgetSpec`] is the widget's initial configuration and never changes. Text and
/// enabled state are runtime state owned by this instance alone.
pub struct Widget {
    id: WidgetId,
    spec: Arc<WidgetSpec>,
    text: Signal<String>,
    enabled: Signal<bool>,
}

impl Widget {
    pub(crate) fn from_spec(spec: Arc<WidgetSpec>) -> Self {
        let widget = Self {
            id: WidgetId::new(),
            text: Signal::new(spec.text().to_string()),
            enabled: Signal::new(spec.enabled()),
            spec,
        };
        tracing::trace!(
            target: "panelkit::widgets",
            id = widget.id.0,
            kind = widget.kind().as_str(),
            "widget created"
        );
        widget
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn kind(&self) -> WidgetKindTag {
        self.spec.tag()
    }

    /// The configuration this widget was created from
    pub fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    /// Subscribe to text changes
    pub fn on_text_change<F>(&self, callback: F)
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.text.subscribe(callback);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn font(&self) -> FontRole {
        self.spec.font()
    }

    /// Resolve the font role against a typography
    pub fn resolved_font(&self, typography: &Typography) -> FontSpec {
        typography.resolve(self.spec.font())
    }

    pub fn color(&self) -> Color {
        self.spec.color()
    }

    pub fn alignment(&self) -> Alignment {
        self.spec.alignment()
    }

    /// Fixed preferred/maximum size, `None` sizes to content
    pub fn fixed_size(&self) -> Option<Size> {
        self.spec.size()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.spec.tooltip()
    }

    /// Activate the widget as if it were clicked.
    ///
    /// Runs the click action of an enabled button and returns `true`.
    /// Anything else (other kinds, disabled buttons, buttons without an
    /// action) is a no-op returning `false`.
    pub fn activate(&self) -> bool {
        let KindSpec::Button(button) = self.spec.kind() else {
            return false;
        };
        let Some(action) = button.on_click.as_ref() else {
            return false;
        };
        if !self.is_enabled() {
            return false;
        }

        tracing::trace!(target: "panelkit::widgets", id = self.id.0, "button activated");
        action();
        true
    }

    /// Markup for a rich text block, wrapped in an `<html>` document unless
    /// it already is one. Uses the configured HTML, or the current text when
    /// none was set. `None` for other kinds.
    pub fn markup(&self) -> Option<String> {
        let KindSpec::RichText(rich) = self.spec.kind() else {
            return None;
        };
        let text = if rich.html.is_empty() {
            self.text()
        } else {
            rich.html.clone()
        };
        if text.trim_start().to_ascii_lowercase().starts_with("<html") {
            Some(text)
        } else {
            Some(format!("<html><body>{}</body></html>", text))
        }
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("text", &self.text.get())
            .field("enabled", &self.enabled.get())
            .finish()
    }
}
