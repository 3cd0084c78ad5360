//! Vertical stack layout strategy
//!
//! Stacks cells top to bottom, one per row. Unlike the grid this strategy
//! honors gap sizes exactly (each gap becomes a spacer of the requested
//! height) and keeps placement hints as the horizontal alignment of the slot.

use crate::layout::{
    Border, Cell, GapFidelity, LayoutKind, LayoutStrategy, Panel, PanelRef, PlacementHint,
};
use crate::widget::Widget;
use panelkit_core::types::EdgeInsets;

/// Vertical stack layout strategy
#[derive(Debug)]
pub struct VerticalStackStrategy {
    panel: PanelRef,
}

impl VerticalStackStrategy {
    /// Stack with no spacing between slots and 10px padding
    pub fn new() -> Self {
        Self::with_spacing(0)
    }

    /// Stack with fixed spacing between consecutive slots
    pub fn with_spacing(spacing: u32) -> Self {
        Self::with_border(spacing, Border::Padding(EdgeInsets::all(10)))
    }

    pub fn with_border(spacing: u32, border: Border) -> Self {
        let panel = Panel::new(LayoutKind::VerticalStack { spacing }, border);
        tracing::debug!(target: "panelkit::layout", spacing, "stack layout created");
        Self {
            panel: PanelRef::new(panel),
        }
    }

    /// Total height taken by spacers
    pub fn spacer_height(&self) -> u32 {
        self.panel
            .read()
            .slots()
            .iter()
            .map(|slot| match slot.cell() {
                Cell::Spacer(height) => *height,
                _ => 0,
            })
            .sum()
    }
}

impl Default for VerticalStackStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStrategy for VerticalStackStrategy {
    fn add(&mut self, widget: Widget) {
        tracing::debug!(target: "panelkit::layout", id = widget.id().0, "stack add");
        self.panel.write().push(Cell::Widget(widget), None);
    }

    fn add_with_hint(&mut self, widget: Widget, hint: PlacementHint) {
        tracing::debug!(target: "panelkit::layout", id = widget.id().0, ?hint, "stack add");
        self.panel.write().push(Cell::Widget(widget), Some(hint));
    }

    /// Inserts a spacer of exactly `size` pixels
    fn add_gap(&mut self, size: u32) {
        tracing::debug!(target: "panelkit::layout", size, "stack gap");
        self.panel.write().push(Cell::Spacer(size), None);
    }

    fn add_separator(&mut self) {
        tracing::debug!(target: "panelkit::layout", "stack separator");
        self.panel.write().push(Cell::Separator, None);
    }

    fn get_panel(&self) -> PanelRef {
        self.panel.clone()
    }

    fn gap_fidelity(&self) -> GapFidelity {
        GapFidelity::Exact
    }
}
