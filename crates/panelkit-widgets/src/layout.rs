//! Panels and the layout strategy contract
//!
//! A [`LayoutStrategy`] owns exactly one [`Panel`] from construction on and
//! appends widgets, gaps and separators to it in call order.
//!
//! # Aliasing
//!
//! [`LayoutStrategy::build`] and [`LayoutStrategy::get_panel`] hand out the
//! *same* panel through a shared [`PanelRef`] handle, never a copy. Widgets
//! added after a `get_panel` peek, or even after `build`, show up in every
//! handle already returned. Two handles compare equal only when they point at
//! the same panel.

use crate::widget::Widget;
use panelkit_core::types::{Alignment, Color, EdgeInsets};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Placement hint passed with [`LayoutStrategy::add_with_hint`].
/// Each strategy documents whether it honors hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementHint {
    Align(Alignment),
    /// Stretch across the available width
    Fill,
}

/// How faithfully a strategy reproduces requested gap sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapFidelity {
    /// The gap takes exactly the requested number of pixels
    Exact,
    /// Every gap becomes one blank cell of uniform size, whatever was requested
    SingleCell,
}

/// Content of one slot in a panel
#[derive(Debug)]
pub enum Cell {
    Widget(Widget),
    /// Visual divider
    Separator,
    /// Blank cell of uniform grid-cell size
    Filler,
    /// Blank space of an exact pixel size
    Spacer(u32),
}

/// One positioned entry of a panel
#[derive(Debug)]
pub struct Slot {
    cell: Cell,
    hint: Option<PlacementHint>,
}

impl Slot {
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn hint(&self) -> Option<PlacementHint> {
        self.hint
    }

    pub fn widget(&self) -> Option<&Widget> {
        match &self.cell {
            Cell::Widget(widget) => Some(widget),
            _ => None,
        }
    }
}

/// Arrangement metadata of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Grid {
        /// Declared rows, 0 grows to fit
        rows: usize,
        /// Declared columns. 0 derives the count from `rows` as
        /// `ceil(n / rows)`; with `rows` also 0 the grid is one column wide.
        columns: usize,
        horizontal_gap: u32,
        vertical_gap: u32,
    },
    VerticalStack {
        spacing: u32,
    },
}

/// Border decoration around a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Border {
    None,
    Padding(EdgeInsets),
    Line { color: Color, thickness: u32 },
}

impl Border {
    /// Space the border takes on each side
    pub fn insets(&self) -> EdgeInsets {
        match self {
            Border::None => EdgeInsets::default(),
            Border::Padding(insets) => *insets,
            Border::Line { thickness, .. } => EdgeInsets::all(*thickness),
        }
    }
}

/// Container of placed widgets
#[derive(Debug)]
pub struct Panel {
    layout: LayoutKind,
    border: Border,
    slots: Vec<Slot>,
}

impl Panel {
    pub fn new(layout: LayoutKind, border: Border) -> Self {
        Self {
            layout,
            border,
            slots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, cell: Cell, hint: Option<PlacementHint>) {
        self.slots.push(Slot { cell, hint });
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn border(&self) -> Border {
        self.border
    }

    /// Number of slots, counting fillers, spacers and separators
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Widgets in the order they were added
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.slots.iter().filter_map(Slot::widget)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets().count()
    }

    pub fn filler_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.cell, Cell::Filler))
            .count()
    }

    pub fn separator_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.cell, Cell::Separator))
            .count()
    }

    /// First widget whose current text matches
    pub fn find_by_text(&self, text: &str) -> Option<&Widget> {
        self.widgets().find(|widget| widget.text() == text)
    }

    /// Columns actually used by the arrangement
    pub fn effective_columns(&self) -> usize {
        match self.layout {
            LayoutKind::Grid { columns, .. } if columns > 0 => columns,
            // No column count: the declared rows decide how wide the grid gets
            LayoutKind::Grid { rows, .. } if rows > 0 => self.len().div_ceil(rows).max(1),
            LayoutKind::Grid { .. } => 1,
            LayoutKind::VerticalStack { .. } => 1,
        }
    }

    /// Rows actually used by the arrangement. A grid never has fewer rows
    /// than declared and grows past them when more cells are added than
    /// `rows * columns`.
    pub fn effective_rows(&self) -> usize {
        match self.layout {
            LayoutKind::Grid { rows, .. } => {
                let needed = self.len().div_ceil(self.effective_columns());
                needed.max(rows)
            }
            LayoutKind::VerticalStack { .. } => self.len(),
        }
    }

    /// `(row, column)` of the slot at `index`
    pub fn grid_position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len() {
            return None;
        }
        let columns = self.effective_columns();
        Some((index / columns, index % columns))
    }
}

/// Shared handle to a panel
#[derive(Debug, Clone)]
pub struct PanelRef(Arc<RwLock<Panel>>);

impl PanelRef {
    pub fn new(panel: Panel) -> Self {
        Self(Arc::new(RwLock::new(panel)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Panel> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Panel> {
        self.0.write()
    }

    /// Whether both handles point at the same panel
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for PanelRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PanelRef {}

/// Arranges widgets into a panel without callers knowing the algorithm.
///
/// Implementations must document how they treat placement hints and gap sizes
/// (see [`LayoutStrategy::gap_fidelity`]).
pub trait LayoutStrategy {
    /// Append a widget
    fn add(&mut self, widget: Widget);

    /// Append a widget with a placement hint the strategy may use
    fn add_with_hint(&mut self, widget: Widget, hint: PlacementHint);

    /// Request blank space of `size` pixels
    fn add_gap(&mut self, size: u32);

    /// Append a divider occupying one slot
    fn add_separator(&mut self);

    /// The panel being assembled
    fn get_panel(&self) -> PanelRef;

    fn gap_fidelity(&self) -> GapFidelity;

    /// Finish assembling. Returns the same panel as [`get_panel`](Self::get_panel);
    /// adding afterwards stays valid and mutates that panel.
    fn build(&self) -> PanelRef {
        self.get_panel()
    }

    /// Append several widgets in order
    fn add_all<I>(&mut self, widgets: I)
    where
        I: IntoIterator<Item = Widget>,
        Self: Sized,
    {
        for widget in widgets {
            self.add(widget);
        }
    }
}

/// The host container a finished panel is embedded into
pub trait MountPoint {
    fn mount(&mut self, panel: PanelRef);
}
