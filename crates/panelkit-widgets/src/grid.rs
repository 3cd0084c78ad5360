//! Grid layout strategy
//!
//! Places cells row by row into a fixed number of columns. Grid cells all have
//! the same geometry, which shapes two documented simplifications:
//!
//! - placement hints are ignored, placement is purely sequential;
//! - [`add_gap`](LayoutStrategy::add_gap) cannot honor the requested size and
//!   inserts one blank filler cell instead, so `add_gap(1)` and `add_gap(100)`
//!   look the same. Use a [`VerticalStackStrategy`](crate::stack::VerticalStackStrategy)
//!   when exact spacing matters.
//!
//! There is no capacity check. Adding more than `rows * columns` cells grows
//! the grid past its declared row count.

use crate::layout::{
    Border, Cell, GapFidelity, LayoutKind, LayoutStrategy, Panel, PanelRef, PlacementHint,
};
use crate::widget::Widget;
use panelkit_core::{config::PanelConfig, types::EdgeInsets};

const DEFAULT_COLUMNS: usize = 3;
const DEFAULT_GAP: u32 = 5;
const DEFAULT_PADDING: u32 = 10;

/// Builder for [`GridLayoutStrategy`]
#[derive(Debug, Clone)]
pub struct GridLayoutBuilder {
    rows: usize,
    columns: usize,
    horizontal_gap: u32,
    vertical_gap: u32,
    border: Option<Border>,
    default_padding: u32,
}

impl Default for GridLayoutBuilder {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: DEFAULT_COLUMNS,
            horizontal_gap: DEFAULT_GAP,
            vertical_gap: DEFAULT_GAP,
            border: None,
            default_padding: DEFAULT_PADDING,
        }
    }
}

impl GridLayoutBuilder {
    /// Declared row count, 0 grows to fit
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Declared column count. 0 derives the count from the rows as
    /// `ceil(n / rows)`; with rows also 0 the grid is one column wide.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Horizontal gap between columns in pixels
    pub fn horizontal_gap(mut self, gap: u32) -> Self {
        self.horizontal_gap = gap;
        self
    }

    /// Vertical gap between rows in pixels
    pub fn vertical_gap(mut self, gap: u32) -> Self {
        self.vertical_gap = gap;
        self
    }

    /// Set both gaps
    pub fn gaps(self, horizontal: u32, vertical: u32) -> Self {
        self.horizontal_gap(horizontal).vertical_gap(vertical)
    }

    /// Border decoration. Without one the panel gets uniform padding.
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn build(self) -> GridLayoutStrategy {
        let border = self
            .border
            .unwrap_or(Border::Padding(EdgeInsets::all(self.default_padding)));
        let panel = Panel::new(
            LayoutKind::Grid {
                rows: self.rows,
                columns: self.columns,
                horizontal_gap: self.horizontal_gap,
                vertical_gap: self.vertical_gap,
            },
            border,
        );
        tracing::debug!(
            target: "panelkit::layout",
            rows = self.rows,
            columns = self.columns,
            "grid layout created"
        );
        GridLayoutStrategy {
            panel: PanelRef::new(panel),
            overflow_reported: false,
        }
    }
}

/// Grid layout strategy
#[derive(Debug)]
pub struct GridLayoutStrategy {
    panel: PanelRef,
    overflow_reported: bool,
}

impl GridLayoutStrategy {
    /// Grid with the given shape and default gaps and border
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::builder().rows(rows).columns(columns).build()
    }

    pub fn builder() -> GridLayoutBuilder {
        GridLayoutBuilder::default()
    }

    /// Grid whose columns, gaps and padding come from host configuration
    pub fn from_config(config: &PanelConfig, rows: usize) -> Self {
        let defaults = config.grid;
        let mut builder = Self::builder()
            .rows(rows)
            .columns(defaults.columns)
            .gaps(defaults.horizontal_gap, defaults.vertical_gap);
        builder.default_padding = defaults.padding;
        builder.build()
    }

    fn push(&mut self, cell: Cell) {
        let mut panel = self.panel.write();
        panel.push(cell, None);

        if self.overflow_reported {
            return;
        }
        if let LayoutKind::Grid { rows, columns, .. } = panel.layout() {
            if rows > 0 && columns > 0 && panel.len() > rows * columns {
                self.overflow_reported = true;
                tracing::debug!(
                    target: "panelkit::layout",
                    declared_rows = rows,
                    effective_rows = panel.effective_rows(),
                    "grid grew past its declared rows"
                );
            }
        }
    }
}

impl Default for GridLayoutStrategy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LayoutStrategy for GridLayoutStrategy {
    fn add(&mut self, widget: Widget) {
        tracing::debug!(target: "panelkit::layout", id = widget.id().0, "grid add");
        self.push(Cell::Widget(widget));
    }

    /// The hint is ignored, grid placement is sequential
    fn add_with_hint(&mut self, widget: Widget, _hint: PlacementHint) {
        self.add(widget);
    }

    /// Inserts one filler cell regardless of `size`
    fn add_gap(&mut self, size: u32) {
        tracing::debug!(target: "panelkit::layout", requested = size, "grid gap as filler cell");
        self.push(Cell::Filler);
    }

    fn add_separator(&mut self) {
        tracing::debug!(target: "panelkit::layout", "grid separator");
        self.push(Cell::Separator);
    }

    fn get_panel(&self) -> PanelRef {
        self.panel.clone()
    }

    fn gap_fidelity(&self) -> GapFidelity {
        GapFidelity::SingleCell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::label;
    use panelkit_core::types::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let grid = GridLayoutStrategy::default();
        let panel = grid.get_panel();
        let panel = panel.read();

        assert_eq!(
            panel.layout(),
            LayoutKind::Grid {
                rows: 0,
                columns: 3,
                horizontal_gap: 5,
                vertical_gap: 5,
            }
        );
        assert_eq!(panel.border(), Border::Padding(EdgeInsets::all(10)));
        assert_eq!(grid.gap_fidelity(), GapFidelity::SingleCell);
    }

    #[test]
    fn test_custom_border_and_gaps() {
        let border = Border::Line {
            color: Color::MEDIUM_GRAY,
            thickness: 2,
        };
        let grid = GridLayoutStrategy::builder()
            .columns(2)
            .gaps(0, 8)
            .border(border)
            .build();
        let panel = grid.build();
        let panel = panel.read();

        assert_eq!(panel.border(), border);
        assert_eq!(
            panel.layout(),
            LayoutKind::Grid {
                rows: 0,
                columns: 2,
                horizontal_gap: 0,
                vertical_gap: 8,
            }
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = PanelConfig::default();
        config.grid.columns = 2;
        config.grid.padding = 6;
        config.grid.horizontal_gap = 1;

        let grid = GridLayoutStrategy::from_config(&config, 4);
        let panel = grid.get_panel();
        let panel = panel.read();

        assert_eq!(panel.border(), Border::Padding(EdgeInsets::all(6)));
        assert_eq!(
            panel.layout(),
            LayoutKind::Grid {
                rows: 4,
                columns: 2,
                horizontal_gap: 1,
                vertical_gap: 5,
            }
        );
    }

    #[test]
    fn test_hint_is_ignored() {
        let mut grid = GridLayoutStrategy::new(0, 2);
        grid.add(label().text("a").finalize());
        grid.add_with_hint(label().text("b").finalize(), PlacementHint::Fill);

        let panel = grid.build();
        let panel = panel.read();
        assert_eq!(panel.slots()[1].hint(), None);
        assert_eq!(panel.grid_position(1), Some((0, 1)));
    }

    #[test]
    fn test_overflow_grows_rows() {
        let mut grid = GridLayoutStrategy::new(1, 2);
        for name in ["a", "b", "c", "d", "e"] {
            grid.add(label().text(name).finalize());
        }

        let panel = grid.build();
        let panel = panel.read();
        assert_eq!(panel.widget_count(), 5);
        assert_eq!(panel.effective_rows(), 3);
        assert_eq!(panel.grid_position(4), Some((2, 0)));
        assert!(grid.overflow_reported);
    }
}
