//! Behaviour of the layout strategies through the shared trait

use panelkit_widgets::{
    button, label, Cell, GapFidelity, GridLayoutStrategy, LayoutStrategy, MountPoint, PanelRef,
    PlacementHint, VerticalStackStrategy,
};
use pretty_assertions::assert_eq;

#[test]
fn test_grow_to_fit_rows() {
    let mut grid = GridLayoutStrategy::new(0, 3);
    for i in 0..7 {
        grid.add(label().text(format!("Item {}", i)).finalize());
    }

    let panel = grid.build();
    let panel = panel.read();
    assert_eq!(panel.widget_count(), 7);
    assert_eq!(panel.effective_rows(), 3);
    assert_eq!(panel.effective_columns(), 3);
}

#[test]
fn test_grid_gap_is_one_filler_cell() {
    let mut grid = GridLayoutStrategy::default();
    grid.add_gap(1);
    assert_eq!(grid.get_panel().read().filler_count(), 1);

    grid.add_gap(100);
    let panel = grid.get_panel();
    let panel = panel.read();
    assert_eq!(panel.len(), 2);
    assert_eq!(panel.filler_count(), 2);
    assert!(panel
        .slots()
        .iter()
        .all(|slot| matches!(slot.cell(), Cell::Filler)));
    assert_eq!(grid.gap_fidelity(), GapFidelity::SingleCell);
}

#[test]
fn test_build_and_get_panel_are_the_same_panel() {
    let mut grid = GridLayoutStrategy::new(0, 2);
    let early = grid.get_panel();
    assert_eq!(early, grid.build());

    grid.add(label().text("A").finalize());
    let built = grid.build();
    assert_eq!(early, built);
    assert!(early.ptr_eq(&grid.get_panel()));

    // Adding after build mutates the panel already handed out
    grid.add(label().text("B").finalize());
    assert_eq!(built.read().widget_count(), 2);
    assert_eq!(early.read().widget_count(), 2);
}

#[test]
fn test_two_by_two_scenario() {
    let mut grid = GridLayoutStrategy::new(2, 2);
    for name in ["A", "B", "C", "D"] {
        grid.add(label().text(name).finalize());
    }

    let panel = grid.build();
    let panel = panel.read();
    let names: Vec<String> = panel.widgets().map(|w| w.text()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);

    let positions: Vec<_> = (0..panel.len())
        .map(|i| panel.grid_position(i))
        .collect();
    assert_eq!(
        positions,
        vec![Some((0, 0)), Some((0, 1)), Some((1, 0)), Some((1, 1))]
    );
    assert_eq!(panel.effective_rows(), 2);
}

#[test]
fn test_separator_takes_one_slot() {
    let mut grid = GridLayoutStrategy::new(0, 3);
    grid.add(label().text("Kills").finalize());
    grid.add_separator();
    grid.add(label().text("Deaths").finalize());

    let panel = grid.build();
    let panel = panel.read();
    assert_eq!(panel.len(), 3);
    assert_eq!(panel.separator_count(), 1);
    assert!(matches!(panel.slots()[1].cell(), Cell::Separator));
    assert_eq!(panel.grid_position(2), Some((0, 2)));
}

fn assemble(strategy: &mut dyn LayoutStrategy) -> PanelRef {
    strategy.add(label().text("Title").bold().finalize());
    strategy.add_gap(12);
    strategy.add_with_hint(button().text("Clear").finalize(), PlacementHint::Fill);
    strategy.add_separator();
    strategy.build()
}

#[test]
fn test_consumer_is_strategy_agnostic() {
    let mut strategies: Vec<Box<dyn LayoutStrategy>> = vec![
        Box::new(GridLayoutStrategy::new(0, 1)),
        Box::new(VerticalStackStrategy::new()),
    ];

    for strategy in strategies.iter_mut() {
        let panel = assemble(strategy.as_mut());
        let panel = panel.read();
        assert_eq!(panel.len(), 4);
        assert_eq!(panel.widget_count(), 2);
        assert!(panel.find_by_text("Clear").is_some());
    }

    let grid = strategies[0].get_panel();
    let stack = strategies[1].get_panel();
    assert!(matches!(grid.read().slots()[1].cell(), Cell::Filler));
    assert!(matches!(stack.read().slots()[1].cell(), Cell::Spacer(12)));
    assert_eq!(stack.read().slots()[2].hint(), Some(PlacementHint::Fill));
}

#[derive(Default)]
struct Sidebar {
    mounted: Vec<PanelRef>,
}

impl MountPoint for Sidebar {
    fn mount(&mut self, panel: PanelRef) {
        self.mounted.push(panel);
    }
}

#[test]
fn test_mounted_panel_sees_later_additions() {
    let mut sidebar = Sidebar::default();
    let mut stack = VerticalStackStrategy::new();
    sidebar.mount(stack.get_panel());

    stack.add_all([
        label().text("Session").finalize(),
        label().text("00:12:41").small().finalize(),
    ]);

    assert_eq!(sidebar.mounted.len(), 1);
    assert_eq!(sidebar.mounted[0].read().widget_count(), 2);
    assert_eq!(sidebar.mounted[0], stack.build());
}
