//! Assembles a plugin sidebar: a title, an info block, a search field, a clear
//! button and a stats grid, then mounts it into a stand-in host container.
//!
//! Run with `RUST_LOG=panelkit::layout=debug` to watch the layout calls.

use panelkit::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct HostSidebar {
    panels: Vec<PanelRef>,
}

impl MountPoint for HostSidebar {
    fn mount(&mut self, panel: PanelRef) {
        tracing::info!(slots = panel.read().len(), "panel mounted");
        self.panels.push(panel);
    }
}

fn stats_grid(config: &PanelConfig) -> GridLayoutStrategy {
    let mut grid = GridLayoutStrategy::from_config(config, 0);
    for (name, value) in [("Kills", "0"), ("Deaths", "0"), ("Loot", "0 gp")] {
        grid.add(label().text(name).small().color(Color::LIGHT_GRAY).finalize());
        grid.add_gap(5);
        grid.add(label().text(value).align(Alignment::Trailing).finalize());
    }
    grid
}

fn main() -> anyhow::Result<()> {
    let config = PanelConfig::default();
    panelkit::init_with_config(&config)?;

    let clears = Arc::new(AtomicUsize::new(0));
    let mut layout = VerticalStackStrategy::with_spacing(4);

    layout.add_with_hint(
        label().text("Session Tracker").bold().color(Color::BRAND_ORANGE).finalize(),
        PlacementHint::Align(Alignment::Center),
    );
    layout.add_gap(8);
    layout.add(
        WidgetBuilder::rich_text_with_config(&config)
            .text("Tracks kills and loot for the current session.")
            .finalize(),
    );
    layout.add(text_field().placeholder("Filter items").columns(16).finalize());
    layout.add_separator();

    layout.add(panel().background(Color::DARKER_GRAY).size(200, 4).finalize());

    let counter = Arc::clone(&clears);
    layout.add_with_hint(
        button()
            .text("Clear")
            .size(200, 30)
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .finalize(),
        PlacementHint::Fill,
    );

    let mut host = HostSidebar::default();
    host.mount(layout.build());
    host.mount(stats_grid(&config).build());

    let sidebar = host.panels[0].read();
    if let Some(clear) = sidebar.find_by_text("Clear") {
        clear.activate();
    }
    for widget in sidebar.widgets() {
        let font = widget.resolved_font(&config.typography);
        println!("{:<10} {:<48} {}px", widget.kind().as_str(), widget.text(), font.size);
    }
    println!(
        "stats grid: {} rows x {} columns, clear pressed {} time(s)",
        host.panels[1].read().effective_rows(),
        host.panels[1].read().effective_columns(),
        clears.load(Ordering::SeqCst)
    );

    Ok(())
}
