use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Profiles per area (side panel)
// ---------------------------------------------------------------------------

/// Bar chart of how many profiles each area holds, over the full dataset.
pub fn area_chart(ui: &mut Ui, state: &AppState) {
    if state.area_counts.is_empty() {
        return;
    }

    let bars: Vec<Bar> = state
        .area_counts
        .iter()
        .enumerate()
        .map(|(i, (area, &count))| {
            Bar::new(i as f64, count as f64)
                .name(area)
                .fill(state.area_colors.color_for(area))
                .width(0.7)
        })
        .collect();

    Plot::new("area_chart")
        .height(140.0)
        .show_x(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (area, count) in &state.area_counts {
            let color = state.area_colors.color_for(area);
            ui.label(RichText::new(format!("■ {area} ({count})")).small().color(color));
        }
    });
}
