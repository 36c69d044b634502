use std::path::PathBuf;
use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::{FilterPatch, Selection};
use crate::data::model::Facet;
use crate::state::AppState;
use crate::ui::plot;

/// Menu request the app has to act on (the loader lives outside the state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Open(PathBuf),
    Reload,
}

// ---------------------------------------------------------------------------
// Left side panel – stats and filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel: headline stats, area chart, filters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Overview");
            ui.separator();
            stats_grid(ui, state);
            ui.add_space(6.0);
            plot::area_chart(ui, state);

            ui.add_space(8.0);
            ui.heading("Filters");
            ui.separator();

            ui.strong("Quick search");
            let mut search = state.filters.search.clone();
            let edit = egui::TextEdit::singleline(&mut search)
                .hint_text("Name, role or skill")
                .desired_width(f32::INFINITY);
            if ui.add(edit).changed() {
                state.set_filters(FilterPatch::search(search));
            }
            ui.add_space(4.0);

            for facet in Facet::ALL {
                facet_select(ui, state, facet);
                ui.add_space(4.0);
            }

            ui.add_space(4.0);
            if ui
                .add_enabled(
                    !state.filters.is_unconstrained(),
                    egui::Button::new("Clear filters"),
                )
                .clicked()
            {
                state.clear_filters();
            }
        });
}

fn stats_grid(ui: &mut Ui, state: &AppState) {
    let stats = state.aggregate_stats();
    let cards = [
        ("Active talents", stats.profiles),
        ("Areas", stats.areas),
        ("Cities", stats.locations),
        ("Technologies mapped", stats.technologies),
    ];
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in cards {
                ui.label(label);
                let text = if value == 0 {
                    "—".to_string()
                } else {
                    value.to_string()
                };
                ui.label(RichText::new(text).strong().size(18.0));
                ui.end_row();
            }
        });
}

/// Combo box for one facet, listing "All" followed by the discovered values.
fn facet_select(ui: &mut Ui, state: &mut AppState, facet: Facet) {
    let current = state.filters.selection(facet).clone();
    let options = state.derived_options().for_facet(facet).to_vec();
    let mut picked: Option<Selection> = None;

    ui.strong(facet.label());
    egui::ComboBox::from_id_salt(facet.label())
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_all(), "All").clicked() {
                picked = Some(Selection::All);
            }
            for opt in &options {
                let is_selected = matches!(&current, Selection::Only(v) if v == opt);
                if ui.selectable_label(is_selected, opt).clicked() {
                    picked = Some(Selection::Only(opt.clone()));
                }
            }
        });

    if let Some(selection) = picked.filter(|s| *s != current) {
        state.set_filters(FilterPatch::facet(facet, selection));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = open_file_dialog() {
                    action = MenuAction::Open(path);
                }
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                action = MenuAction::Reload;
                ui.close_menu();
            }
            ui.separator();
            let can_export = state.visible_count() > 0;
            if ui
                .add_enabled(can_export, egui::Button::new("Export visible…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.is_loading() {
            ui.spinner();
            ui.label("Loading profiles…");
        } else {
            ui.label(format!(
                "{} profiles loaded, {} visible",
                state.profiles().len(),
                state.visible_count()
            ));
        }

        let active = state.filters.active_constraints();
        if !active.is_empty() {
            ui.separator();
            let fill = ui.visuals().faint_bg_color;
            for (label, value) in &active {
                crate::ui::chip(ui, &format!("{label}: {value}"), fill);
            }
            if ui.small_button("clear").clicked() {
                state.clear_filters();
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            let label = if state.dark_mode {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });

    action
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open profile dataset")
        .add_filter("JSON", &["json"])
        .pick_file()
}

/// Ask for a destination and write the visible profiles there as CSV.
pub fn export_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export visible profiles")
        .add_filter("CSV", &["csv"])
        .set_file_name("profiles.csv")
        .save_file()
    else {
        return;
    };

    let now = Instant::now();
    let visible = state.filtered_profiles();
    let result = crate::data::export::export_file(&path, &visible, |id| {
        state.recommendation_count(id)
    });
    let count = visible.len();
    match result {
        Ok(()) => {
            log::info!("Exported {count} profiles to {}", path.display());
            state.toast.show(format!("Exported {count} profiles."), now);
        }
        Err(e) => {
            log::error!("Failed to export profiles: {e:#}");
            state.toast.show(format!("Export failed: {e:#}"), now);
        }
    }
}

// ---------------------------------------------------------------------------
// Toast overlay
// ---------------------------------------------------------------------------

pub fn toast(ctx: &egui::Context, state: &AppState, now: Instant) {
    let Some(message) = state.toast.message(now) else {
        return;
    };
    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui: &mut Ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                ui.label(RichText::new(message).strong());
            });
        });
}
