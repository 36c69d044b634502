use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Profile;
use crate::state::AppState;
use crate::ui::{chip, preview};

const CARD_WIDTH: f32 = 320.0;
const SUMMARY_CHARS: usize = 110;

// ---------------------------------------------------------------------------
// Central panel – profile grid
// ---------------------------------------------------------------------------

/// Render the list header, error banner and the grid (or its placeholders).
pub fn profile_grid(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Featured professionals");
    if state.is_loading() {
        ui.label("Loading mock profiles…");
    } else {
        ui.label(format!(
            "{} profiles available for connection",
            state.visible_count()
        ));
    }
    ui.add_space(6.0);

    if let Some(msg) = state.error_message() {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui: &mut Ui| {
                ui.label(RichText::new(msg).color(Color32::RED));
            });
        ui.add_space(6.0);
    }

    if state.is_loading() {
        skeleton_grid(ui);
        return;
    }

    if state.visible_count() == 0 {
        if empty_state(ui) {
            state.clear_filters();
        }
        return;
    }

    let mut opened: Option<u32> = None;
    let columns = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);
    let view: &AppState = state;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let visible = view.filtered_profiles();
            for row in visible.chunks(columns) {
                ui.columns(columns, |cols: &mut [Ui]| {
                    for (col, profile) in cols.iter_mut().zip(row) {
                        if profile_card(col, view, profile) {
                            opened = Some(profile.id);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

    if let Some(id) = opened {
        state.open_profile(id);
    }
}

/// One card. Returns `true` when "View profile" was clicked.
fn profile_card(ui: &mut Ui, state: &AppState, profile: &Profile) -> bool {
    let mut clicked = false;
    let area_color = state.area_colors.color_for(&profile.area);
    let preview_len = state.config.card_skill_preview;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_height(190.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(profile.photo.as_str())
                    .fit_to_exact_size(egui::vec2(56.0, 56.0))
                    .corner_radius(8.0),
            );
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(&profile.name).strong().size(16.0));
                ui.label(&profile.role);
                ui.label(
                    RichText::new(format!("{} • {}", profile.location, profile.area))
                        .small()
                        .color(area_color),
                );
            });
        });

        ui.add_space(4.0);
        ui.label(preview(&profile.summary, SUMMARY_CHARS));

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui: &mut Ui| {
            let fill = ui.visuals().faint_bg_color;
            for skill in profile.technical_skills.iter().take(preview_len) {
                chip(ui, skill, fill);
            }
            let hidden = profile.technical_skills.len().saturating_sub(preview_len);
            if hidden > 0 {
                ui.label(RichText::new(format!("+{hidden}")).small().weak());
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui: &mut Ui| {
            let count = state.recommendation_count(profile.id);
            ui.label(RichText::new(format!("{count} recommendations")).small());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                if ui.button("View profile →").clicked() {
                    clicked = true;
                }
            });
        });
    });

    clicked
}

/// Placeholder cards shown while the dataset loads.
fn skeleton_grid(ui: &mut Ui) {
    let columns = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);
    for _ in 0..(6 / columns).max(1) {
        ui.columns(columns, |cols: &mut [Ui]| {
            for col in cols.iter_mut() {
                egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                    ui.set_min_height(120.0);
                    ui.set_min_width(ui.available_width());
                    ui.centered_and_justified(|ui: &mut Ui| {
                        ui.spinner();
                    });
                });
            }
        });
        ui.add_space(8.0);
    }
}

/// "Nothing matched" message. Returns `true` when the reset button was clicked.
fn empty_state(ui: &mut Ui) -> bool {
    let mut reset = false;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("No profile found").strong().size(18.0));
        ui.label("Adjust the search or reset the filters to explore other professionals.");
        ui.add_space(8.0);
        if ui.button("Clear filters").clicked() {
            reset = true;
        }
    });
    reset
}
