use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::Profile;
use crate::state::AppState;
use crate::ui::chip;

// ---------------------------------------------------------------------------
// Profile detail window
// ---------------------------------------------------------------------------

/// Render the detail window for `state.selected_profile`, if any.
pub fn profile_window(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let Some(id) = state.selected_profile else {
        return;
    };
    // The window mutates the state while showing the profile.
    let Some(profile) = state.profile(id).cloned() else {
        state.close_profile();
        return;
    };

    let mut open = true;
    egui::Window::new(RichText::new(&profile.name).strong())
        .id(egui::Id::new("profile_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(680.0)
        .default_height(560.0)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    header(ui, state, &profile);
                    ui.separator();
                    actions(ui, state, &profile, now);
                    composer(ui, state, &profile, now);
                    ui.separator();
                    sections(ui, &profile);
                });
        });

    if !open {
        state.close_profile();
    }
}

fn header(ui: &mut Ui, state: &AppState, profile: &Profile) {
    ui.horizontal(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(profile.photo.as_str())
                .fit_to_exact_size(egui::vec2(96.0, 96.0))
                .corner_radius(12.0),
        );
        ui.vertical(|ui: &mut Ui| {
            ui.label(
                RichText::new(profile.area.to_uppercase())
                    .small()
                    .strong()
                    .color(state.area_colors.color_for(&profile.area)),
            );
            ui.label(RichText::new(&profile.name).size(20.0).strong());
            ui.label(&profile.role);
            ui.label(
                RichText::new(format!(
                    "{} • {} recommendations",
                    profile.location,
                    state.recommendation_count(profile.id)
                ))
                .small(),
            );
        });
    });
    ui.add_space(6.0);
    ui.label(&profile.summary);
}

fn actions(ui: &mut Ui, state: &mut AppState, profile: &Profile, now: Instant) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.4);
        for skill in &profile.soft_skills {
            chip(ui, skill, fill);
        }
    });
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Recommend professional").clicked() {
            state.recommend(profile.id, now);
        }
        if ui.button("Send message").clicked() {
            state.toggle_composer(profile.id);
        }
    });
}

fn composer(ui: &mut Ui, state: &mut AppState, profile: &Profile, now: Instant) {
    let mut submit = false;
    let mut cancel = false;
    let Some(draft) = state
        .composer
        .as_mut()
        .filter(|d| d.recipient == profile.id)
    else {
        return;
    };

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong(format!("Send a message to {}", profile.name));
        ui.label("Subject");
        ui.add(
            egui::TextEdit::singleline(&mut draft.subject)
                .hint_text("Invitation to collaborate")
                .desired_width(f32::INFINITY),
        );
        ui.label("Message");
        ui.add(
            egui::TextEdit::multiline(&mut draft.body)
                .hint_text("Share your project proposal or opportunity…")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui: &mut Ui| {
            submit = ui.button("Send now").clicked();
            cancel = ui.link("Cancel").clicked();
        });
    });

    if submit {
        // Rejections are reported through the toast.
        let _ = state.submit_message(now);
    } else if cancel {
        state.composer = None;
    }
}

fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.add_space(6.0);
    ui.label(RichText::new(title.to_uppercase()).small().strong().weak());
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        add_contents(ui);
    });
}

fn sections(ui: &mut Ui, profile: &Profile) {
    section(ui, "Technical skills", |ui| {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            let fill = ui.visuals().faint_bg_color;
            for skill in &profile.technical_skills {
                chip(ui, skill, fill);
            }
        });
    });

    section(ui, "Work experience", |ui| {
        for exp in &profile.experiences {
            ui.label(RichText::new(&exp.company).strong());
            ui.label(&exp.title);
            ui.label(RichText::new(format!("{} – {}", exp.start, exp.end)).small().weak());
            ui.label(&exp.description);
            ui.add_space(4.0);
        }
    });

    section(ui, "Education", |ui| {
        for edu in &profile.education {
            ui.label(RichText::new(&edu.course).strong());
            ui.label(RichText::new(format!("{} · {}", edu.institution, edu.year)).small());
        }
    });

    section(ui, "Certifications", |ui| {
        for cert in &profile.certifications {
            ui.label(format!("• {cert}"));
        }
    });

    section(ui, "Impact projects", |ui| {
        for project in &profile.projects {
            ui.hyperlink_to(RichText::new(&project.title).strong(), &project.link);
            ui.label(&project.description);
            ui.add_space(4.0);
        }
    });

    section(ui, "Languages and interests", |ui| {
        ui.columns(2, |cols: &mut [Ui]| {
            cols[0].label(RichText::new("Languages").small().strong());
            for lang in &profile.languages {
                cols[0].label(format!("{} · {}", lang.language, lang.level));
            }
            cols[1].label(RichText::new("Interests").small().strong());
            cols[1].horizontal_wrapped(|ui: &mut Ui| {
                let fill = ui.visuals().faint_bg_color;
                for interest in &profile.interests {
                    chip(ui, interest, fill);
                }
            });
        });
    });

    section(ui, "Hobbies", |ui| {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            let fill = ui.visuals().faint_bg_color;
            for hobby in &profile.hobbies {
                chip(ui, hobby, fill);
            }
        });
    });
}
