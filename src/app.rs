use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use crate::config::{AppConfig, THEME_KEY};
use crate::data::loader::DatasetLoader;
use crate::state::AppState;
use crate::ui::panels::{self, MenuAction};
use crate::ui::{cards, modal};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyTalentApp {
    pub state: AppState,
    loader: DatasetLoader,
}

impl RustyTalentApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let ctx = cc.egui_ctx.clone();
        let loader = DatasetLoader::with_notify(Arc::new(move || ctx.request_repaint()));

        let mut state = AppState::new(config);
        state.dark_mode = cc
            .storage
            .and_then(|s| eframe::get_value::<bool>(s, THEME_KEY))
            .unwrap_or_else(|| cc.egui_ctx.style().visuals.dark_mode);

        let mut app = Self { state, loader };
        let path = app.state.config.data_path.clone();
        app.load(&path);
        app
    }

    /// Start (or restart) loading a dataset. Any load still in flight is
    /// superseded.
    pub fn load(&mut self, path: &Path) {
        self.loader.request(path);
        self.state.config.data_path = path.to_path_buf();
        self.state.begin_loading();
    }

    fn handle_menu(&mut self, action: MenuAction) {
        match action {
            MenuAction::None => {}
            MenuAction::Open(path) => self.load(&path),
            MenuAction::Reload => {
                let path = self.state.config.data_path.clone();
                self.load(&path);
            }
        }
    }
}

impl eframe::App for RustyTalentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.loader.poll() {
            self.state.finish_loading(outcome);
        }

        ctx.set_visuals(if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // ---- Top panel: menu bar ----
        let mut action = MenuAction::None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            action = panels::top_bar(ui, &mut self.state);
        });
        self.handle_menu(action);

        // ---- Left side panel: stats and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: profile grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::profile_grid(ui, &mut self.state);
        });

        // ---- Overlays ----
        let now = Instant::now();
        modal::profile_window(ctx, &mut self.state, now);

        if let Some(remaining) = self.state.toast.tick(now) {
            panels::toast(ctx, &self.state, now);
            ctx.request_repaint_after(remaining);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, THEME_KEY, &self.state.dark_mode);
    }
}
