use eframe::egui;
use rusty_talent::app::RustyTalentApp;
use rusty_talent::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Talent – Professional Directory",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render avatars (svg over http).
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RustyTalentApp::new(cc, config)))
        }),
    )
}
