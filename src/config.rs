use std::path::PathBuf;
use std::time::Duration;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/professionals.json";

/// eframe storage key for the theme preference.
pub const THEME_KEY: &str = "rusty-talent-theme";

/// Static application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dataset loaded at startup and on File → Reload.
    pub data_path: PathBuf,
    /// How long a toast stays on screen.
    pub toast_duration: Duration,
    /// Technical skills shown on a profile card before the "+N" overflow.
    pub card_skill_preview: usize,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            toast_duration: Duration::from_secs(4),
            card_skill_preview: 4,
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
