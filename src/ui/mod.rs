//! egui rendering of [`AppState`](crate::state::AppState).

pub mod cards;
pub mod modal;
pub mod panels;
pub mod plot;

use eframe::egui::{Color32, RichText, Ui};

/// Small pill-style label.
pub(crate) fn chip(ui: &mut Ui, text: &str, fill: Color32) {
    ui.label(
        RichText::new(format!(" {text} "))
            .small()
            .background_color(fill),
    );
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("inovação", 20), "inovação");
        assert_eq!(preview("inovação social", 8), "inovação…");
        assert_eq!(preview("ab cd", 3), "ab…");
    }
}
