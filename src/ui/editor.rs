use crate::editor::EditorBinding;
use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

/// Renders the editing surface. Returns true when the buffer changed this
/// frame.
pub fn show(ui: &mut egui::Ui, theme: &Theme, editor: &mut EditorBinding) -> bool {
    let Some(path) = editor.active_path().map(str::to_owned) else {
        render_welcome(ui, theme);
        return false;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(&path).color(theme.text_muted));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if let Some(language) = editor.language() {
                ui.label(RichText::new(language).color(theme.text_faint).small());
            }
        });
    });
    ui.separator();

    let mut changed = false;
    ScrollArea::both()
        .id_salt("code_editor")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(editor.buffer_mut())
                    .id_salt(("code_editor_buffer", path.as_str()))
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(40)
                    .lock_focus(true),
            );
            changed = response.changed();
        });
    changed
}

fn render_welcome(ui: &mut egui::Ui, theme: &Theme) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("📝").size(48.0));
            ui.add_space(theme.spacing_16);
            ui.label(RichText::new("Welcome to AI React App Builder").strong().size(20.0));
            ui.label(
                RichText::new(
                    "Select a file from the explorer to start editing, or use the AI assistant to generate new code.",
                )
                .color(theme.text_faint),
            );
        });
    });
}
