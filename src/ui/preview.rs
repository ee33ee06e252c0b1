use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

/// Read-only view of the synthesized document. Nothing typed here reaches
/// the workspace.
pub fn show(ui: &mut egui::Ui, theme: &Theme, document: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Live Preview").strong());
        ui.label(
            RichText::new("sandboxed, read-only")
                .color(theme.text_faint)
                .small(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Copy HTML").clicked() {
                ui.ctx().copy_text(document.to_string());
                tracing::debug!(bytes = document.len(), "preview document copied");
            }
        });
    });
    ui.separator();

    let mut view = document;
    ScrollArea::both()
        .id_salt("preview_document")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut view)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}
