use crate::chat::{ChatMessage, Role, Transcript, EXAMPLE_PROMPTS};
use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};

const FOOTER_HEIGHT: f32 = 150.0;
const MAX_DIAGNOSTIC_ROWS: f32 = 90.0;

/// Renders the assistant panel. Returns the prompt to submit, if any.
pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    transcript: &Transcript,
    input: &mut String,
    diagnostics: &[String],
) -> Option<String> {
    render_header(ui, theme);
    ui.separator();

    let transcript_height = (ui.available_height() - FOOTER_HEIGHT).max(120.0);
    ScrollArea::vertical()
        .id_salt("chat_transcript")
        .max_height(transcript_height)
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in transcript.messages() {
                render_message(ui, theme, message);
            }
            if transcript.is_awaiting_reply() {
                render_typing_indicator(ui, theme);
            }
        });

    ui.separator();
    egui::CollapsingHeader::new("Diagnostics")
        .default_open(false)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("diagnostics_log")
                .max_height(MAX_DIAGNOSTIC_ROWS)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in diagnostics {
                        ui.label(RichText::new(entry).color(theme.text_muted).small().monospace());
                    }
                });
        });

    render_composer(ui, theme, transcript.is_awaiting_reply(), input)
}

fn render_header(ui: &mut egui::Ui, theme: &Theme) {
    ui.horizontal(|ui| {
        egui::Frame::new()
            .fill(theme.accent_secondary)
            .corner_radius(egui::CornerRadius::same(theme.radius_8))
            .inner_margin(egui::Margin::same(theme.spacing_8 as i8))
            .show(ui, |ui| {
                ui.label(RichText::new("✨").color(theme.text_on_accent));
            });
        ui.vertical(|ui| {
            ui.label(RichText::new("AI Assistant").strong().size(17.0));
            ui.label(RichText::new("React App Builder").color(theme.text_muted).small());
        });
    });
}

fn render_message(ui: &mut egui::Ui, theme: &Theme, message: &ChatMessage) {
    let from_user = message.role == Role::User;
    let (layout, fill, text_color) = if from_user {
        (
            Layout::right_to_left(Align::Min),
            theme.accent_primary,
            theme.text_on_accent,
        )
    } else {
        (Layout::left_to_right(Align::Min), theme.surface_2, theme.text_primary)
    };

    ui.with_layout(layout, |ui| {
        let avatar = if from_user { "👤" } else { "🤖" };
        ui.label(RichText::new(avatar).size(16.0));
        ui.set_max_width(ui.available_width() * 0.8);
        theme.bubble_frame(fill, from_user).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&message.content).color(text_color));
                ui.label(
                    RichText::new(message.clock_label())
                        .color(text_color.gamma_multiply(0.7))
                        .small(),
                );
            });
        });
    });
    ui.add_space(theme.spacing_8);
}

fn render_typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🤖").size(16.0));
        theme.bubble_frame(theme.surface_2, false).show(ui, |ui| {
            let dots = (ui.input(|i| i.time) * 3.0) as usize % 3 + 1;
            ui.label(RichText::new("●".repeat(dots)).color(theme.accent_muted));
        });
    });
    ui.ctx().request_repaint();
}

fn render_composer(
    ui: &mut egui::Ui,
    theme: &Theme,
    awaiting_reply: bool,
    input: &mut String,
) -> Option<String> {
    let mut send_now = false;
    theme.composer_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let send_width = 64.0;
            let response = ui.add_enabled(
                !awaiting_reply,
                egui::TextEdit::singleline(input)
                    .desired_width(ui.available_width() - send_width)
                    .hint_text("Describe what you want to build..."),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send_now = true;
            }

            let clicked = ui
                .add_enabled(
                    !awaiting_reply && !input.trim().is_empty(),
                    egui::Button::new(RichText::new("Send").color(theme.text_on_accent))
                        .fill(theme.accent_primary),
                )
                .clicked();
            send_now |= clicked;
        });
    });

    let examples = EXAMPLE_PROMPTS
        .iter()
        .map(|prompt| format!("\"{prompt}\""))
        .collect::<Vec<_>>()
        .join(", ");
    ui.label(
        RichText::new(format!("Try: {examples}"))
            .color(theme.text_faint)
            .small(),
    );

    if send_now && !awaiting_reply && !input.trim().is_empty() {
        Some(input.clone())
    } else {
        None
    }
}
