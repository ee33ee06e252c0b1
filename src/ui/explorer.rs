use crate::explorer::{indent_for_level, ExplorerAction, ExplorerState, FileIcon};
use crate::theme::Theme;
use crate::workspace::FileNode;
use eframe::egui::{self, Color32, RichText, ScrollArea, Sense};

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    files: &[FileNode],
    state: &ExplorerState,
    active_path: Option<&str>,
) -> Option<ExplorerAction> {
    ui.label(
        RichText::new("EXPLORER")
            .color(theme.text_muted)
            .small()
            .strong(),
    );
    ui.separator();

    let mut action = None;
    ScrollArea::vertical()
        .id_salt("file_explorer")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            for node in files {
                render_node(ui, theme, node, 0, state, active_path, &mut action);
            }
        });
    action
}

fn render_node(
    ui: &mut egui::Ui,
    theme: &Theme,
    node: &FileNode,
    level: usize,
    state: &ExplorerState,
    active_path: Option<&str>,
    action: &mut Option<ExplorerAction>,
) {
    let expanded = node.is_folder() && state.is_expanded(&node.path);
    let is_active = active_path == Some(node.path.as_str());
    let icon = FileIcon::for_node(node, expanded);
    let (fill, text_color) = if is_active {
        (theme.selection_tint, theme.accent_muted)
    } else {
        (Color32::TRANSPARENT, theme.text_primary)
    };

    let row = egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add_space(indent_for_level(level));
                let chevron = match (node.is_folder(), expanded) {
                    (true, true) => "⏷",
                    (true, false) => "⏵",
                    (false, _) => " ",
                };
                ui.label(RichText::new(chevron).color(theme.text_muted).small());
                ui.label(RichText::new(icon.glyph()).color(theme.icon_color(icon)));
                ui.label(RichText::new(&node.name).color(text_color));
            });
        });

    let response = ui.interact(
        row.response.rect,
        ui.id().with(("explorer_row", node.path.as_str())),
        Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if response.clicked() {
        *action = Some(ExplorerState::click(node));
    }

    if expanded {
        for child in node.children() {
            render_node(ui, theme, child, level + 1, state, active_path, action);
        }
    }
}
