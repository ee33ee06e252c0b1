use crate::layout::RightTab;
use crate::theme::Theme;
use eframe::egui::{self, RichText};

pub fn show(ui: &mut egui::Ui, theme: &Theme, active: RightTab) -> Option<RightTab> {
    let mut selected = None;
    ui.horizontal(|ui| {
        for (tab, glyph) in [(RightTab::Code, "</>"), (RightTab::Preview, "👁")] {
            let is_active = tab == active;
            let color = if is_active {
                theme.text_primary
            } else {
                theme.text_muted
            };
            let button = egui::Button::new(
                RichText::new(format!("{glyph}  {}", tab.label())).color(color),
            )
            .fill(if is_active {
                theme.surface_0
            } else {
                egui::Color32::TRANSPARENT
            })
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(0.0, theme.tab_bar_height - theme.spacing_8));

            let response = ui.add(button);
            if is_active {
                let rect = response.rect;
                ui.painter().hline(
                    rect.x_range(),
                    rect.bottom(),
                    egui::Stroke::new(2.0, theme.accent_muted),
                );
            }
            if response.clicked() && !is_active {
                selected = Some(tab);
            }
        }
    });
    selected
}
