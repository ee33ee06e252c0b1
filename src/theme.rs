use crate::explorer::FileIcon;
use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_0: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub surface_3: Color32,
    pub accent_primary: Color32,
    pub accent_muted: Color32,
    pub accent_secondary: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_faint: Color32,
    pub text_on_accent: Color32,
    pub border_subtle: Color32,
    pub selection_tint: Color32,
    pub icon_code: Color32,
    pub icon_config: Color32,
    pub icon_stylesheet: Color32,
    pub icon_markup: Color32,
    pub icon_image: Color32,
    pub icon_plain: Color32,
    pub resizer_idle: Color32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub spacing_16: f32,
    pub radius_8: u8,
    pub radius_12: u8,
    pub radius_16: u8,
    pub top_bar_height: f32,
    pub tab_bar_height: f32,
    pub explorer_width: f32,
    pub resizer_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_0: Color32::from_rgb(0x11, 0x18, 0x27),
            surface_1: Color32::from_rgb(0x1F, 0x29, 0x37),
            surface_2: Color32::from_rgb(0x37, 0x41, 0x51),
            surface_3: Color32::from_rgb(0x4B, 0x55, 0x63),
            accent_primary: Color32::from_rgb(0x25, 0x63, 0xEB),
            accent_muted: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_secondary: Color32::from_rgb(0x93, 0x33, 0xEA),
            text_primary: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            text_faint: Color32::from_rgb(0x6B, 0x72, 0x80),
            text_on_accent: Color32::WHITE,
            border_subtle: Color32::from_rgb(0x37, 0x41, 0x51),
            selection_tint: Color32::from_rgba_premultiplied(0x0F, 0x25, 0x5E, 51),
            icon_code: Color32::from_rgb(0x60, 0xA5, 0xFA),
            icon_config: Color32::from_rgb(0xFA, 0xCC, 0x15),
            icon_stylesheet: Color32::from_rgb(0x4A, 0xDE, 0x80),
            icon_markup: Color32::from_rgb(0xFB, 0x92, 0x3C),
            icon_image: Color32::from_rgb(0xC0, 0x84, 0xFC),
            icon_plain: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            resizer_idle: Color32::from_rgb(0x37, 0x41, 0x51),
            spacing_8: Self::P8,
            spacing_12: 12.0,
            spacing_16: Self::P16,
            radius_8: Self::R8,
            radius_12: Self::R12,
            radius_16: 16,
            top_bar_height: 48.0,
            tab_bar_height: 44.0,
            explorer_width: 256.0,
            resizer_width: 4.0,
        }
    }
}

impl Theme {
    pub const R8: u8 = 8;
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P16: f32 = 16.0;

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.surface_0;
        visuals.extreme_bg_color = self.surface_0;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        visuals.widgets.noninteractive.bg_fill = self.surface_1;
        visuals.widgets.noninteractive.weak_bg_fill = self.surface_1;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.inactive.bg_fill = self.surface_1;
        visuals.widgets.inactive.weak_bg_fill = self.surface_1;
        visuals.widgets.inactive.fg_stroke.color = self.text_primary;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.surface_2;
        visuals.widgets.hovered.weak_bg_fill = self.surface_2;
        visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        visuals.widgets.active.bg_fill = self.accent_primary;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.widgets.active.fg_stroke.color = self.text_on_accent;
        visuals.selection.bg_fill = self.accent_primary;
        visuals.hyperlink_color = self.accent_muted;
        visuals.window_fill = self.surface_1;
        visuals.window_stroke = Stroke::NONE;
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(17.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Monospace, FontId::monospace(14.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn panel_frame(&self, fill: Color32, inner_padding: i8) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(inner_padding))
            .stroke(Stroke::NONE)
    }

    pub fn bubble_frame(&self, fill: Color32, from_user: bool) -> Frame {
        let mut radius = CornerRadius::same(self.radius_16);
        if from_user {
            radius.se = 6;
        } else {
            radius.sw = 6;
        }
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(radius)
            .stroke(Stroke::NONE)
    }

    pub fn composer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_1)
            .inner_margin(Margin::symmetric(self.spacing_12 as i8, 10))
            .corner_radius(CornerRadius::same(self.radius_8))
            .stroke(Stroke::new(1.0, self.surface_3))
    }

    pub fn icon_color(&self, icon: FileIcon) -> Color32 {
        match icon {
            FileIcon::FolderOpen | FileIcon::FolderClosed | FileIcon::Code => self.icon_code,
            FileIcon::Config => self.icon_config,
            FileIcon::Stylesheet => self.icon_stylesheet,
            FileIcon::Markup => self.icon_markup,
            FileIcon::Image => self.icon_image,
            FileIcon::Plain => self.icon_plain,
        }
    }

    pub fn resizer_fill(&self, active: bool) -> Color32 {
        if active {
            self.accent_muted
        } else {
            self.resizer_idle
        }
    }
}
