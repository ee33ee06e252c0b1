use crate::chat::assistant::DEFAULT_REPLY_DELAY;
use crate::error::ConfigError;
use crate::layout::{DEFAULT_SPLIT_RATIO, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO};
use eframe::egui;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "React App Builder";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Initial width of the prompt panel, in percent.
    pub split_ratio: f32,
    pub reply_delay: Duration,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 800.0],
            min_window_size: [1024.0, 640.0],
            split_ratio: DEFAULT_SPLIT_RATIO,
            reply_delay: DEFAULT_REPLY_DELAY,
            log_filter: "appforge=info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&self.split_ratio) {
            return Err(ConfigError::SplitRatio(self.split_ratio));
        }
        for [width, height] in [self.window_size, self.min_window_size] {
            if !(width > 0.0 && height > 0.0) {
                return Err(ConfigError::WindowSize(width, height));
            }
        }
        Ok(())
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}
