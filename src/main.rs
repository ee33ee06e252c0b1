mod app;
mod chat;
mod config;
mod editor;
mod error;
mod event;
mod explorer;
mod layout;
mod logging;
mod preview;
mod theme;
mod ui;
mod workspace;

use app::AppForge;
use chat::assistant::SimulatedAssistant;
use config::{AppConfig, WINDOW_TITLE};
use error::StartupError;
use std::sync::mpsc;
use workspace::Workspace;

fn main() -> Result<(), StartupError> {
    let config = AppConfig::default();
    config.validate()?;

    let log_rx = logging::init(&config.log_filter);
    let workspace = Workspace::seeded()?;
    let (tx, rx) = mpsc::channel();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("appforge-runtime")
        .build()?;

    let assistant = SimulatedAssistant::new(runtime.handle().clone(), tx, config.reply_delay);
    tracing::info!(
        files = workspace.file_paths().len(),
        split_ratio = config.split_ratio,
        reply_delay_ms = config.reply_delay.as_millis() as u64,
        "starting AppForge"
    );

    let mut app = AppForge::new(&config, workspace, assistant, rx, log_rx);
    let _runtime = runtime;

    eframe::run_native(
        WINDOW_TITLE,
        config.native_options(),
        Box::new(move |creation_context| {
            app.attach(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
