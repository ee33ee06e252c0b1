use crate::chat::assistant::SimulatedAssistant;
use crate::chat::Transcript;
use crate::config::AppConfig;
use crate::editor::EditorBinding;
use crate::event::AppEvent;
use crate::explorer::{ExplorerAction, ExplorerState};
use crate::layout::{RightTab, SplitResizer};
use crate::preview::{PreviewCache, ROOT_COMPONENT_PATH};
use crate::theme::Theme;
use crate::ui;
use crate::workspace::Workspace;
use eframe::egui::{self, RichText};
use std::sync::mpsc::{Receiver, TryRecvError};

const MAX_DIAGNOSTICS: usize = 500;

pub struct AppForge {
    rx: Receiver<AppEvent>,
    log_rx: Option<Receiver<String>>,
    assistant: SimulatedAssistant,
    workspace: Workspace,
    preview: PreviewCache,
    editor: EditorBinding,
    explorer: ExplorerState,
    transcript: Transcript,
    resizer: SplitResizer,
    active_tab: RightTab,
    input_buffer: String,
    diagnostics_log: Vec<String>,
    theme: Theme,
}

impl AppForge {
    pub fn new(
        config: &AppConfig,
        workspace: Workspace,
        assistant: SimulatedAssistant,
        rx: Receiver<AppEvent>,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let mut editor = EditorBinding::new();
        if workspace.is_file(ROOT_COMPONENT_PATH) {
            editor.open(ROOT_COMPONENT_PATH, &workspace);
        }

        Self {
            rx,
            log_rx,
            assistant,
            workspace,
            preview: PreviewCache::new(),
            editor,
            explorer: ExplorerState::default(),
            transcript: Transcript::seeded(),
            resizer: SplitResizer::new(config.split_ratio),
            active_tab: RightTab::default(),
            input_buffer: String::new(),
            diagnostics_log: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Binds the app to the window's egui context once it exists.
    pub fn attach(&mut self, ctx: &egui::Context) {
        self.theme.apply_visuals(ctx);
        let ctx = ctx.clone();
        self.assistant.set_repaint(move || ctx.request_repaint());
    }

    fn log_diagnostic(&mut self, line: String) {
        self.diagnostics_log.push(line);
        if self.diagnostics_log.len() > MAX_DIAGNOSTICS {
            let overflow = self.diagnostics_log.len() - MAX_DIAGNOSTICS;
            self.diagnostics_log.drain(..overflow);
        }
    }

    fn submit_prompt(&mut self, prompt: String) {
        match self.transcript.submit(&prompt) {
            Ok(_) => {
                tracing::info!(prompt = %prompt, "prompt submitted");
                self.assistant.respond(prompt);
                self.input_buffer.clear();
            }
            Err(rejection) => {
                tracing::debug!(?rejection, "prompt not submitted");
            }
        }
    }

    fn select_file(&mut self, path: &str) {
        self.editor.open(path, &self.workspace);
        self.set_tab(RightTab::Code);
    }

    fn set_tab(&mut self, tab: RightTab) {
        if self.active_tab != tab {
            tracing::debug!(tab = tab.label(), "right panel tab changed");
            self.active_tab = tab;
        }
    }

    fn apply_explorer_action(&mut self, action: ExplorerAction) {
        match action {
            ExplorerAction::Toggle(path) => self.explorer.toggle(&path),
            ExplorerAction::Select(path) => self.select_file(&path),
        }
    }

    fn drain_events(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply { prompt, content } => {
                self.transcript.complete(content);
                tracing::info!(prompt = %prompt, "assistant reply delivered");
            }
        }
    }

    fn drain_logs(&mut self) {
        let Some(log_rx) = self.log_rx.take() else {
            return;
        };
        let lines: Vec<String> = log_rx.try_iter().collect();
        self.log_rx = Some(log_rx);
        for line in lines {
            self.log_diagnostic(line);
        }
    }

    /// Ends the drag on release or when the pointer leaves the window;
    /// otherwise follows the pointer across the container.
    fn track_split_drag(&mut self, ctx: &egui::Context, container: egui::Rect) {
        if !self.resizer.is_dragging() {
            return;
        }

        let (primary_down, pointer) =
            ctx.input(|i| (i.pointer.primary_down(), i.pointer.hover_pos()));
        match pointer {
            Some(pos) if primary_down => {
                self.resizer
                    .drag_to(pos.x, container.left(), container.width());
                ctx.set_cursor_icon(egui::CursorIcon::ResizeColumn);
            }
            _ => {
                self.resizer.end();
                tracing::debug!(ratio = self.resizer.ratio(), "split drag finished");
            }
        }
    }

    fn render_top_bar(&self, ctx: &egui::Context) {
        let theme = &self.theme;
        egui::TopBottomPanel::top("top_bar")
            .exact_height(theme.top_bar_height)
            .frame(theme.panel_frame(theme.surface_1, theme.spacing_16 as i8))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    egui::Frame::new()
                        .fill(theme.accent_primary)
                        .corner_radius(egui::CornerRadius::same(theme.radius_8))
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.label(RichText::new("AI").strong().color(theme.text_on_accent));
                        });
                    ui.label(RichText::new("React App Builder").strong().size(18.0));
                });
            });
    }

    fn render_prompt_panel(&mut self, ctx: &egui::Context, container: egui::Rect) {
        let width = container.width() * self.resizer.ratio() / 100.0 - self.theme.resizer_width;
        let mut submitted = None;
        let Self {
            theme,
            transcript,
            input_buffer,
            diagnostics_log,
            ..
        } = self;

        egui::SidePanel::left("prompt_panel")
            .resizable(false)
            .show_separator_line(false)
            .exact_width(width.max(0.0))
            .frame(theme.panel_frame(theme.surface_0, theme.spacing_16 as i8))
            .show(ctx, |ui| {
                submitted = ui::prompt::show(ui, theme, transcript, input_buffer, diagnostics_log);
            });

        if let Some(prompt) = submitted {
            self.submit_prompt(prompt);
        }
    }

    fn render_split_handle(&mut self, ctx: &egui::Context) {
        let fill = self.theme.resizer_fill(self.resizer.is_dragging());
        egui::SidePanel::left("split_handle")
            .resizable(false)
            .show_separator_line(false)
            .exact_width(self.theme.resizer_width)
            .frame(egui::Frame::new().fill(fill))
            .show(ctx, |ui| {
                let response = ui.interact(
                    ui.max_rect(),
                    egui::Id::new("split_handle_drag"),
                    egui::Sense::drag(),
                );
                if response.hovered() || response.dragged() {
                    ctx.set_cursor_icon(egui::CursorIcon::ResizeColumn);
                }
                if response.drag_started() {
                    self.resizer.begin();
                }
            });
    }

    fn render_right_panel(&mut self, ctx: &egui::Context) {
        let mut tab_change = None;
        let mut explorer_action = None;
        let mut edited = false;
        let active_tab = self.active_tab;
        let Self {
            theme,
            workspace,
            preview,
            editor,
            explorer,
            ..
        } = self;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface_0))
            .show(ctx, |ui| {
                egui::TopBottomPanel::top("editor_tabs")
                    .exact_height(theme.tab_bar_height)
                    .frame(theme.panel_frame(theme.surface_1, 0))
                    .show_inside(ui, |ui| {
                        tab_change = ui::tabs::show(ui, theme, active_tab);
                    });

                match active_tab {
                    RightTab::Code => {
                        egui::SidePanel::left("file_explorer_panel")
                            .resizable(false)
                            .exact_width(theme.explorer_width)
                            .frame(theme.panel_frame(theme.surface_1, theme.spacing_8 as i8))
                            .show_inside(ui, |ui| {
                                explorer_action = ui::explorer::show(
                                    ui,
                                    theme,
                                    workspace.files(),
                                    explorer,
                                    editor.active_path(),
                                );
                            });
                        egui::CentralPanel::default()
                            .frame(theme.panel_frame(theme.surface_0, theme.spacing_8 as i8))
                            .show_inside(ui, |ui| {
                                editor.sync(workspace);
                                edited = ui::editor::show(ui, theme, editor);
                            });
                    }
                    RightTab::Preview => {
                        egui::CentralPanel::default()
                            .frame(theme.panel_frame(theme.surface_0, theme.spacing_8 as i8))
                            .show_inside(ui, |ui| {
                                let document = preview.document(workspace.files());
                                ui::preview::show(ui, theme, document);
                            });
                    }
                }
            });

        if edited {
            self.editor.apply_change(&mut self.workspace);
        }
        if let Some(action) = explorer_action {
            self.apply_explorer_action(action);
        }
        if let Some(tab) = tab_change {
            self.set_tab(tab);
        }
    }
}

impl eframe::App for AppForge {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        self.drain_logs();
        self.render_top_bar(ctx);

        let container = ctx.available_rect();
        self.track_split_drag(ctx, container);
        self.render_prompt_panel(ctx, container);
        self.render_split_handle(ctx);
        self.render_right_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.resizer.end();
        self.assistant.shutdown();
        tracing::info!("AppForge shutting down");
    }
}
