/// Events posted to the UI thread from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    AssistantReply { prompt: String, content: String },
}
