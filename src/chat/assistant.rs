use crate::event::AppEvent;
use std::sync::{mpsc, Arc};
use tokio::runtime::Handle;
use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub fn reply_for(prompt: &str) -> String {
    format!("I'll help you with: \"{prompt}\". Let me generate the code for you right away!")
}

/// Canned assistant that echoes each prompt after a fixed delay.
///
/// Pending replies are bound to this value: dropping it (or calling
/// [`SimulatedAssistant::shutdown`]) cancels every reply not yet delivered.
pub struct SimulatedAssistant {
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
    delay: Duration,
    cancel: CancellationToken,
    repaint: Option<RepaintHook>,
}

impl SimulatedAssistant {
    pub fn new(runtime_handle: Handle, tx: mpsc::Sender<AppEvent>, delay: Duration) -> Self {
        Self {
            runtime_handle,
            tx,
            delay,
            cancel: CancellationToken::new(),
            repaint: None,
        }
    }

    /// Called after each delivered reply so the UI thread wakes up.
    pub fn set_repaint(&mut self, repaint: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(repaint));
    }

    pub fn respond(&self, prompt: String) {
        let tx = self.tx.clone();
        let token = self.cancel.child_token();
        let delay = self.delay;
        let repaint = self.repaint.clone();

        self.runtime_handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(prompt = %prompt, "assistant reply cancelled");
                }
                _ = time::sleep(delay) => {
                    let content = reply_for(&prompt);
                    if tx.send(AppEvent::AssistantReply { prompt, content }).is_err() {
                        tracing::debug!("assistant reply dropped: event channel closed");
                        return;
                    }
                    if let Some(repaint) = repaint {
                        repaint();
                    }
                }
            }
        });
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    #[cfg(test)]
    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for SimulatedAssistant {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
