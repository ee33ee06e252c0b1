//! Split view and right-panel tab state.

use std::time::Instant;

pub const MIN_SPLIT_RATIO: f32 = 20.0;
pub const MAX_SPLIT_RATIO: f32 = 80.0;
pub const DEFAULT_SPLIT_RATIO: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightTab {
    #[default]
    Code,
    Preview,
}

impl RightTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Code => "Code Editor",
            Self::Preview => "Live Preview",
        }
    }
}

/// Marks the drag's lifetime. It holds no OS resource; creating and dropping
/// it only traces when the drag started and how long it lasted, whatever
/// ended it.
#[derive(Debug)]
pub struct PointerCapture {
    started_at: Instant,
}

impl PointerCapture {
    fn start() -> Self {
        tracing::trace!("split drag started");
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        tracing::trace!(
            held_ms = self.started_at.elapsed().as_millis() as u64,
            "split drag ended"
        );
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PointerCapture),
}

/// Percentage of the container width given to the left panel.
#[derive(Debug)]
pub struct SplitResizer {
    ratio: f32,
    state: DragState,
}

impl SplitResizer {
    pub fn new(initial_ratio: f32) -> Self {
        Self {
            ratio: clamp_ratio(initial_ratio),
            state: DragState::Idle,
        }
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn begin(&mut self) {
        if !self.is_dragging() {
            self.state = DragState::Dragging(PointerCapture::start());
        }
    }

    /// Follows the pointer while dragging; ignored when idle or when the
    /// container has no width.
    pub fn drag_to(&mut self, pointer_x: f32, container_left: f32, container_width: f32) -> f32 {
        if self.is_dragging() && container_width > 0.0 {
            let ratio = (pointer_x - container_left) / container_width * 100.0;
            if ratio.is_finite() {
                self.ratio = clamp_ratio(ratio);
            }
        }
        self.ratio
    }

    pub fn end(&mut self) {
        if self.is_dragging() {
            self.state = DragState::Idle;
        }
    }
}

impl Default for SplitResizer {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_RATIO)
    }
}

fn clamp_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        return DEFAULT_SPLIT_RATIO;
    }
    ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_initial_ratio() {
        let resizer = SplitResizer::default();
        assert_eq!(resizer.ratio(), 40.0);
        assert!(!resizer.is_dragging());
        assert_eq!(SplitResizer::new(95.0).ratio(), MAX_SPLIT_RATIO);
    }

    #[test]
    fn drag_to_ten_percent_clamps_to_minimum() {
        let mut resizer = SplitResizer::default();
        resizer.begin();
        assert_eq!(resizer.drag_to(100.0, 0.0, 1000.0), 20.0);
    }

    #[test]
    fn drag_follows_pointer_within_bounds() {
        let mut resizer = SplitResizer::default();
        resizer.begin();
        assert_eq!(resizer.drag_to(300.0, 50.0, 1000.0), 25.0);
        assert_eq!(resizer.drag_to(990.0, 0.0, 1000.0), 80.0);
        resizer.end();
        assert!(!resizer.is_dragging());
        assert_eq!(resizer.ratio(), 80.0);
    }

    #[test]
    fn drag_is_ignored_when_idle_or_zero_width() {
        let mut resizer = SplitResizer::default();
        assert_eq!(resizer.drag_to(500.0, 0.0, 1000.0), 40.0);

        resizer.begin();
        assert_eq!(resizer.drag_to(500.0, 0.0, 0.0), 40.0);
        resizer.end();
        resizer.end();
        assert!(!resizer.is_dragging());
    }

    #[test]
    fn begin_twice_keeps_single_drag() {
        let mut resizer = SplitResizer::default();
        resizer.begin();
        resizer.begin();
        assert!(resizer.is_dragging());
        resizer.end();
        assert!(matches!(resizer.state, DragState::Idle));
    }

    #[test]
    fn code_tab_is_default() {
        assert_eq!(RightTab::default(), RightTab::Code);
        assert_eq!(RightTab::Preview.label(), "Live Preview");
    }
}
