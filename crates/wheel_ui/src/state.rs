//! Interaction session state

/// Input channel driving a drag session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    /// No session has claimed a channel
    #[default]
    None,
    /// Touch input
    Touch,
    /// Mouse or pen input
    Pointer,
}

/// Drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Press is held and movement is tracked
    Dragging,
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    /// Start dragging
    pub fn start_drag(&mut self) {
        *self = DragState::Dragging;
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        *self = DragState::Idle;
    }
}

/// Transient state of one interaction session.
///
/// `modality` is only meaningful while dragging; an idle session holds
/// `Modality::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Channel locked in by the accepted start event
    pub modality: Modality,
    /// Drag lifecycle
    pub drag: DragState,
}

impl InteractionState {
    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Enter `Dragging`, locking the session to `modality`.
    ///
    /// Calling this while already dragging restarts the session.
    pub fn begin(&mut self, modality: Modality) {
        self.modality = modality;
        self.drag.start_drag();
    }

    /// Return to `Idle` and release the modality lock.
    pub fn end(&mut self) {
        self.modality = Modality::None;
        self.drag.stop_drag();
    }

    /// Whether an event on `modality` conflicts with the locked channel.
    pub fn conflicts_with(&self, modality: Modality) -> bool {
        self.is_dragging() && self.modality != modality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = InteractionState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.modality, Modality::None);
    }

    #[test]
    fn test_begin_and_end() {
        let mut state = InteractionState::default();
        state.begin(Modality::Touch);
        assert!(state.is_dragging());
        assert!(state.conflicts_with(Modality::Pointer));
        assert!(!state.conflicts_with(Modality::Touch));

        state.end();
        assert_eq!(state, InteractionState::default());
        assert!(!state.conflicts_with(Modality::Pointer));
    }
}
