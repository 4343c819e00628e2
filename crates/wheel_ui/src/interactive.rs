//! Drag tracking for a rectangular hit region
//!
//! `Interactive` turns raw [`Event`]s into [`RelativePosition`]s and hands
//! them to its start/move callbacks. It keeps one input modality per session:
//! some platforms fire both touch and mouse events for the same physical
//! gesture, and only the first channel observed drives the drag.
//!
//! The host owns the lifecycle. It calls [`Interactive::start_session`] when
//! the region mounts and [`Interactive::end_session`] when it goes away, and
//! forwards events either through [`Interactive::handle_event`] or the three
//! `on_interaction_*` operations.

use crate::callback::Callback;
use crate::event::Event;
use crate::layout::RelativePosition;
use crate::listener::{Detached, ListenerHost, ListenerKind};
use crate::region::Region;
use crate::state::{InteractionState, Modality};

/// Pointer interaction tracker for one region.
pub struct Interactive<M, H: ListenerHost = Detached> {
    /// Region positions are normalized against. `None` when unmounted.
    region: Option<Box<dyn Region>>,
    /// Host event system that owns the global listeners
    host: H,
    /// Current session
    state: InteractionState,
    /// Modality whose global listeners are currently registered
    attached: Option<Modality>,
    /// Set once a touch start is accepted; later mouse starts are rejected
    touch_seen: bool,
    /// Called with the position of an accepted start event
    on_start: Callback<RelativePosition, M>,
    /// Called with the position of each tracked move
    on_move: Callback<RelativePosition, M>,
}

impl<M> Interactive<M, Detached> {
    /// Create a tracker without global listeners.
    pub fn new() -> Self {
        Self::with_host(Detached)
    }
}

impl<M> Default for Interactive<M, Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, H: ListenerHost> Interactive<M, H> {
    /// Create a tracker that registers its global listeners with `host`.
    pub fn with_host(host: H) -> Self {
        Self {
            region: None,
            host,
            state: InteractionState::default(),
            attached: None,
            touch_seen: false,
            on_start: Callback::none(),
            on_move: Callback::none(),
        }
    }

    /// Set the start callback
    pub fn on_start<F>(mut self, handler: F) -> Self
    where
        F: Fn(RelativePosition) -> M + 'static,
    {
        self.on_start = Callback::new(handler);
        self
    }

    /// Set the move callback
    pub fn on_move<F>(mut self, handler: F) -> Self
    where
        F: Fn(RelativePosition) -> M + 'static,
    {
        self.on_move = Callback::new(handler);
        self
    }

    /// Replace the start callback in place
    pub fn set_on_start<F>(&mut self, handler: F)
    where
        F: Fn(RelativePosition) -> M + 'static,
    {
        self.on_start.set(handler);
    }

    /// Replace the move callback in place
    pub fn set_on_move<F>(&mut self, handler: F)
    where
        F: Fn(RelativePosition) -> M + 'static,
    {
        self.on_move.set(handler);
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Whether a region is mounted.
    pub fn is_mounted(&self) -> bool {
        self.region.is_some()
    }

    /// Modality whose global listeners are registered, if any.
    pub fn attached_listeners(&self) -> Option<Modality> {
        self.attached
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Mount the tracker on `region`.
    ///
    /// Remounting drops any session running against the previous region.
    pub fn start_session<R: Region + 'static>(&mut self, region: R) {
        if self.region.is_some() {
            self.end_session();
        }
        self.region = Some(Box::new(region));
        log::debug!("Interactive: mounted");
    }

    /// Unmount the tracker. Listeners are removed and the touch preference is
    /// forgotten; later events are no-ops until the next `start_session`.
    pub fn end_session(&mut self) {
        self.stop();
        self.region = None;
        self.touch_seen = false;
        log::debug!("Interactive: unmounted");
    }

    /// Handle the event that begins a drag.
    ///
    /// Returns the start callback's message when the event is accepted. A start
    /// while already dragging on the same modality restarts the session.
    pub fn on_interaction_start(&mut self, event: &Event) -> Option<M> {
        let modality = event.modality();
        if !self.accepts(modality) {
            return None;
        }

        let Some(position) = self.relative_position(event) else {
            log::trace!("Interactive: start ignored, region or pointer unavailable");
            return None;
        };

        let message = self.on_start.call(position);
        self.state.begin(modality);
        self.touch_seen = modality == Modality::Touch;
        self.sync_listeners();
        log::debug!("Interactive: drag started ({:?})", modality);
        message
    }

    /// Handle a movement event delivered by the global move listener.
    ///
    /// A move without an active press means the release happened where no end
    /// event could be observed, so the drag stops.
    pub fn on_interaction_move(&mut self, event: &Event) -> Option<M> {
        if !self.state.is_dragging() {
            return None;
        }

        let modality = event.modality();
        if modality != self.state.modality {
            log::trace!(
                "Interactive: dropped {:?} move during {:?} drag",
                modality,
                self.state.modality
            );
            return None;
        }

        if event.is_pressed() {
            if let Some(position) = self.relative_position(event) {
                return self.on_move.call(position);
            }
        }

        self.stop();
        None
    }

    /// End the drag. Safe to call in any state.
    pub fn on_interaction_end(&mut self) {
        self.stop();
    }

    /// Route a raw event to the matching operation.
    ///
    /// Moves and releases only count while dragging on the same modality, the
    /// way the global listeners would deliver them.
    pub fn handle_event(&mut self, event: &Event) -> Option<M> {
        match event {
            Event::MousePressed { .. } | Event::TouchStarted { .. } => {
                self.on_interaction_start(event)
            }
            Event::MouseMoved { .. } | Event::TouchMoved { .. } => self.on_interaction_move(event),
            Event::MouseReleased { .. } | Event::TouchEnded { .. } => {
                if self.state.is_dragging() && !self.state.conflicts_with(event.modality()) {
                    self.on_interaction_end();
                }
                None
            }
        }
    }

    /// Modality arbitration for start events.
    fn accepts(&self, modality: Modality) -> bool {
        if self.state.conflicts_with(modality) {
            log::trace!(
                "Interactive: dropped {:?} start during {:?} drag",
                modality,
                self.state.modality
            );
            return false;
        }
        if self.touch_seen && modality != Modality::Touch {
            log::trace!("Interactive: dropped {:?} start after touch input", modality);
            return false;
        }
        true
    }

    fn relative_position(&self, event: &Event) -> Option<RelativePosition> {
        let pointer = event.primary_position()?;
        let rect = self.region.as_ref()?.bounding_rect()?;
        Some(rect.relative_position(pointer))
    }

    fn stop(&mut self) {
        if self.state.is_dragging() {
            log::debug!("Interactive: drag stopped");
        }
        self.state.end();
        self.sync_listeners();
    }

    /// Bring the registered listeners in line with the session state.
    fn sync_listeners(&mut self) {
        let wanted = self.state.is_dragging().then_some(self.state.modality);
        if self.attached == wanted {
            return;
        }

        if let Some(previous) = self.attached.take() {
            for kind in ListenerKind::for_modality(previous) {
                self.host.remove_listener(*kind);
            }
            log::debug!("Interactive: detached {:?} listeners", previous);
        }

        if let Some(modality) = wanted {
            for kind in ListenerKind::for_modality(modality) {
                self.host.add_listener(*kind);
            }
            self.attached = Some(modality);
            log::debug!("Interactive: attached {:?} listeners", modality);
        }
    }
}

impl<M, H: ListenerHost> Drop for Interactive<M, H> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<M, H: ListenerHost> std::fmt::Debug for Interactive<M, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interactive")
            .field("mounted", &self.is_mounted())
            .field("state", &self.state)
            .field("attached", &self.attached)
            .field("touch_seen", &self.touch_seen)
            .finish()
    }
}
