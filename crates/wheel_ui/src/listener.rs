//! Global listener bookkeeping
//!
//! While a drag is active the host must deliver move and end events even when
//! the pointer leaves the region. The tracker asks the host to register exactly
//! the pair matching the locked modality and to remove it on every exit path.

use crate::state::Modality;

/// A document-level listener the host registers on behalf of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    TouchMove,
    TouchEnd,
    MouseMove,
    MouseUp,
}

impl ListenerKind {
    /// The move/end pair for a modality.
    pub fn for_modality(modality: Modality) -> &'static [ListenerKind] {
        match modality {
            Modality::Touch => &[ListenerKind::TouchMove, ListenerKind::TouchEnd],
            Modality::Pointer => &[ListenerKind::MouseMove, ListenerKind::MouseUp],
            Modality::None => &[],
        }
    }
}

/// The host's global event system.
pub trait ListenerHost {
    /// Start forwarding events of `kind` to the tracker.
    fn add_listener(&mut self, kind: ListenerKind);

    /// Stop forwarding events of `kind`.
    fn remove_listener(&mut self, kind: ListenerKind);
}

/// A host without global listeners. Events outside the region are simply not
/// delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl ListenerHost for Detached {
    fn add_listener(&mut self, _kind: ListenerKind) {}

    fn remove_listener(&mut self, _kind: ListenerKind) {}
}
