use std::sync::Arc;

use egui::Vec2;

use super::events::DragPayload;
use super::options::DragInstanceConfig;
use super::style::OriginalStyle;
use super::types::{InstanceId, NodeId, Phase};

/// Everything that lives for exactly one gesture.
#[derive(Debug)]
pub(super) struct Gesture {
    pub(super) id: u64,
    pub(super) instance: InstanceId,
    pub(super) config: Arc<DragInstanceConfig>,
    pub(super) element: NodeId,
    pub(super) original_style: OriginalStyle,
    pub(super) placeholder: NodeId,
    pub(super) active_zone: Option<NodeId>,

    /// Pointer minus the element's document origin, at arm time.
    pub(super) pointer_offset: Vec2,

    pub(super) payload: DragPayload,
    pub(super) dragging: bool,
}

/// The single process-wide drag session. `Idle` iff there is no gesture.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    next_id: u64,
    gesture: Option<Gesture>,
}

impl DragSession {
    pub(super) fn phase(&self) -> Phase {
        match &self.gesture {
            None => Phase::Idle,
            Some(g) if g.dragging => Phase::Dragging,
            Some(_) => Phase::Armed,
        }
    }

    pub(super) fn next_gesture_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        id
    }

    pub(super) fn begin(&mut self, gesture: Gesture) {
        debug_assert!(self.gesture.is_none(), "a gesture is already active");
        self.gesture = Some(gesture);
    }

    pub(super) fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub(super) fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        self.gesture.as_mut()
    }

    /// Back to `Idle`. The only way a gesture ends.
    pub(super) fn end(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }
}
