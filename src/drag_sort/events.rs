use itertools::Itertools as _;

use super::types::{InstanceId, NodeId};

/// String key/value data attached to one gesture.
///
/// Cleared when a drag starts; observers fill it in [`DragObserver::drag_start`] and read it
/// back in [`DragObserver::drop`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragPayload {
    data: ahash::HashMap<String, String>,
}

impl DragPayload {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).sorted_unstable().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    DragStart,
    Drag,
    DragEnter,
    DragLeave,
    DragOver,
    Drop,
    DragEnd,
}

impl DragEventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::Drag => "drag",
            Self::DragEnter => "dragenter",
            Self::DragLeave => "dragleave",
            Self::DragOver => "dragover",
            Self::Drop => "drop",
            Self::DragEnd => "dragend",
        }
    }
}

/// Receives gesture lifecycle notifications, synchronously and in order.
///
/// Every method has a no-op default. The core never mutates drop zones itself: moving the dragged
/// element into the zone on [`Self::drop`] is up to the observer.
pub trait DragObserver {
    fn drag_start(&mut self, _instance: InstanceId, _payload: &mut DragPayload, _element: NodeId) {}

    fn drag(&mut self, _instance: InstanceId, _element: NodeId, _zone: Option<NodeId>) {}

    fn drag_enter(&mut self, _instance: InstanceId, _element: NodeId, _zone: NodeId) {}

    fn drag_leave(&mut self, _instance: InstanceId, _element: NodeId, _zone: NodeId) {}

    fn drag_over(&mut self, _instance: InstanceId, _element: NodeId, _zone: NodeId) {}

    fn drop(
        &mut self,
        _instance: InstanceId,
        _payload: &DragPayload,
        _element: NodeId,
        _zone: NodeId,
    ) {
    }

    fn drag_end(
        &mut self,
        _instance: InstanceId,
        _element: Option<NodeId>,
        _zone: Option<NodeId>,
    ) {
    }
}

impl DragObserver for () {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggedEvent {
    pub kind: DragEventKind,
    pub instance: InstanceId,
    pub element: Option<NodeId>,
    pub zone: Option<NodeId>,
}

/// An observer that records everything it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<LoggedEvent>,

    /// Written into the payload on every `dragstart`.
    pub start_payload: Vec<(String, String)>,

    /// Payload as seen by the last `drop`.
    pub dropped_payload: Option<DragPayload>,
}

impl EventLog {
    pub fn kinds(&self) -> Vec<DragEventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn count(&self, kind: DragEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped_payload = None;
    }

    fn push(
        &mut self,
        kind: DragEventKind,
        instance: InstanceId,
        element: Option<NodeId>,
        zone: Option<NodeId>,
    ) {
        self.events.push(LoggedEvent {
            kind,
            instance,
            element,
            zone,
        });
    }
}

impl DragObserver for EventLog {
    fn drag_start(&mut self, instance: InstanceId, payload: &mut DragPayload, element: NodeId) {
        for (key, value) in &self.start_payload {
            payload.set(key.clone(), value.clone());
        }
        self.push(DragEventKind::DragStart, instance, Some(element), None);
    }

    fn drag(&mut self, instance: InstanceId, element: NodeId, zone: Option<NodeId>) {
        self.push(DragEventKind::Drag, instance, Some(element), zone);
    }

    fn drag_enter(&mut self, instance: InstanceId, element: NodeId, zone: NodeId) {
        self.push(DragEventKind::DragEnter, instance, Some(element), Some(zone));
    }

    fn drag_leave(&mut self, instance: InstanceId, element: NodeId, zone: NodeId) {
        self.push(DragEventKind::DragLeave, instance, Some(element), Some(zone));
    }

    fn drag_over(&mut self, instance: InstanceId, element: NodeId, zone: NodeId) {
        self.push(DragEventKind::DragOver, instance, Some(element), Some(zone));
    }

    fn drop(&mut self, instance: InstanceId, payload: &DragPayload, element: NodeId, zone: NodeId) {
        self.dropped_payload = Some(payload.clone());
        self.push(DragEventKind::Drop, instance, Some(element), Some(zone));
    }

    fn drag_end(&mut self, instance: InstanceId, element: Option<NodeId>, zone: Option<NodeId>) {
        self.push(DragEventKind::DragEnd, instance, element, zone);
    }
}
